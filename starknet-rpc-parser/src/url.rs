//! Node endpoint URL validation and construction
//!
//! Validation is a loose heuristic, not an RFC 3986 parser: it accepts strings
//! shaped like absolute URLs and rejects bare paths and filenames.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// A URL must match the first expression and then at least one of the other two.
// The check is split in two levels so no single expression has to backtrack
// across the whole input.
static PROTOCOL_AND_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9_]+:)?//(\S+)$").expect("protocol pattern is valid")
});

static LOCALHOST_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^localhost[:?0-9]*(?:[^:?0-9]\S*)?$").expect("localhost pattern is valid")
});

static NON_LOCALHOST_DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s.]+\.\S{2,}$").expect("domain pattern is valid"));

/// Loosely validate a URL string.
///
/// Returns `false` for `None`, the empty string and anything that is not shaped
/// like `[scheme:]//host...`. Never panics.
///
/// # Examples
///
/// ```
/// use starknet_rpc_parser::url::is_url;
///
/// assert!(is_url(Some("http://localhost:5050")));
/// assert!(!is_url(Some("/v1/foo")));
/// assert!(!is_url(None));
/// ```
pub fn is_url(candidate: Option<&str>) -> bool {
    let candidate = match candidate {
        Some(s) if !s.is_empty() => s,
        _ => return false,
    };

    let everything_after_protocol = match PROTOCOL_AND_DOMAIN_RE
        .captures(candidate)
        .and_then(|caps| caps.get(1))
    {
        Some(m) if !m.as_str().is_empty() => m.as_str(),
        _ => return false,
    };

    LOCALHOST_DOMAIN_RE.is_match(everything_after_protocol)
        || NON_LOCALHOST_DOMAIN_RE.is_match(everything_after_protocol)
}

/// Build the endpoint URL to call.
///
/// When `url_or_path` is itself a URL it wins outright, scheme and host
/// included. Otherwise it is treated as a path under `base_url`; when it is
/// absent or empty `default_path` is used instead.
///
/// # Arguments
///
/// * `base_url` - Node base URL
/// * `default_path` - Path used when the caller gives none
/// * `url_or_path` - Optional full URL override or path fragment
pub fn build_url(base_url: &str, default_path: &str, url_or_path: Option<&str>) -> String {
    if let Some(url) = url_or_path.filter(|u| is_url(Some(*u))) {
        trace!(url, "Using caller supplied URL verbatim");
        return url.to_string();
    }

    let path = match url_or_path {
        Some(p) if !p.is_empty() => p,
        _ => default_path,
    };
    join_url(base_url, path)
}

/// Join a base URL and a path with exactly one separating slash.
///
/// Slashes are collapsed at the joint and a trailing run of slashes on `path`
/// is kept as a single one. A `/` directly in front of `?` or `#` is dropped
/// anywhere in the result, except before a `#!` fragment. No `.`/`..`
/// segment normalization is done.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return path.to_string();
    }

    let head = base.trim_end_matches('/');
    let mut tail = path.trim_start_matches('/').to_string();
    let trimmed_len = tail.trim_end_matches('/').len();
    if trimmed_len < tail.len() {
        tail.truncate(trimmed_len + 1);
    }

    let joined = if head.ends_with(':') {
        // base was a bare "scheme://"
        format!("{head}//{tail}")
    } else {
        format!("{head}/{tail}")
    };
    strip_slash_before_query(&joined)
}

/// Drop every `/` that directly precedes `?` or `#` (but not `#!`).
fn strip_slash_before_query(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(url.len());
    for (i, c) in url.char_indices() {
        if c == '/' {
            let drop = match bytes.get(i + 1) {
                Some(b'?') => true,
                Some(b'#') => bytes.get(i + 2) != Some(&b'!'),
                _ => false,
            };
            if drop {
                continue;
            }
        }
        out.push(c);
    }
    out
}
