//! Unbounded-precision integer conversion for fee and gas values
//!
//! Nodes report fees either as hex strings, decimal strings or plain JSON
//! numbers. Everything is funneled into [`BigInt`] without passing through
//! floating point.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num, Zero};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A JSON value that can be read as an integer: a string or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BigNumberish {
    Str(String),
    Num(serde_json::Number),
}

impl From<&str> for BigNumberish {
    fn from(value: &str) -> Self {
        BigNumberish::Str(value.to_string())
    }
}

impl From<String> for BigNumberish {
    fn from(value: String) -> Self {
        BigNumberish::Str(value)
    }
}

impl From<u64> for BigNumberish {
    fn from(value: u64) -> Self {
        BigNumberish::Num(value.into())
    }
}

/// Convert a string or JSON number into a [`BigInt`].
///
/// Strings follow the JavaScript `BigInt()` rules: surrounding whitespace is
/// ignored, the empty string is zero, `0x`/`0o`/`0b` prefixes select the radix
/// and a sign is only allowed on decimal input. Numbers convert only when they
/// are integral and, when they were not read as `u64`/`i64`, no larger than
/// 2^53 in magnitude; larger ones must be sent as strings.
///
/// # Errors
///
/// * `ParseError::InvalidNumber` - The value is not an integer in any accepted form
pub fn to_big_int(value: &BigNumberish) -> Result<BigInt, ParseError> {
    match value {
        BigNumberish::Str(s) => parse_big_int_str(s),
        BigNumberish::Num(n) => number_to_big_int(n),
    }
}

/// Parse an integer string using `BigInt()` string semantics.
pub fn parse_big_int_str(raw: &str) -> Result<BigInt, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        value: raw.to_string(),
    };

    let s = raw.trim();
    if s.is_empty() {
        return Ok(BigInt::zero());
    }

    let (digits, radix) = match s.get(..2) {
        Some("0x") | Some("0X") => (&s[2..], 16),
        Some("0o") | Some("0O") => (&s[2..], 8),
        Some("0b") | Some("0B") => (&s[2..], 2),
        _ => (s, 10),
    };

    // from_str_radix also tolerates signs and separators after a prefix
    let unsigned = if radix == 10 {
        digits.strip_prefix(['+', '-']).unwrap_or(digits)
    } else {
        digits
    };
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    BigInt::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// Largest magnitude below which every integer has an exact `f64` form (2^53)
const MAX_EXACT_F64_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_to_big_int(n: &serde_json::Number) -> Result<BigInt, ParseError> {
    if let Some(v) = n.as_u64() {
        return Ok(BigInt::from(v));
    }
    if let Some(v) = n.as_i64() {
        return Ok(BigInt::from(v));
    }
    match n.as_f64() {
        // Past 2^53 the parsed float may already differ from the digits sent
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64_INTEGER => {
            BigInt::from_f64(f).ok_or_else(|| ParseError::InvalidNumber {
                value: n.to_string(),
            })
        }
        _ => Err(ParseError::InvalidNumber {
            value: n.to_string(),
        }),
    }
}

/// Serde adapter writing a [`BigInt`] as a decimal string.
///
/// Use with `#[serde(with = "crate::num::serde_decimal")]`. Reading accepts any
/// [`BigNumberish`] form.
pub mod serde_decimal {
    use num_bigint::BigInt;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::{to_big_int, BigNumberish};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BigNumberish::deserialize(deserializer)?;
        to_big_int(&raw).map_err(D::Error::custom)
    }
}
