use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter for this crate
///
/// `RUST_LOG` is honored first; the crate itself then logs at `level`.
pub fn env_filter(level: LevelFilter) -> EnvFilter {
    let directive = format!("starknet_rpc_parser={level}");
    match directive.parse() {
        Ok(parsed) => EnvFilter::from_default_env().add_directive(parsed),
        Err(e) => {
            eprintln!("Ignoring log directive {directive:?}: {e}");
            EnvFilter::from_default_env()
        }
    }
}

/// Install a global fmt subscriber
///
/// Safe to call more than once; only the first call installs anything.
/// Returns whether this call installed the subscriber.
pub fn init_logging(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .try_init()
        .is_ok()
}
