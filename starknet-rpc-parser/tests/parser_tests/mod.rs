//! Parser tests
//!
//! Tests mapping raw node results for each call kind onto canonical responses.

use std::sync::Once;
use tracing::level_filters::LevelFilter;

pub mod fee_tests;
pub mod helpers;

static INIT: Once = Once::new();

/// Initializes the global logger (only once).
pub fn init_logger() {
    INIT.call_once(|| {
        starknet_rpc_parser::logging::init_logging(LevelFilter::DEBUG);
    });
}
