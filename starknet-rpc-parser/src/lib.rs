// Export modules for the transport layer and tests
pub mod config;
pub mod error;
pub mod fee;
pub mod logging;
pub mod models;
pub mod num;
pub mod parser;
pub mod url;

pub use error::ParseError;
pub use parser::{ResponseParser, RpcResponseParser};
pub use url::{build_url, is_url};
