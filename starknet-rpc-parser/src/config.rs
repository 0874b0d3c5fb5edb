use eyre::{eyre, Result};
use serde::Deserialize;
use std::collections::HashMap;

use crate::fee::DEFAULT_MAX_FEE_OVERHEAD_PERCENT;
use crate::url::{build_url, is_url};

/// Prefix of every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "STARKNET";

pub const DEFAULT_NODE_URL: &str = "http://localhost:5050";
pub const DEFAULT_RPC_PATH: &str = "/rpc";

/// Node connection configuration
///
/// This structure holds where the node lives and how generous suggested max
/// fees should be. It handles loading values from environment variables with
/// appropriate defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Starknet node (default: http://localhost:5050)
    pub node_url: String,

    /// Path of the JSON-RPC endpoint under the base URL (default: /rpc)
    pub rpc_path: String,

    /// Margin added to fee estimates when suggesting a max fee, in percent (default: 50)
    pub max_fee_overhead_percent: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            max_fee_overhead_percent: DEFAULT_MAX_FEE_OVERHEAD_PERCENT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This method reads configuration from environment variables,
    /// using default values when variables are not defined.
    ///
    /// # Environment Variables
    ///
    /// * `STARKNET_NODE_URL` - Node base URL (default: "http://localhost:5050")
    /// * `STARKNET_RPC_PATH` - JSON-RPC path (default: "/rpc")
    /// * `STARKNET_MAX_FEE_OVERHEAD_PERCENT` - Max fee margin in percent (default: 50)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        Self::from_source(None)
    }

    /// Load configuration from an explicit variable map instead of the process
    /// environment. Keys carry the `STARKNET_` prefix as they would in the environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("node_url", DEFAULT_NODE_URL)?
            .set_default("rpc_path", DEFAULT_RPC_PATH)?
            .set_default("max_fee_overhead_percent", DEFAULT_MAX_FEE_OVERHEAD_PERCENT as i64)?
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the node URL is shaped like an absolute URL
    pub fn validate(&self) -> Result<()> {
        if !is_url(Some(&self.node_url)) {
            return Err(eyre!("Invalid node URL: {:?}", self.node_url));
        }
        Ok(())
    }

    /// Resolve the endpoint for a call
    ///
    /// `url_or_path` may be a full URL overriding the node, a path under the
    /// node URL, or `None` for the configured RPC path.
    pub fn rpc_endpoint(&self, url_or_path: Option<&str>) -> String {
        build_url(&self.node_url, &self.rpc_path, url_or_path)
    }
}
