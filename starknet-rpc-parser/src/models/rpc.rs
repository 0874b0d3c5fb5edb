//! Raw payloads as returned by a Starknet JSON-RPC node.
//!
//! Every type keeps a catch-all `extra` map so fields added by newer node
//! versions are accepted and ignored. Expected fields that a node leaves out
//! deserialize to `None` rather than failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::num::BigNumberish;

/// Unknown fields carried alongside the known ones
pub type ExtraFields = Map<String, Value>;

/// Block status as reported by the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockStatus {
    Pending,
    AcceptedOnL2,
    AcceptedOnL1,
    Rejected,
    /// A status this crate does not know about yet
    #[serde(other)]
    Unknown,
}

/// Result of `starknet_getBlockWithTxHashes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcGetBlockResponse {
    #[serde(default)]
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub new_root: Option<String>,
    #[serde(default)]
    pub parent_hash: Option<String>,
    #[serde(default)]
    pub status: Option<BlockStatus>,
    #[serde(default)]
    pub transactions: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Result of `starknet_getTransactionByHash`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcTransaction {
    #[serde(default)]
    pub calldata: Option<Vec<String>>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub max_fee: Option<String>,
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub signature: Option<Vec<String>>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One element of the `starknet_estimateFee` result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcFeeEstimate {
    pub overall_fee: BigNumberish,
    pub gas_consumed: BigNumberish,
    pub gas_price: BigNumberish,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl RpcFeeEstimate {
    /// Build an estimate with no extra fields
    pub fn new(
        overall_fee: impl Into<BigNumberish>,
        gas_consumed: impl Into<BigNumberish>,
        gas_price: impl Into<BigNumberish>,
    ) -> Self {
        Self {
            overall_fee: overall_fee.into(),
            gas_consumed: gas_consumed.into(),
            gas_price: gas_price.into(),
            extra: ExtraFields::new(),
        }
    }
}

/// One simulated transaction: an opaque trace and its fee estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcSimulatedTransaction {
    #[serde(default)]
    pub transaction_trace: Value,
    pub fee_estimation: RpcFeeEstimate,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Result of `starknet_simulateTransaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcSimulateTransactionResponse {
    pub simulated_transactions: Vec<RpcSimulatedTransaction>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}
