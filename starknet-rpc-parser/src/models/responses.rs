//! Canonical response types
//!
//! These shapes do not depend on which node implementation produced the raw
//! payload. Fields a node may omit stay `Option` and are skipped when absent.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::rpc::{BlockStatus, RpcFeeEstimate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBlockResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BlockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<String>>,
}

/// Transaction details
///
/// `calldata` and `signature` are always present, empty when the node sent none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionResponse {
    pub calldata: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub signature: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Fee estimate with exact integer values, serialized as decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateFeeResponse {
    #[serde(with = "crate::num::serde_decimal")]
    pub overall_fee: BigInt,
    #[serde(with = "crate::num::serde_decimal")]
    pub gas_consumed: BigInt,
    #[serde(with = "crate::num::serde_decimal")]
    pub gas_price: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContractResponse {
    pub result: Vec<String>,
}

/// A simulated transaction with the max fee suggested for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedTransaction {
    pub transaction_trace: serde_json::Value,
    pub fee_estimation: RpcFeeEstimate,
    #[serde(rename = "suggestedMaxFees", with = "crate::num::serde_decimal")]
    pub suggested_max_fees: BigInt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateTransactionResponse {
    pub simulated_transactions: Vec<SimulatedTransaction>,
}
