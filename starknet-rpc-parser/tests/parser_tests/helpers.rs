use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Deserialize a fixture into the raw type the parser expects.
///
/// # Panics
///
/// Panics if the fixture does not match the raw shape.
pub fn raw<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture should deserialize")
}

/// Block as returned by `starknet_getBlockWithTxHashes`, with fields the parser does not know.
pub fn block_fixture() -> Value {
    json!({
        "block_hash": "0x3e7bdd4a9d2f5ff48a1b4c0f1ed3f7b0c2e1bb4d1e8b5f9a6a0b7c4e2d1f0a9",
        "parent_hash": "0x6a9a1e8b4dc2d4f0c7a3e2b1f5d8c9a0b7e6f5d4c3b2a1908f7e6d5c4b3a291",
        "block_number": 812_345,
        "new_root": "0x2f5d8c9a0b7e6f5d4c3b2a1908f7e6d5c4b3a2918a9d2f5ff48a1b4c0f1ed3f",
        "timestamp": 1_687_954_331,
        "sequencer_address": "0x1176a1bd84444c89232ec27754698e5d2e7e1a7f1539f12027f28b23ec9f3d8",
        "status": "ACCEPTED_ON_L2",
        "transactions": [
            "0x4c4b0e6e9a8e1b3b1b2c1d0a2c7f3a6d1e7b8c9d0e1f2a3b4c5d6e7f8091a2b",
            "0x1f2a3b4c5d6e7f8091a2b4c4b0e6e9a8e1b3b1b2c1d0a2c7f3a6d1e7b8c9d0e"
        ]
    })
}

/// Invoke transaction as returned by `starknet_getTransactionByHash`.
pub fn transaction_fixture() -> Value {
    json!({
        "type": "INVOKE",
        "transaction_hash": "0x2d8f8d4c1b7e0a1f6c3b5e9d0a7f2c4e6b8d1a3c5e7f9b0d2f4a6c8e0b1d3f5",
        "contract_address": "0x5e7f9b0d2f4a6c8e0b1d3f52d8f8d4c1b7e0a1f6c3b5e9d0a7f2c4e6b8d1a3c",
        "max_fee": "0x2386f26fc10000",
        "nonce": "0x7",
        "version": "0x1",
        "calldata": ["0x1", "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7", "0x2"],
        "signature": ["0x3b1b2c1d", "0x0a2c7f3a"]
    })
}

/// Fee estimate element, string encoded as most nodes send it.
pub fn fee_estimate(overall_fee: &str, gas_consumed: &str, gas_price: &str) -> Value {
    json!({
        "overall_fee": overall_fee,
        "gas_consumed": gas_consumed,
        "gas_price": gas_price
    })
}

/// Simulated transaction with a small trace and the given overall fee.
pub fn simulated_transaction(tag: &str, overall_fee: &str) -> Value {
    json!({
        "transaction_trace": {
            "function_invocation": {
                "contract_address": tag,
                "entry_point_selector": "0x15d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad",
                "result": []
            },
            "signature": []
        },
        "fee_estimation": fee_estimate(overall_fee, "0x1f4", "0x5f5e100")
    })
}
