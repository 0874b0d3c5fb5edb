//! Fee estimation mapping, single and batch

use crate::helpers::{fee_estimate, raw};
use crate::init_logger;
use num_bigint::BigInt;
use serde_json::json;

use starknet_rpc_parser::{
    models::rpc::RpcFeeEstimate, num::to_big_int, ParseError, ResponseParser, RpcResponseParser,
};

fn estimates(values: Vec<serde_json::Value>) -> Vec<RpcFeeEstimate> {
    raw(serde_json::Value::Array(values))
}

#[test]
fn test_single_estimate_uses_first_element() {
    init_logger();

    let parser = RpcResponseParser::new();
    let first = fee_estimate("100", "10", "10");

    let alone = parser
        .parse_fee_estimate_response(&estimates(vec![first.clone()]))
        .unwrap();
    let with_tail = parser
        .parse_fee_estimate_response(&estimates(vec![
            first,
            fee_estimate("0xffff", "0x1", "0x2"),
        ]))
        .unwrap();

    assert_eq!(alone.overall_fee, BigInt::from(100));
    assert_eq!(alone.gas_consumed, BigInt::from(10));
    assert_eq!(alone.gas_price, BigInt::from(10));
    assert_eq!(alone, with_tail);
}

#[test]
fn test_single_estimate_on_empty_input_is_an_error() {
    init_logger();

    let err = RpcResponseParser::new()
        .parse_fee_estimate_response(&[])
        .unwrap_err();
    assert!(matches!(err, ParseError::EmptyFeeEstimate));
}

#[test]
fn test_hex_fees_keep_full_precision() {
    init_logger();

    // 2^200, far beyond any fixed width integer or f64 mantissa
    let huge = "0x100000000000000000000000000000000000000000000000000";
    let parsed = RpcResponseParser::new()
        .parse_fee_estimate_response(&estimates(vec![fee_estimate(huge, "0x0", "0x1")]))
        .unwrap();

    assert_eq!(parsed.overall_fee, BigInt::from(1u8) << 200);
    assert_eq!(
        serde_json::to_value(&parsed).unwrap()["overall_fee"],
        json!("1606938044258990275541962092341162602522202993782792835301376")
    );
}

#[test]
fn test_original_response_is_element_wise_and_ordered() {
    init_logger();

    let raw_estimates = estimates(vec![
        fee_estimate("0x1", "0x2", "0x3"),
        json!({"overall_fee": 400, "gas_consumed": "50", "gas_price": 8}),
        fee_estimate("0xde0b6b3a7640000", "0x5208", "0x3b9aca00"),
    ]);
    let parsed = RpcResponseParser::new()
        .parse_fee_estimate_original_response(&raw_estimates)
        .unwrap();

    assert_eq!(parsed.len(), raw_estimates.len());
    for (out, input) in parsed.iter().zip(&raw_estimates) {
        assert_eq!(out.overall_fee, to_big_int(&input.overall_fee).unwrap());
        assert_eq!(out.gas_consumed, to_big_int(&input.gas_consumed).unwrap());
        assert_eq!(out.gas_price, to_big_int(&input.gas_price).unwrap());
    }
    assert_eq!(parsed[1].overall_fee, BigInt::from(400));
    assert_eq!(parsed[2].overall_fee, BigInt::from(1_000_000_000_000_000_000u64));
}

#[test]
fn test_original_response_on_empty_input_is_empty() {
    init_logger();

    let parsed = RpcResponseParser::new()
        .parse_fee_estimate_original_response(&[])
        .unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_invalid_fee_value_is_reported() {
    init_logger();

    let err = RpcResponseParser::new()
        .parse_fee_estimate_original_response(&estimates(vec![
            fee_estimate("0x1", "0x1", "0x1"),
            fee_estimate("0x1", "ten", "0x1"),
        ]))
        .unwrap_err();

    match err {
        ParseError::InvalidNumber { value } => assert_eq!(value, "ten"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_wide_json_number_fee_is_rejected_not_rounded() {
    init_logger();

    let raw_estimates: Vec<RpcFeeEstimate> = serde_json::from_str(
        r#"[{"overall_fee": 123456789012345678901234567, "gas_consumed": 1, "gas_price": 1}]"#,
    )
    .unwrap();
    let err = RpcResponseParser::new()
        .parse_fee_estimate_response(&raw_estimates)
        .unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { .. }));

    // Sent as a string the same fee survives intact
    let parsed = RpcResponseParser::new()
        .parse_fee_estimate_response(&estimates(vec![fee_estimate(
            "123456789012345678901234567",
            "1",
            "1",
        )]))
        .unwrap();
    assert_eq!(
        parsed.overall_fee,
        "123456789012345678901234567".parse::<BigInt>().unwrap()
    );
}
