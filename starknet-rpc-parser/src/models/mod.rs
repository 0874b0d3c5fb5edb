//! Data models used throughout the crate
//!
//! Raw shapes mirror what a Starknet node returns and tolerate unknown fields.
//! Canonical shapes are the closed records handed to the rest of the client.

// JSON-RPC protocol envelope
pub mod jsonrpc;
// Canonical response types
pub mod responses;
// Raw node payloads
pub mod rpc;
