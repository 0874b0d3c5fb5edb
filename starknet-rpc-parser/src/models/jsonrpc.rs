use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// JSON-RPC 2.0 response structure
///
/// This structure represents a node response carrying either a `result` or an
/// `error`. The transport hands it over as received; [`JsonRpcResponse::into_result`]
/// extracts the payload the parser works on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonRpcResponse<T> {
    /// JSON-RPC protocol version (should be "2.0")
    pub jsonrpc: String,

    /// Request identifier
    #[serde(default)]
    pub id: serde_json::Value,

    /// Method result, absent on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    /// Error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorDetail>,
}

/// JSON-RPC 2.0 error detail
///
/// This structure contains the detailed error information in a JSON-RPC error response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JsonRpcErrorDetail {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl<T> JsonRpcResponse<T> {
    /// Create a new JSON-RPC success response
    pub fn success(id: serde_json::Value, result: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Unwrap the envelope into its result
    ///
    /// An error object takes precedence over a result if a node sends both.
    ///
    /// # Errors
    ///
    /// * `ParseError::Rpc` - The node returned an error object
    /// * `ParseError::MissingResult` - Neither field was present
    pub fn into_result(self) -> Result<T, ParseError> {
        if let Some(err) = self.error {
            return Err(ParseError::Rpc {
                code: err.code,
                message: err.message,
                data: err.data,
            });
        }
        self.result.ok_or(ParseError::MissingResult)
    }
}

impl<T> JsonRpcResponse<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// Decode a response body and extract its result in one step
    pub fn parse_body(body: &[u8]) -> Result<T, ParseError> {
        let response: Self = serde_json::from_slice(body)?;
        response.into_result()
    }
}
