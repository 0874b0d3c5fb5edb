use thiserror::Error;

/// Parser-specific error types
///
/// This enum defines the failures that can surface while turning raw RPC payloads
/// into canonical responses. Missing optional fields are never an error; they are
/// either defaulted or carried through as absent values.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A fee or gas value could not be converted to an integer
    #[error("Invalid numeric value: {value}")]
    InvalidNumber { value: String },

    /// A single fee estimate was requested from an empty result list
    #[error("Fee estimate response is empty")]
    EmptyFeeEstimate,

    /// The node answered with a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    /// The envelope carried neither a result nor an error
    #[error("JSON-RPC response has neither result nor error")]
    MissingResult,

    /// The payload did not deserialize
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Machine-readable error code, stable across message changes
    pub fn error_code(&self) -> &'static str {
        match self {
            ParseError::InvalidNumber { .. } => "INVALID_NUMBER",
            ParseError::EmptyFeeEstimate => "EMPTY_FEE_ESTIMATE",
            ParseError::Rpc { .. } => "RPC_ERROR",
            ParseError::MissingResult => "MISSING_RESULT",
            ParseError::Json(_) => "MALFORMED_PAYLOAD",
        }
    }
}
