use serde::{Deserialize, Serialize};

/// Analysis request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw text to analyze
    pub text: String,
}

/// Error response body
///
/// Every analysis failure is reported with this one shape under HTTP 500.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
