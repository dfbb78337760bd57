//! Error types for the report pipeline
//!
//! The original taxonomy maps one-to-one onto variants here: an
//! untextual agent reply, a reply that fails to decode as JSON, a
//! failed outbound request, and a failed report write. Every variant
//! is absorbed at the binary boundary into a console message; none of
//! them aborts the process.

use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing a stock report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Agent reply carried no textual payload
    #[error("Unexpected response type: {0}")]
    UnexpectedResponse(String),

    /// Agent reply was not valid JSON
    #[error("Error decoding JSON: {source}. Response content: {content}")]
    Decode {
        source: serde_json::Error,
        content: String,
    },

    /// The outbound LLM call failed
    #[error("Request failed: {0}")]
    Request(#[from] scrip_llm::LLMError),

    /// The report file could not be written
    #[error("Error storing data: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
