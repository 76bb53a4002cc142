//! Error types for the persistence gateway.

use thiserror::Error;

/// Errors returned by a [`DocumentGateway`](super::DocumentGateway).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// `update` targeted a document that does not exist.
    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    /// The backend could not be reached or refused the write.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// A record could not be converted to or from a document.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The query could not be built.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl GatewayError {
    /// Whether retrying the same write can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
