//! Error types for the product store.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    /// A product must have a non-blank name.
    #[error("Product name must not be empty")]
    EmptyName,

    /// A product record arrived without an id.
    #[error("Product id must not be empty")]
    MissingId,

    /// The filter option is not one the list understands.
    #[error("Unknown product filter: {0}")]
    UnknownFilter(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}
