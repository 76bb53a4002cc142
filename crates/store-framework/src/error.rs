//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Reducer errors are deliberately absent:
//! they are logged inside the store and never travel back to the dispatcher.

/// Errors that can occur while talking to a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
