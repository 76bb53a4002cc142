//! # SliceClient Trait
//!
//! Provides a common interface for domain-specific store clients, adding default `snapshot`
//! and `dispatch` methods built on top of a generic `StoreClient`.
use crate::{FrameworkError, StateSlice, StoreClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use store_framework::{FrameworkError, SliceClient, StateSlice, StoreClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Cart { lines: Vec<String> }
/// #[derive(Clone, Debug)] enum CartAction { Add(String) }
/// #[derive(Debug, thiserror::Error)] #[error("cart error: {0}")] struct CartError(String);
///
/// impl StateSlice for Cart {
///     type Action = CartAction;
///     type Error = CartError;
///     type Context = ();
///     fn reduce(&mut self, action: &CartAction) -> Result<(), CartError> {
///         match action { CartAction::Add(line) => self.lines.push(line.clone()) }
///         Ok(())
///     }
/// }
///
/// struct CartClient { inner: StoreClient<Cart> }
///
/// #[async_trait]
/// impl SliceClient<Cart> for CartClient {
///     type Error = CartError;
///     fn inner(&self) -> &StoreClient<Cart> { &self.inner }
///     fn map_error(e: FrameworkError) -> CartError { CartError(e.to_string()) }
/// }
///
/// // snapshot() and dispatch() are provided automatically!
/// async fn usage(client: CartClient) {
///     let _ = client.dispatch(CartAction::Add("tea".into())).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait SliceClient<S: StateSlice>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the committed state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Dispatch a raw action.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, action: S::Action) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(action).await.map_err(Self::map_error)
    }
}
