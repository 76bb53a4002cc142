//! # StateSlice Trait
//!
//! The `StateSlice` trait defines the contract that every piece of application state must
//! implement to be owned by the generic [`StoreActor`](crate::StoreActor). It names the
//! action type the slice understands, the error its reducer may raise, and the runtime
//! context handed to side-effect hooks.
//!
//! # Architecture Note
//! The reducer is **synchronous and deterministic**: given the same state and the same
//! action it always produces the same next state. Anything that talks to the outside
//! world (remote persistence, timers, other stores) belongs in [`StateSlice::on_applied`],
//! which only runs after the new state has been committed and published.
//!
//! # Provided Methods (Hooks)
//! - [`StateSlice::on_applied`]
//!
//! The default implementation does nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any state slice must implement to be managed by a `StoreActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so that `on_applied` can await. The `Context` type is
/// injected when the store is started (`run(context)`), not when it is constructed, so
/// collaborators created later can still be wired in ("late binding").
#[async_trait]
pub trait StateSlice: Default + Clone + Send + Sync + 'static {
    /// The operations this slice accepts.
    type Action: Clone + Send + Sync + Debug;

    /// Error raised by the reducer for malformed actions.
    ///
    /// Reducer errors never reach the dispatcher: the store logs them and keeps the
    /// previous state.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The runtime context (dependencies) injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Apply `action` to the state.
    ///
    /// The store calls this on a working copy; if it returns `Err` the copy is discarded,
    /// so a reducer may bail out half-way without corrupting the committed state.
    fn reduce(&mut self, action: &Self::Action) -> Result<(), Self::Error>;

    /// Called after `action` has been applied, committed and published.
    ///
    /// `self` is the new state. Failures inside the hook are the hook's own business;
    /// the state change is never rolled back.
    async fn on_applied(&self, _action: &Self::Action, _ctx: &Self::Context) {}
}
