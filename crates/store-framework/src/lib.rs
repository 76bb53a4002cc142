//! # Store Framework
//!
//! This crate provides the building blocks for a single-writer application store in Rust.
//! It applies the **Actor Model** to client-side state management: one task owns the
//! state, every mutation is a message, and views observe the state through subscriptions.
//!
//! ## Why an Actor for UI State?
//!
//! A UI store has the same shape as an actor:
//!
//! - One authoritative copy of the state, never shared mutably
//! - A closed set of operations (actions) as the only way to change it
//! - Sequential processing, so no two operations ever interleave
//!
//! Putting the state inside a Tokio task makes the "single source of truth" rule a property
//! of the type system instead of a convention. There is simply no way to reach the state
//! except through a [`StoreClient`].
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`StateSlice`]) - Your state and its reducer
//! 2. **Runtime Layer** ([`StoreActor`]) - Sequential application of actions
//! 3. **Interface Layer** ([`StoreClient`], [`Selection`]) - Dispatching and observing
//!
//! ## Failure Policy
//!
//! Reducers may reject malformed actions. A rejected action is logged and the previous
//! state is kept; the dispatcher is not told. This keeps a bad payload from ever breaking
//! the views that depend on the store. The only errors a client sees are transport errors
//! ([`FrameworkError`]) once the store has shut down.
//!
//! ## Side Effects
//!
//! [`StateSlice::on_applied`] runs after an action has been committed and published. It
//! receives the context passed to [`StoreActor::run`], which is where collaborators such
//! as a persistence gateway are wired in.
//!
//! ## Testing
//!
//! The [`mock`] module hands out real `StoreClient`s answered from an expectation queue,
//! for testing code that talks to a store without running one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod select;
pub mod slice;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::SliceClient;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use select::Selection;
pub use slice::StateSlice;
