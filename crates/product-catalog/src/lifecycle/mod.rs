//! # Catalog Lifecycle
//!
//! Starting, wiring and stopping the catalog.
//!
//! The store is created first and its dependencies are bound late, through
//! `run(context)`. For the product store the context is the optional
//! [`PersistenceWriter`](crate::gateway::PersistenceWriter), so the same store runs with
//! or without a backend.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the store's channel
//! 2. **Store detects closure** - `receiver.recv()` returns `None` and the store logs its counts
//! 3. **Await completion** - wait for the store task
//! 4. **Cancel the remote listener**
//!
//! Writes already queued are drained by the writer task, in order, before it stops.

pub mod catalog_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use catalog_system::*;
