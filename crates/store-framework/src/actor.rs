//! # Store Actor
//!
//! This module defines the `StoreActor`, the component that owns a [`StateSlice`] and
//! applies actions to it. It is the "Server" side of the store: requests are processed
//! sequentially in a single task, which gives the store the single-writer semantics of
//! a UI thread without any locking.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::slice::StateSlice;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that owns a state slice.
///
/// # Architecture Note
/// The actor holds the only mutable copy of the state. Clients never see it directly;
/// they receive clones, either on demand (`snapshot`) or pushed through a `watch`
/// channel after every committed action.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use store_framework::{StateSlice, StoreActor};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Counter { value: i64 }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction { Add(i64) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter overflow")]
/// struct CounterError;
///
/// impl StateSlice for Counter {
///     type Action = CounterAction;
///     type Error = CounterError;
///     type Context = ();
///
///     fn reduce(&mut self, action: &CounterAction) -> Result<(), CounterError> {
///         match action {
///             CounterAction::Add(n) => {
///                 self.value = self.value.checked_add(*n).ok_or(CounterError)?;
///             }
///         }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.dispatch(CounterAction::Add(2)).await.unwrap();
///     let state = client.snapshot().await.unwrap();
///     assert_eq!(state.value, 2);
/// }
/// ```
///
/// # Operations
///
/// * **Dispatch**:
///     1. Clones the committed state into a working copy.
///     2. Calls `reduce` on the copy.
///     3. On success, commits the copy, publishes it to subscribers, then runs `on_applied`.
///     4. On failure, logs the error and discards the copy.
///     5. Acknowledges the dispatcher either way.
///
/// * **Snapshot**: returns a clone of the committed state.
pub struct StoreActor<S: StateSlice> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StateSlice> StoreActor<S> {
    /// Creates a store holding `S::default()` and its associated client.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// dispatchers wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        Self::with_state(S::default(), buffer_size)
    }

    /// Creates a store seeded with `initial` state.
    pub fn with_state(initial: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, state_rx) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StoreClient::new(sender, state_rx);
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to [`StateSlice::on_applied`] after every committed action.
    pub async fn run(mut self, context: S::Context) {
        // e.g. "ProductState" instead of "product_catalog::product_slice::ProductState"
        let slice = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(slice, "Store started");

        let mut applied: u64 = 0;
        let mut rejected: u64 = 0;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(slice, ?action, "Dispatch");
                    let mut next = self.state.clone();
                    match next.reduce(&action) {
                        Ok(()) => {
                            self.state = next;
                            self.publisher.send_replace(self.state.clone());
                            applied += 1;
                            info!(slice, applied, "Applied");
                            self.state.on_applied(&action, &context).await;
                        }
                        Err(e) => {
                            rejected += 1;
                            warn!(slice, error = %e, ?action, "Rejected");
                        }
                    }
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(slice, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(slice, applied, rejected, "Shutdown");
    }
}
