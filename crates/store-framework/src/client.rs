//! # Store Client
//!
//! This module defines the generic client for talking to a [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::select::Selection;
use crate::slice::StateSlice;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` is the only sanctioned entry point into a store. It forwards actions
/// over a Tokio mpsc channel, and exposes the state the store publishes after every
/// committed action.
///
/// * **Cloneable** – holds a sender and a `watch` receiver, so cloning is inexpensive.
/// * **Async API** – `dispatch` and `snapshot` resolve to `Result<…, FrameworkError>`.
/// * **Observable** – `subscribe` and `select` give views a live feed of the state.
#[derive(Clone)]
pub struct StoreClient<S: StateSlice> {
    sender: mpsc::Sender<StoreRequest<S>>,
    state: watch::Receiver<S>,
}

impl<S: StateSlice> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, state: watch::Receiver<S>) -> Self {
        Self { sender, state }
    }

    /// Sends `action` to the store and waits until it has been processed.
    ///
    /// Returns `Ok(())` whether the reducer accepted the action or not; only a closed
    /// store is reported as an error.
    pub async fn dispatch(&self, action: S::Action) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Asks the store for a copy of its committed state.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Returns a receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.clone()
    }

    /// Subscribes to one part of the state.
    ///
    /// The returned [`Selection`] only reports a change when the value produced by
    /// `selector` differs from the last one it saw.
    pub fn select<T, F>(&self, selector: F) -> Selection<S, T, F>
    where
        T: PartialEq,
        F: Fn(&S) -> T,
    {
        Selection::new(self.state.clone(), selector)
    }

    /// Returns `true` once the store has shut down.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
