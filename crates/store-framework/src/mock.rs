//! # Mock Store & Testing Guide
//!
//! The [`MockStore<S>`] type hands out a real `StoreClient<S>` whose requests are answered
//! from an expectation queue instead of a running `StoreActor`. It lets you unit test the
//! code *around* a store (domain clients, view-models) deterministically.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockStore | Real Store |
//! |---------|-----------|------------|
//! | **State** | Whatever you `publish` | Produced by the reducer |
//! | **Use Case** | Testing callers of a store | Testing the reducer or full system |
//! | **Error Injection** | Easy (`return_err`) | Only by shutting the store down |
//!
//! ## Example
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::StateSlice;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Flags { dark_mode: bool }
//! #[derive(Clone, Debug, PartialEq)] enum FlagAction { ToggleDarkMode }
//! #[derive(Debug, thiserror::Error)] #[error("never")] struct Never;
//!
//! impl StateSlice for Flags {
//!     type Action = FlagAction;
//!     type Error = Never;
//!     type Context = ();
//!     fn reduce(&mut self, _: &FlagAction) -> Result<(), Never> {
//!         self.dark_mode = !self.dark_mode;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Flags>::new();
//!     mock.expect_dispatch().return_ok();
//!
//!     let client = mock.client();
//!     client.dispatch(FlagAction::ToggleDarkMode).await.unwrap();
//!
//!     assert_eq!(mock.dispatched(), vec![FlagAction::ToggleDarkMode]);
//!     mock.verify();
//! }
//! ```
//!
//! ## Lower-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw request receiver; pair it with
//! [`expect_dispatch`] / [`expect_snapshot`] to answer requests by hand.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::{Response, StoreRequest};
use crate::slice::StateSlice;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<S: StateSlice> {
    Dispatch {
        response: Result<(), FrameworkError>,
    },
    Snapshot {
        response: Result<S, FrameworkError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// Every dispatched action is recorded, whatever the expectation says, so tests can
/// assert on the exact sequence a caller produced.
pub struct MockStore<S: StateSlice> {
    client: StoreClient<S>,
    publisher: watch::Sender<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    dispatched: Arc<Mutex<Vec<S::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StateSlice> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateSlice> MockStore<S> {
    /// Creates a mock store publishing `S::default()` with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, state_rx) = watch::channel(S::default());
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        dispatched_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, state_rx),
            publisher,
            expectations,
            dispatched,
            _handle: handle,
        }
    }

    /// Returns a client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Pushes `state` to every subscriber, as if the store had committed it.
    pub fn publish(&self, state: S) {
        self.publisher.send_replace(state);
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<S> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// The actions received so far, in order.
    pub fn dispatched(&self) -> Vec<S::Action> {
        self.dispatched.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<S: StateSlice> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StateSlice> DispatchExpectationBuilder<S> {
    /// Acknowledges the dispatch.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch { response: Ok(()) });
    }

    /// Fails the dispatch with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: StateSlice> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StateSlice> SnapshotExpectationBuilder<S> {
    /// Answers the snapshot with `state`.
    pub fn return_ok(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(state),
        });
    }

    /// Fails the snapshot with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The client's state feed is fixed at `S::default()`; use [`MockStore`] when a test
/// needs to publish states.
pub fn create_mock_client<S: StateSlice>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, state_rx) = watch::channel(S::default());
    (StoreClient::new(sender, state_rx), receiver)
}

/// Helper to verify that the next message is a Dispatch request.
pub async fn expect_dispatch<S: StateSlice>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<S: StateSlice>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
