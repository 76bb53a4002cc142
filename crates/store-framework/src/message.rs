//! # Store Messages
//!
//! The request type sent from a [`StoreClient`](crate::StoreClient) to its
//! [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::slice::StateSlice;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store.
///
/// A store only knows two things: apply an action, or hand back a copy of the state.
/// Every domain operation is expressed as a [`StateSlice::Action`] and travels through
/// `Dispatch`, which keeps the set of sanctioned mutations closed over the action enum.
#[derive(Debug)]
pub enum StoreRequest<S: StateSlice> {
    Dispatch {
        action: S::Action,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}
