//! Ordered background writes with bounded retry.

use super::{DocumentGateway, GatewayError};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

/// How often, and how patiently, a failed write is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero behaves like one.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled after every further failure.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
        }
    }
}

/// One gateway call, captured so it can be replayed.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentWrite {
    Create {
        collection: String,
        id: String,
        record: Value,
    },
    Update {
        collection: String,
        id: String,
        partial: Value,
    },
    Remove {
        collection: String,
        id: String,
    },
}

impl DocumentWrite {
    pub fn create<T: Serialize + ?Sized>(
        collection: &str,
        id: &str,
        record: &T,
    ) -> Result<Self, GatewayError> {
        Ok(Self::Create {
            collection: collection.to_string(),
            id: id.to_string(),
            record: serde_json::to_value(record)?,
        })
    }

    pub fn update<T: Serialize + ?Sized>(
        collection: &str,
        id: &str,
        partial: &T,
    ) -> Result<Self, GatewayError> {
        Ok(Self::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            partial: serde_json::to_value(partial)?,
        })
    }

    pub fn remove(collection: &str, id: &str) -> Self {
        Self::Remove {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Remove { .. } => "remove",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Create { id, .. } | Self::Update { id, .. } | Self::Remove { id, .. } => id,
        }
    }

    async fn apply(&self, gateway: &dyn DocumentGateway) -> Result<(), GatewayError> {
        match self {
            Self::Create {
                collection,
                id,
                record,
            } => gateway.create(collection, id, record.clone()).await,
            Self::Update {
                collection,
                id,
                partial,
            } => gateway.update(collection, id, partial.clone()).await,
            Self::Remove { collection, id } => gateway.remove(collection, id).await,
        }
    }
}

/// Resolves with the final result of one submitted write.
pub type WriteOutcome = oneshot::Receiver<Result<(), GatewayError>>;

type QueuedWrite = (DocumentWrite, oneshot::Sender<Result<(), GatewayError>>);

/// Pushes writes to a gateway from a single background task.
///
/// Writes are applied one at a time in submission order, so an update never overtakes the
/// create it depends on. There is no reconciliation with local state. A write that still
/// fails after the retry policy is exhausted is logged and dropped, and the queue moves on.
///
/// The task drains the queue and stops once every clone of the writer has been dropped.
#[derive(Clone)]
pub struct PersistenceWriter {
    sender: mpsc::UnboundedSender<QueuedWrite>,
    policy: RetryPolicy,
}

impl PersistenceWriter {
    /// Spawns the writer task. Must be called from within a Tokio runtime.
    pub fn new(gateway: Arc<dyn DocumentGateway>, policy: RetryPolicy) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(gateway, policy, receiver));
        Self { sender, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Queues `write` behind every earlier submission. The outcome can be awaited but need
    /// not be.
    pub fn submit(&self, write: DocumentWrite) -> WriteOutcome {
        let (respond_to, outcome) = oneshot::channel();
        if let Err(mpsc::error::SendError((write, _))) = self.sender.send((write, respond_to)) {
            error!(kind = write.kind(), id = write.id(), "Writer task has stopped");
        }
        outcome
    }
}

async fn run_writer(
    gateway: Arc<dyn DocumentGateway>,
    policy: RetryPolicy,
    mut receiver: mpsc::UnboundedReceiver<QueuedWrite>,
) {
    debug!("Persistence writer started");
    while let Some((write, respond_to)) = receiver.recv().await {
        let result = write_with_retry(gateway.as_ref(), &write, policy).await;
        if let Err(e) = &result {
            error!(kind = write.kind(), id = write.id(), error = %e, "Write failed");
        }
        let _ = respond_to.send(result);
    }
    debug!("Persistence writer stopped");
}

/// Applies `write`, retrying transient failures with exponential backoff.
pub async fn write_with_retry(
    gateway: &dyn DocumentGateway,
    write: &DocumentWrite,
    policy: RetryPolicy,
) -> Result<(), GatewayError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut backoff = policy.initial_backoff;
    let mut attempt = 1;

    loop {
        match write.apply(gateway).await {
            Ok(()) => {
                debug!(kind = write.kind(), id = write.id(), attempt, "Write applied");
                return Ok(());
            }
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                warn!(
                    kind = write.kind(),
                    id = write.id(),
                    attempt,
                    error = %e,
                    "Write failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff = backoff.saturating_mul(2);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
