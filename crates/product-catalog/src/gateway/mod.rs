//! # Persistence Gateway
//!
//! An opaque CRUD collaborator over named collections of JSON documents, plus a live
//! query subscription. The product store talks to it only through
//! [`PersistenceWriter`]; nothing in the store waits for it.
//!
//! ## Structure
//!
//! - [`DocumentGateway`] - the backend seam
//! - [`memory`] - [`InMemoryGateway`], a process-local backend with an offline mode
//! - [`writer`] - [`PersistenceWriter`], ordered background writes with retry
//! - [`sync`] - [`ProductSync`], the remote product listener
//! - [`filter`] - [`QueryFilter`] for subscriptions

pub mod error;
pub mod filter;
pub mod memory;
pub mod sync;
pub mod writer;

pub use error::*;
pub use filter::*;
pub use memory::InMemoryGateway;
pub use sync::{sync_from_gateway, ProductSync};
pub use writer::{DocumentWrite, PersistenceWriter, RetryPolicy, WriteOutcome};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::{self, Display};
use tokio::sync::mpsc;

/// Collection holding one document per product, keyed by product id.
pub const PRODUCTS_COLLECTION: &str = "products";

/// A stored document: its key plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    /// Decodes the document into `T`, with the document key as its `id` field.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        let mut data = self.data.clone();
        if let Value::Object(fields) = &mut data {
            fields.insert("id".to_string(), Value::String(self.id.clone()));
        }
        Ok(serde_json::from_value(data)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

/// How one document differs from the previous snapshot of the same subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentChange {
    pub kind: ChangeKind,
    pub document: Document,
}

/// Where a snapshot's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Served locally while the backend is unreachable.
    Cache,
    Server,
}

impl SnapshotSource {
    pub fn from_cache(self) -> bool {
        self == Self::Cache
    }
}

impl Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => f.write_str("local cache"),
            Self::Server => f.write_str("server"),
        }
    }
}

/// Full result of a query at one point in time.
///
/// `changes` is empty for metadata-only snapshots, e.g. the cache catching up with the
/// server.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub documents: Vec<Document>,
    pub changes: Vec<DocumentChange>,
    pub source: SnapshotSource,
}

impl Snapshot {
    /// Decodes every document, in snapshot order.
    pub fn decode_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, GatewayError> {
        self.documents.iter().map(|doc| doc.decode()).collect()
    }
}

/// A live query. Snapshots arrive until it is cancelled or dropped.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<Snapshot>,
}

impl Subscription {
    pub fn new(receiver: mpsc::UnboundedReceiver<Snapshot>) -> Self {
        Self { receiver }
    }

    /// Waits for the next snapshot. `None` once the backend has dropped the listener.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.receiver.recv().await
    }

    /// Stops delivery. Snapshots already queued are discarded.
    pub fn cancel(mut self) {
        self.receiver.close();
    }
}

/// Backend for document collections.
///
/// Records are JSON objects. Implementations must be shareable across tasks.
#[async_trait]
pub trait DocumentGateway: Send + Sync {
    /// Writes `record` under `id`, replacing any existing document.
    async fn create(&self, collection: &str, id: &str, record: Value) -> Result<(), GatewayError>;

    /// Shallow-merges the fields of `partial` into an existing document.
    ///
    /// # Errors
    /// [`GatewayError::NotFound`] if there is no document under `id`.
    async fn update(&self, collection: &str, id: &str, partial: Value) -> Result<(), GatewayError>;

    /// Deletes the document under `id`. Deleting a missing document succeeds.
    async fn remove(&self, collection: &str, id: &str) -> Result<(), GatewayError>;

    /// Opens a live query over `collection`.
    ///
    /// The first snapshot lists every matching document as [`ChangeKind::Added`].
    async fn subscribe(
        &self,
        collection: &str,
        filter: QueryFilter,
    ) -> Result<Subscription, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use serde_json::json;

    #[test]
    fn test_decode_uses_document_key_as_id() {
        let doc = Document {
            id: "p1".into(),
            data: json!({ "name": "Widget", "isAvailable": false }),
        };
        let product: Product = doc.decode().unwrap();
        assert_eq!(product, Product::new("p1", "Widget", false));
    }

    #[test]
    fn test_decode_reports_bad_shape() {
        let doc = Document {
            id: "p1".into(),
            data: json!({ "title": "Widget" }),
        };
        assert!(matches!(
            doc.decode::<Product>(),
            Err(GatewayError::Serialization(_))
        ));
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(SnapshotSource::Cache.to_string(), "local cache");
        assert!(!SnapshotSource::Server.from_cache());
    }
}
