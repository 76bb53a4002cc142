//! Process-local [`DocumentGateway`].
//!
//! Documents are kept per collection in key order. Every write recomputes each
//! listener's query and pushes a snapshot if its result changed. While offline the
//! gateway keeps accepting writes, the way a client-side cache does, and tags its
//! snapshots [`SnapshotSource::Cache`].

use super::{
    ChangeKind, Document, DocumentChange, DocumentGateway, GatewayError, QueryFilter, Snapshot,
    SnapshotSource, Subscription,
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

type Collection = BTreeMap<String, Value>;

struct Listener {
    collection: String,
    filter: QueryFilter,
    sender: mpsc::UnboundedSender<Snapshot>,
    /// Result of the query as last delivered.
    last: Collection,
}

impl Listener {
    fn query(&self, docs: &Collection) -> Collection {
        docs.iter()
            .filter(|(_, data)| self.filter.matches(data))
            .map(|(id, data)| (id.clone(), data.clone()))
            .collect()
    }

    /// Sends the snapshot for `current` if it differs from the last one.
    ///
    /// Returns `false` once the subscriber has gone away.
    fn notify(&mut self, current: Collection, source: SnapshotSource) -> bool {
        let changes = diff(&self.last, &current);
        if changes.is_empty() {
            return !self.sender.is_closed();
        }
        self.last = current;
        self.send(changes, source)
    }

    fn send(&self, changes: Vec<DocumentChange>, source: SnapshotSource) -> bool {
        let snapshot = Snapshot {
            documents: to_documents(&self.last),
            changes,
            source,
        };
        self.sender.send(snapshot).is_ok()
    }
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Collection>,
    listeners: Vec<Listener>,
    offline: bool,
    failures_remaining: u32,
}

impl Inner {
    fn source(&self) -> SnapshotSource {
        if self.offline {
            SnapshotSource::Cache
        } else {
            SnapshotSource::Server
        }
    }

    fn check_failure(&mut self) -> Result<(), GatewayError> {
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(GatewayError::Unavailable("injected failure".to_string()));
        }
        Ok(())
    }

    fn notify(&mut self, collection: &str) {
        let source = self.source();
        let empty = Collection::new();
        let docs = self.collections.get(collection).unwrap_or(&empty);
        self.listeners.retain_mut(|listener| {
            if listener.collection != collection {
                return !listener.sender.is_closed();
            }
            let current = listener.query(docs);
            listener.notify(current, source)
        });
    }
}

/// In-memory document database.
///
/// ```rust
/// use product_catalog::gateway::{DocumentGateway, InMemoryGateway, QueryFilter};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let gateway = InMemoryGateway::new();
///     gateway.create("products", "p1", json!({ "name": "Widget" })).await?;
///
///     let mut sub = gateway
///         .subscribe("products", QueryFilter::parse("name", "!=", "")?)
///         .await?;
///     let first = sub.next().await.unwrap();
///     assert_eq!(first.documents[0].id, "p1");
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct InMemoryGateway {
    inner: Mutex<Inner>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches between online and offline.
    ///
    /// Coming back online re-delivers every listener's current result, tagged
    /// [`SnapshotSource::Server`] and without changes.
    pub async fn set_online(&self, online: bool) {
        let mut inner = self.inner.lock().await;
        let was_offline = inner.offline;
        inner.offline = !online;
        info!(online, "Connectivity changed");

        if online && was_offline {
            inner
                .listeners
                .retain(|listener| listener.send(Vec::new(), SnapshotSource::Server));
        }
    }

    pub async fn is_online(&self) -> bool {
        !self.inner.lock().await.offline
    }

    /// Makes the next `count` writes fail with [`GatewayError::Unavailable`].
    pub async fn inject_failures(&self, count: u32) {
        self.inner.lock().await.failures_remaining = count;
    }

    /// Reads a single document.
    pub async fn get(&self, collection: &str, id: &str) -> Option<Document> {
        let inner = self.inner.lock().await;
        let data = inner.collections.get(collection)?.get(id)?;
        Some(Document {
            id: id.to_string(),
            data: data.clone(),
        })
    }

    /// Every document in `collection`, in key order.
    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        let inner = self.inner.lock().await;
        inner
            .collections
            .get(collection)
            .map(to_documents)
            .unwrap_or_default()
    }

    /// Number of live subscriptions.
    pub async fn listener_count(&self) -> usize {
        let mut inner = self.inner.lock().await;
        inner
            .listeners
            .retain(|listener| !listener.sender.is_closed());
        inner.listeners.len()
    }
}

#[async_trait]
impl DocumentGateway for InMemoryGateway {
    async fn create(&self, collection: &str, id: &str, record: Value) -> Result<(), GatewayError> {
        require_object(&record)?;
        let mut inner = self.inner.lock().await;
        inner.check_failure()?;
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), record);
        debug!(collection, id, "Created");
        inner.notify(collection);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, partial: Value) -> Result<(), GatewayError> {
        let Value::Object(fields) = partial else {
            return Err(not_an_object());
        };
        let mut inner = self.inner.lock().await;
        inner.check_failure()?;
        let existing = inner
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        if let Value::Object(current) = existing {
            current.extend(fields);
        } else {
            *existing = Value::Object(fields);
        }
        debug!(collection, id, "Updated");
        inner.notify(collection);
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), GatewayError> {
        let mut inner = self.inner.lock().await;
        inner.check_failure()?;
        let removed = inner
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id))
            .is_some();
        debug!(collection, id, removed, "Removed");
        if removed {
            inner.notify(collection);
        }
        Ok(())
    }

    async fn subscribe(
        &self,
        collection: &str,
        filter: QueryFilter,
    ) -> Result<Subscription, GatewayError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock().await;
        let source = inner.source();

        let mut listener = Listener {
            collection: collection.to_string(),
            filter,
            sender,
            last: Collection::new(),
        };
        let current = inner
            .collections
            .get(collection)
            .map(|docs| listener.query(docs))
            .unwrap_or_default();
        listener.last = current;
        let initial = listener
            .last
            .iter()
            .map(|(id, data)| change(ChangeKind::Added, id, data))
            .collect();
        listener.send(initial, source);

        debug!(collection, filter = %listener.filter, "Subscribed");
        inner.listeners.push(listener);
        Ok(Subscription::new(receiver))
    }
}

fn require_object(record: &Value) -> Result<(), GatewayError> {
    if record.is_object() {
        Ok(())
    } else {
        Err(not_an_object())
    }
}

fn not_an_object() -> GatewayError {
    GatewayError::Serialization("document must be a JSON object".to_string())
}

fn change(kind: ChangeKind, id: &str, data: &Value) -> DocumentChange {
    DocumentChange {
        kind,
        document: Document {
            id: id.to_string(),
            data: data.clone(),
        },
    }
}

fn to_documents(docs: &Collection) -> Vec<Document> {
    docs.iter()
        .map(|(id, data)| Document {
            id: id.clone(),
            data: data.clone(),
        })
        .collect()
}

fn diff(before: &Collection, after: &Collection) -> Vec<DocumentChange> {
    let mut changes = Vec::new();
    for (id, data) in after {
        match before.get(id) {
            None => changes.push(change(ChangeKind::Added, id, data)),
            Some(previous) if previous != data => {
                changes.push(change(ChangeKind::Modified, id, data))
            }
            Some(_) => {}
        }
    }
    for (id, data) in before {
        if !after.contains_key(id) {
            changes.push(change(ChangeKind::Removed, id, data));
        }
    }
    changes
}
