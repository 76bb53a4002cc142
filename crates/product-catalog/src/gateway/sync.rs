//! Listener on the remote product collection.
//!
//! The listener reports what the backend holds; it does not feed the local store.

use super::{ChangeKind, DocumentGateway, GatewayError, QueryFilter, PRODUCTS_COLLECTION};
use crate::model::Product;
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Handle to a running product listener.
pub struct ProductSync {
    products: watch::Receiver<Vec<Product>>,
    cancel: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ProductSync {
    /// Products as of the latest remote snapshot.
    pub fn products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.clone()
    }

    /// Stops listening and waits for the listener task to finish.
    pub async fn cancel(self) -> Result<(), String> {
        let _ = self.cancel.send(());
        self.handle
            .await
            .map_err(|e| format!("Product sync task failed: {:?}", e))
    }
}

/// Subscribes to every named product in the remote collection.
///
/// Each snapshot is logged with its source, and each newly added document individually.
/// Documents that do not decode as products are skipped.
pub async fn sync_from_gateway(
    gateway: Arc<dyn DocumentGateway>,
) -> Result<ProductSync, GatewayError> {
    let filter = QueryFilter::parse("name", "!=", "")?;
    let mut subscription = gateway.subscribe(PRODUCTS_COLLECTION, filter).await?;
    let (publisher, products) = watch::channel(Vec::new());
    let (cancel, mut cancelled) = oneshot::channel();

    let handle = tokio::spawn(async move {
        loop {
            let snapshot = tokio::select! {
                _ = &mut cancelled => break,
                next = subscription.next() => match next {
                    Some(snapshot) => snapshot,
                    None => {
                        warn!(collection = PRODUCTS_COLLECTION, "Listener dropped by backend");
                        break;
                    }
                },
            };

            for change in &snapshot.changes {
                if change.kind == ChangeKind::Added {
                    info!(
                        collection = PRODUCTS_COLLECTION,
                        id = %change.document.id,
                        data = %change.document.data,
                        "New item added"
                    );
                }
            }

            let decoded: Vec<Product> = snapshot
                .documents
                .iter()
                .filter_map(|doc| match doc.decode() {
                    Ok(product) => Some(product),
                    Err(e) => {
                        warn!(id = %doc.id, error = %e, "Skipping undecodable product");
                        None
                    }
                })
                .collect();
            info!(source = %snapshot.source, count = decoded.len(), "Data received");
            publisher.send_replace(decoded);
        }
        subscription.cancel();
    });

    Ok(ProductSync {
        products,
        cancel,
        handle,
    })
}
