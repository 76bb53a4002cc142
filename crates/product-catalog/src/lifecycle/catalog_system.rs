use crate::clients::ProductStore;
use crate::config::CatalogConfig;
use crate::gateway::{
    sync_from_gateway, DocumentGateway, GatewayError, PersistenceWriter, ProductSync,
};
use crate::model::Product;
use crate::product_slice;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running catalog: the product store plus, when enabled, its persistence.
///
/// # Example
///
/// ```rust
/// use product_catalog::lifecycle::CatalogSystem;
/// use product_catalog::model::ProductCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = CatalogSystem::new();
///     system
///         .store
///         .add_product(ProductCreate {
///             id: None,
///             name: "Widget".to_string(),
///             is_available: true,
///         })
///         .await
///         .map_err(|e| e.to_string())?;
///
///     system.shutdown().await
/// }
/// ```
pub struct CatalogSystem {
    /// Client for the product store.
    pub store: ProductStore,

    /// Listener on the remote collection, present when persistence is active.
    sync: Option<ProductSync>,

    /// Task handles for the running stores (used for graceful shutdown).
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts a store with no persistence and the default queue size.
    pub fn new() -> Self {
        let (actor, client) = product_slice::new();
        let handle = tokio::spawn(actor.run(None));
        Self {
            store: ProductStore::new(client),
            sync: None,
            handles: vec![handle],
        }
    }

    /// Starts the store as configured.
    ///
    /// When persistence is active, committed product operations are mirrored to
    /// `gateway` and a listener on the remote collection is opened. Otherwise `gateway`
    /// is left untouched.
    ///
    /// # Errors
    /// Fails if the remote listener cannot be opened.
    pub async fn start(
        config: &CatalogConfig,
        gateway: Arc<dyn DocumentGateway>,
    ) -> Result<Self, GatewayError> {
        let (actor, client) = product_slice::with_buffer(config.store_buffer);

        let (writer, sync) = if config.persistence_active() {
            let sync = sync_from_gateway(Arc::clone(&gateway)).await?;
            let writer = PersistenceWriter::new(gateway, config.retry_policy());
            info!(policy = ?writer.policy(), "Persistence enabled");
            (Some(writer), Some(sync))
        } else {
            info!(
                enabled = config.persistence_enabled,
                configured = config.backend.is_configured(),
                "Persistence disabled"
            );
            (None, None)
        };

        let handle = tokio::spawn(actor.run(writer));
        Ok(Self {
            store: ProductStore::new(client),
            sync,
            handles: vec![handle],
        })
    }

    pub fn persistence_active(&self) -> bool {
        self.sync.is_some()
    }

    /// Products as last reported by the remote collection.
    pub fn remote_products(&self) -> Option<watch::Receiver<Vec<Product>>> {
        self.sync.as_ref().map(ProductSync::products)
    }

    /// Gracefully shuts down the catalog.
    ///
    /// Dropping `store` closes the store only once every other clone is gone too,
    /// including those held by views.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        if let Some(sync) = self.sync {
            sync.cancel().await?;
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
