//! # Product Store Client
//!
//! Provides a high‑level API for interacting with the product store.
//! It wraps a `StoreClient<ProductState>` and exposes one method per operation plus the
//! two slice selections the views render from.
use crate::model::{Product, ProductCreate, Toast};
use crate::product_slice::{ProductAction, ProductError, ProductState};
use async_trait::async_trait;
use store_framework::{FrameworkError, Selection, SliceClient, StoreClient};
use tracing::{debug, instrument};

/// Live view of the product list.
pub type ProductsSelection =
    Selection<ProductState, Vec<Product>, fn(&ProductState) -> Vec<Product>>;

/// Live view of the active toast.
pub type ToastSelection =
    Selection<ProductState, Option<Toast>, fn(&ProductState) -> Option<Toast>>;

fn products_of(state: &ProductState) -> Vec<Product> {
    state.products.clone()
}

fn toast_of(state: &ProductState) -> Option<Toast> {
    state.toast.clone()
}

/// Client for the product store.
///
/// Every mutating method returns once the store has processed the action. A malformed
/// action is logged by the store and leaves the state unchanged; the only errors seen
/// here are [`ProductError::StoreCommunication`].
#[derive(Clone)]
pub struct ProductStore {
    inner: StoreClient<ProductState>,
}

impl ProductStore {
    pub fn new(inner: StoreClient<ProductState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceClient<ProductState> for ProductStore {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<ProductState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::StoreCommunication(e.to_string())
    }
}

impl ProductStore {
    /// Adds a product, generating its id when `params.id` is `None`.
    ///
    /// Returns the id the product was stored under.
    #[instrument(skip(self))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        let product = params.into_product();
        let id = product.id.clone();
        debug!(%id, "Adding product");
        self.dispatch(ProductAction::AddProduct(product)).await?;
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: String) -> Result<(), ProductError> {
        self.dispatch(ProductAction::DeleteProduct { product_id })
            .await
    }

    #[instrument(skip(self))]
    pub async fn edit_product(&self, edited_product: Product) -> Result<(), ProductError> {
        self.dispatch(ProductAction::EditProduct { edited_product })
            .await
    }

    #[instrument(skip(self))]
    pub async fn toggle_product(&self, product_id: String) -> Result<(), ProductError> {
        self.dispatch(ProductAction::ToggleProduct { product_id })
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_toast(&self, toast: Toast) -> Result<(), ProductError> {
        self.dispatch(ProductAction::AddToast(toast)).await
    }

    /// Clears the active toast. `toast_id` does not have to match it.
    #[instrument(skip(self))]
    pub async fn delete_toast(&self, toast_id: String) -> Result<(), ProductError> {
        self.dispatch(ProductAction::DeleteToast { toast_id }).await
    }

    #[instrument(skip(self))]
    pub async fn edit_toast(&self, edited_toast: Toast) -> Result<(), ProductError> {
        self.dispatch(ProductAction::EditToast { edited_toast })
            .await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.snapshot().await?.products)
    }

    pub async fn find_product(&self, id: &str) -> Result<Option<Product>, ProductError> {
        Ok(self.snapshot().await?.find_product(id).cloned())
    }

    pub async fn toast(&self) -> Result<Option<Toast>, ProductError> {
        Ok(self.snapshot().await?.toast)
    }

    /// Wakes only when the product list changes.
    pub fn select_products(&self) -> ProductsSelection {
        self.inner
            .select(products_of as fn(&ProductState) -> Vec<Product>)
    }

    /// Wakes only when the toast changes.
    pub fn select_toast(&self) -> ToastSelection {
        self.inner
            .select(toast_of as fn(&ProductState) -> Option<Toast>)
    }

    /// Whether the store has shut down.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::mock::{create_mock_client, expect_dispatch, expect_snapshot, MockStore};

    #[tokio::test]
    async fn test_add_product_assigns_missing_id() {
        let (client, mut receiver) = create_mock_client::<ProductState>(10);
        let store = ProductStore::new(client);

        let add_task = tokio::spawn(async move {
            store
                .add_product(ProductCreate {
                    id: None,
                    name: "Widget".to_string(),
                    is_available: true,
                })
                .await
        });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        let dispatched_id = match action {
            ProductAction::AddProduct(product) => {
                assert_eq!(product.name, "Widget");
                assert!(product.is_available);
                product.id
            }
            other => panic!("Expected AddProduct, got {:?}", other),
        };
        assert!(!dispatched_id.is_empty());
        responder.send(Ok(())).unwrap();

        let id = add_task.await.unwrap().unwrap();
        assert_eq!(id, dispatched_id);
    }

    #[tokio::test]
    async fn test_add_product_keeps_given_id() {
        let (client, mut receiver) = create_mock_client::<ProductState>(10);
        let store = ProductStore::new(client);

        let add_task = tokio::spawn(async move {
            store
                .add_product(ProductCreate {
                    id: Some("p1".to_string()),
                    name: "Widget".to_string(),
                    is_available: false,
                })
                .await
        });

        let (action, responder) = expect_dispatch(&mut receiver).await.unwrap();
        assert_eq!(
            action,
            ProductAction::AddProduct(Product::new("p1", "Widget", false))
        );
        responder.send(Ok(())).unwrap();
        assert_eq!(add_task.await.unwrap().unwrap(), "p1");
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_communication_error() {
        let (client, mut receiver) = create_mock_client::<ProductState>(10);
        let store = ProductStore::new(client);

        let toggle_task = tokio::spawn(async move { store.toggle_product("p1".to_string()).await });

        let (action, responder) = expect_dispatch(&mut receiver).await.unwrap();
        assert_eq!(
            action,
            ProductAction::ToggleProduct {
                product_id: "p1".into()
            }
        );
        responder.send(Err(FrameworkError::StoreDropped)).unwrap();

        match toggle_task.await.unwrap() {
            Err(ProductError::StoreCommunication(msg)) => {
                assert_eq!(msg, FrameworkError::StoreDropped.to_string())
            }
            other => panic!("Expected StoreCommunication, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_closed_store() {
        let (client, receiver) = create_mock_client::<ProductState>(1);
        drop(receiver);
        let store = ProductStore::new(client);

        assert!(store.is_closed());
        assert!(matches!(
            store.delete_toast("t1".into()).await,
            Err(ProductError::StoreCommunication(_))
        ));
    }

    #[tokio::test]
    async fn test_find_product_reads_snapshot() {
        let (client, mut receiver) = create_mock_client::<ProductState>(10);
        let store = ProductStore::new(client);

        let find_task = tokio::spawn(async move { store.find_product("p2").await });

        let responder = expect_snapshot(&mut receiver).await.unwrap();
        responder
            .send(Ok(ProductState {
                products: vec![
                    Product::new("p1", "Widget", true),
                    Product::new("p2", "Gadget", false),
                ],
                toast: None,
            }))
            .unwrap();

        let found = find_task.await.unwrap().unwrap();
        assert_eq!(found, Some(Product::new("p2", "Gadget", false)));
    }

    #[tokio::test]
    async fn test_toast_selection_ignores_product_changes() {
        let mock = MockStore::<ProductState>::new();
        let store = ProductStore::new(mock.client());
        let mut toast = store.select_toast();
        let mut products = store.select_products();

        let widget = Product::new("p1", "Widget", true);
        mock.publish(ProductState {
            products: vec![widget.clone()],
            toast: None,
        });

        assert!(products.refresh());
        assert!(!toast.refresh());
        assert_eq!(products.current(), &vec![widget]);
    }

    #[tokio::test]
    async fn test_operations_forward_actions() {
        let mut mock = MockStore::<ProductState>::new();
        for _ in 0..3 {
            mock.expect_dispatch().return_ok();
        }
        let store = ProductStore::new(mock.client());
        let toast = Toast::success("saved", &Product::new("p1", "Widget", true));

        store.add_toast(toast.clone()).await.unwrap();
        store.edit_toast(toast.clone()).await.unwrap();
        store.delete_toast(toast.id.clone()).await.unwrap();

        assert_eq!(
            mock.dispatched(),
            vec![
                ProductAction::AddToast(toast.clone()),
                ProductAction::EditToast {
                    edited_toast: toast.clone()
                },
                ProductAction::DeleteToast { toast_id: toast.id },
            ]
        );
        mock.verify();
    }
}
