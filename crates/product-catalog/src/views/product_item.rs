use super::ConfirmationModal;
use crate::clients::ProductStore;
use crate::model::{Product, Toast};
use crate::product_slice::ProductError;
use tracing::debug;

pub const DELETE_HEADER: &str = "Delete Product Confirmation";
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this product?";
pub const DELETED_TOAST: &str = "Product deleted successfully...";

/// One row of the product table, with its own delete confirmation.
pub struct ProductItemView {
    store: ProductStore,
    product: Product,
    confirm: ConfirmationModal,
}

impl ProductItemView {
    pub fn new(store: ProductStore, product: Product) -> Self {
        Self {
            store,
            product,
            confirm: ConfirmationModal::new(DELETE_HEADER, DELETE_MESSAGE),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Unavailable products are rendered struck through.
    pub fn is_struck_through(&self) -> bool {
        !self.product.is_available
    }

    pub fn confirmation(&self) -> &ConfirmationModal {
        &self.confirm
    }

    /// The availability checkbox.
    pub async fn toggle(&self) -> Result<(), ProductError> {
        self.store.toggle_product(self.product.id.clone()).await
    }

    /// The delete button: asks for confirmation first.
    pub fn request_delete(&mut self) {
        self.confirm.open();
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.close();
    }

    /// The confirmation's OK button.
    ///
    /// Deletes the product and announces it. Returns `true` when `editing` is this
    /// product, in which case the caller must reset its edit form.
    pub async fn confirm_delete(
        &mut self,
        editing: Option<&Product>,
    ) -> Result<bool, ProductError> {
        if !self.confirm.is_visible() {
            debug!(id = %self.product.id, "Delete not requested");
            return Ok(false);
        }

        let store = &self.store;
        let product = &self.product;
        self.confirm
            .confirm(|| async move {
                store.delete_product(product.id.clone()).await?;
                store
                    .add_toast(Toast::success(DELETED_TOAST, product))
                    .await
            })
            .await?;

        Ok(editing.is_some_and(|edited| edited.id == self.product.id))
    }
}
