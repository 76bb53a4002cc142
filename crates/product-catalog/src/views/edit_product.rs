use super::add_product::NAME_REQUIRED;
use crate::clients::ProductStore;
use crate::model::{Product, Toast};
use crate::product_slice::ProductError;

pub const UPDATED_TOAST: &str = "Product updated successfully...";

/// The "Edit Product" form, seeded from the product being edited.
pub struct EditProductForm {
    store: ProductStore,
    original: Product,
    name: String,
    is_available: bool,
    error: Option<String>,
}

impl EditProductForm {
    pub fn new(store: ProductStore, product: Product) -> Self {
        Self {
            store,
            name: product.name.clone(),
            is_available: product.is_available,
            original: product,
            error: None,
        }
    }

    /// The product as it was when editing began.
    pub fn original(&self) -> &Product {
        &self.original
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn set_available(&mut self, is_available: bool) {
        self.is_available = is_available;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Saves the edit and announces it.
    ///
    /// Returns `false` when validation failed and nothing was dispatched. The toast
    /// describes the product as it was before the edit.
    pub async fn submit(&mut self) -> Result<bool, ProductError> {
        if self.name.trim().is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            return Ok(false);
        }
        self.error = None;

        let edited = Product {
            name: self.name.clone(),
            is_available: self.is_available,
            ..self.original.clone()
        };
        self.store.edit_product(edited).await?;
        self.store
            .add_toast(Toast::success(UPDATED_TOAST, &self.original))
            .await?;
        Ok(true)
    }
}
