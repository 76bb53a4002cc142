use crate::clients::ProductStore;
use crate::model::{Product, ProductCreate, Toast};
use crate::product_slice::ProductError;

pub const NAME_REQUIRED: &str = "Name  is required";
pub const ADDED_TOAST: &str = "Product added successfully...";

/// The "Add Product" form.
pub struct AddProductForm {
    store: ProductStore,
    name: String,
    error: Option<String>,
}

impl AddProductForm {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store,
            name: String::new(),
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Inline validation message under the name field.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Adds an available product under a fresh id and announces it.
    ///
    /// A blank name only sets the inline error. On success the field is cleared and the
    /// new id is returned.
    pub async fn submit(&mut self) -> Result<Option<String>, ProductError> {
        if self.name.trim().is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            return Ok(None);
        }
        self.error = None;

        let name = self.name.clone();
        let id = self
            .store
            .add_product(ProductCreate {
                id: None,
                name: name.clone(),
                is_available: true,
            })
            .await?;

        let product = Product::new(id.clone(), name, true);
        self.store
            .add_toast(Toast::success(ADDED_TOAST, &product))
            .await?;
        self.name.clear();
        Ok(Some(id))
    }
}
