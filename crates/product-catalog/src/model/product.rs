use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a product in the catalog.
///
/// # Store
/// Products live inside [`ProductState`](crate::product_slice::ProductState) and are only
/// changed through [`ProductAction`](crate::product_slice::ProductAction)s.
///
/// On the wire (and in the remote collection) the fields are camelCase:
/// `{ "id": "...", "name": "...", "isAvailable": true }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub is_available: bool,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, chosen by the caller
    /// * `name` - Display name
    /// * `is_available` - Whether the product is currently available
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_available: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_available,
        }
    }
}

/// Payload for adding a product.
///
/// `id` is optional; [`ProductStore::add_product`](crate::clients::ProductStore::add_product)
/// assigns a fresh UUID when it is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub is_available: bool,
}

impl ProductCreate {
    /// Turns the payload into a full record, generating an id if none was given.
    pub fn into_product(self) -> Product {
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Product::new(id, self.name, self.is_available)
    }
}
