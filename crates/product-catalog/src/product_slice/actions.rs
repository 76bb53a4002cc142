//! Operations accepted by the product store.
//!
//! These are the only sanctioned mutations of [`ProductState`](super::ProductState). They are
//! applied by [`ProductState::reduce`](store_framework::StateSlice::reduce); see
//! [`super::state`] for the exact semantics of each one.

use crate::model::{Product, Toast};

/// Actions for the product store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Appends a product. The id is trusted to be unique.
    AddProduct(Product),
    /// Removes the product with `product_id`, if any.
    DeleteProduct { product_id: String },
    /// Replaces the product whose id matches `edited_product.id`.
    EditProduct { edited_product: Product },
    /// Flips `is_available` on the product with `product_id`.
    ToggleProduct { product_id: String },
    /// Makes `Toast` the active notification, replacing any previous one.
    AddToast(Toast),
    /// Clears the active notification. The id is accepted for symmetry and ignored.
    DeleteToast { toast_id: String },
    /// Replaces the active notification wholesale.
    EditToast { edited_toast: Toast },
}

impl ProductAction {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddProduct(_) => "addProduct",
            Self::DeleteProduct { .. } => "deleteProduct",
            Self::EditProduct { .. } => "editProduct",
            Self::ToggleProduct { .. } => "toggleProduct",
            Self::AddToast(_) => "addToast",
            Self::DeleteToast { .. } => "deleteToast",
            Self::EditToast { .. } => "editToast",
        }
    }
}
