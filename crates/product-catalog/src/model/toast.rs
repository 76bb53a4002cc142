use super::Product;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToastType {
    Success,
    Error,
    Info,
    Warning,
}

/// The single transient notification shown above the product list.
///
/// There is at most one at a time; see
/// [`ProductState::toast`](crate::product_slice::ProductState::toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub toast_type: ToastType,
    /// The product the toast is about.
    pub payload: Product,
    pub is_active: bool,
    pub header_text: String,
    pub timestamp: String,
    /// Display name of whatever raised the toast.
    pub toast_owner: String,
}

impl Toast {
    /// Builds an active toast about `product`, headed and owned by the product's name.
    pub fn for_product(
        toast_type: ToastType,
        message: impl Into<String>,
        product: &Product,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            toast_type,
            payload: product.clone(),
            is_active: true,
            header_text: product.name.clone(),
            timestamp: Utc::now().to_rfc2822(),
            toast_owner: product.name.clone(),
        }
    }

    pub fn success(message: impl Into<String>, product: &Product) -> Self {
        Self::for_product(ToastType::Success, message, product)
    }
}
