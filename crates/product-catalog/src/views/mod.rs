//! # Views
//!
//! Headless view-models for the products page. Each one owns its local UI state and
//! talks to the store only through [`ProductStore`](crate::clients::ProductStore):
//! it either selects a slice of the state or dispatches operations.

pub mod add_product;
pub mod edit_product;
pub mod filter_select;
pub mod modal;
pub mod product_item;
pub mod product_list;
pub mod products_page;
pub mod toast_view;

pub use add_product::AddProductForm;
pub use edit_product::EditProductForm;
pub use filter_select::FilterSelect;
pub use modal::{ConfirmationModal, MessageModal};
pub use product_item::ProductItemView;
pub use product_list::ProductListView;
pub use products_page::ProductsPage;
pub use toast_view::ToastView;
