//! # Product Store
//!
//! The product slice: the in-memory product collection plus the single active toast.
//!
//! ## Structure
//!
//! - [`state`] - [`ProductState`] and its [`StateSlice`](store_framework::StateSlice) reducer
//! - [`actions`] - [`ProductAction`], the seven sanctioned mutations
//! - [`filter`] - [`ProductFilter`] for the list view
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store actor and client
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::clients::ProductStore;
//! use product_catalog::model::ProductCreate;
//! use product_catalog::product_slice;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_slice::new();
//!     let store = ProductStore::new(generic_client);
//!
//!     // No remote persistence
//!     tokio::spawn(actor.run(None));
//!
//!     let id = store
//!         .add_product(ProductCreate {
//!             id: Some("p1".to_string()),
//!             name: "Widget".to_string(),
//!             is_available: true,
//!         })
//!         .await?;
//!     store.toggle_product(id).await?;
//!
//!     assert!(!store.products().await?[0].is_available);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod filter;
pub mod state;

pub use actions::*;
pub use error::*;
pub use filter::*;
pub use state::*;

use store_framework::{StoreActor, StoreClient};

/// Default capacity of the store's request queue.
pub const DEFAULT_BUFFER: usize = 32;

/// Creates a new product store and its client.
pub fn new() -> (StoreActor<ProductState>, StoreClient<ProductState>) {
    with_buffer(DEFAULT_BUFFER)
}

/// Like [`new()`], with an explicit request queue capacity.
pub fn with_buffer(buffer: usize) -> (StoreActor<ProductState>, StoreClient<ProductState>) {
    StoreActor::new(buffer)
}
