//! Type-safe wrappers around [`StoreClient`](store_framework::StoreClient).

pub mod product_store;

pub use product_store::*;
