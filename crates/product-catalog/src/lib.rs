//! # Product Catalog
//!
//! A product list with add, edit, delete, toggle and filter, plus a single transient
//! notification, held in a [`store_framework`] store and optionally mirrored to a remote
//! document collection.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product), [`Toast`](model::Toast)).
//! - **[product_slice]**: The store state and its reducer, the only place the product list changes.
//! - **[clients]**: [`ProductStore`](clients::ProductStore), the typed handle every caller uses.
//! - **[gateway]**: The persistence seam, an in-memory backend and the retrying writer.
//! - **[views]**: Headless view-models for the products page.
//! - **[config]**: `CATALOG_*` environment configuration.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem) and tracing setup.
//!
//! ## Testing
//!
//! See [`store_framework::mock`] for utilities to test clients without spawning a store.

pub mod clients;
pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod product_slice;
pub mod views;
