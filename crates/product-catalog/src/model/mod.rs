//! Pure data structures held by the product store.

pub mod product;
pub mod toast;

pub use product::*;
pub use toast::*;
