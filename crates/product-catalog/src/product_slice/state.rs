//! [`StateSlice`] implementation for the product store.
//!
//! The reducer is the whole of the store's business logic. It is synchronous and
//! deterministic; the only side effect, mirroring writes to the remote collection, lives in
//! [`StateSlice::on_applied`] and runs after the new state has been committed.

use super::actions::ProductAction;
use super::error::ProductError;
use super::filter::ProductFilter;
use crate::gateway::{DocumentWrite, PersistenceWriter, PRODUCTS_COLLECTION};
use crate::model::{Product, Toast};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store_framework::StateSlice;
use tracing::error;

/// The authoritative product list and the single active toast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductState {
    pub products: Vec<Product>,
    /// `None` is the inert "no notification" value.
    pub toast: Option<Toast>,
}

impl ProductState {
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The products passing `filter`, in collection order.
    pub fn filtered(&self, filter: ProductFilter) -> Vec<Product> {
        filter.apply(&self.products).cloned().collect()
    }
}

fn validate(product: &Product) -> Result<(), ProductError> {
    if product.id.is_empty() {
        return Err(ProductError::MissingId);
    }
    if product.name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    Ok(())
}

#[async_trait]
impl StateSlice for ProductState {
    type Action = ProductAction;
    type Error = ProductError;
    /// Remote persistence, when enabled.
    type Context = Option<PersistenceWriter>;

    /// Applies a product action.
    ///
    /// # Semantics
    /// - `AddProduct`: appends; ids are not checked for uniqueness.
    /// - `DeleteProduct`: removes every match; unknown ids are a no-op.
    /// - `EditProduct`: replaces every match wholesale; unknown ids are a no-op.
    /// - `ToggleProduct`: flips `is_available` on every match.
    /// - `AddToast` / `EditToast`: replace the active toast.
    /// - `DeleteToast`: clears the toast whatever id is given.
    ///
    /// # Errors
    /// Product records with a blank id or name are rejected.
    fn reduce(&mut self, action: &ProductAction) -> Result<(), ProductError> {
        match action {
            ProductAction::AddProduct(product) => {
                validate(product)?;
                self.products.push(product.clone());
            }
            ProductAction::DeleteProduct { product_id } => {
                self.products.retain(|product| &product.id != product_id);
            }
            ProductAction::EditProduct { edited_product } => {
                validate(edited_product)?;
                for slot in self
                    .products
                    .iter_mut()
                    .filter(|product| product.id == edited_product.id)
                {
                    *slot = edited_product.clone();
                }
            }
            ProductAction::ToggleProduct { product_id } => {
                for product in self
                    .products
                    .iter_mut()
                    .filter(|product| &product.id == product_id)
                {
                    product.is_available = !product.is_available;
                }
            }
            ProductAction::AddToast(toast) => self.toast = Some(toast.clone()),
            ProductAction::DeleteToast { .. } => self.toast = None,
            ProductAction::EditToast { edited_toast } => self.toast = Some(edited_toast.clone()),
        }
        Ok(())
    }

    /// Mirrors product changes to the remote collection.
    ///
    /// Writes are queued in dispatch order and not awaited: the store has already committed,
    /// and a failed write is logged by the writer without touching local state.
    async fn on_applied(&self, action: &ProductAction, persistence: &Option<PersistenceWriter>) {
        let Some(writer) = persistence else {
            return;
        };

        let write = match action {
            ProductAction::AddProduct(product) => {
                DocumentWrite::create(PRODUCTS_COLLECTION, &product.id, product)
            }
            ProductAction::DeleteProduct { product_id } => {
                Ok(DocumentWrite::remove(PRODUCTS_COLLECTION, product_id))
            }
            ProductAction::EditProduct { edited_product } => {
                if self.find_product(&edited_product.id).is_none() {
                    return;
                }
                DocumentWrite::update(PRODUCTS_COLLECTION, &edited_product.id, edited_product)
            }
            ProductAction::ToggleProduct { product_id } => match self.find_product(product_id) {
                Some(product) => DocumentWrite::update(
                    PRODUCTS_COLLECTION,
                    product_id,
                    &json!({ "isAvailable": product.is_available }),
                ),
                None => return,
            },
            ProductAction::AddToast(_)
            | ProductAction::DeleteToast { .. }
            | ProductAction::EditToast { .. } => return,
        };

        match write {
            Ok(write) => {
                let _ = writer.submit(write);
            }
            Err(e) => error!(action = action.name(), error = %e, "Could not encode write"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToastType;

    fn widget() -> Product {
        Product::new("p1", "Widget", true)
    }

    fn apply(state: &mut ProductState, action: ProductAction) -> Result<(), ProductError> {
        state.reduce(&action)
    }

    #[test]
    fn test_add_then_lookup_returns_input() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        assert_eq!(state.find_product("p1"), Some(&widget()));
    }

    #[test]
    fn test_add_does_not_check_uniqueness() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        assert_eq!(state.products.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_name_and_id() {
        let mut state = ProductState::default();
        assert_eq!(
            apply(
                &mut state,
                ProductAction::AddProduct(Product::new("p1", "   ", true))
            ),
            Err(ProductError::EmptyName)
        );
        assert_eq!(
            apply(
                &mut state,
                ProductAction::AddProduct(Product::new("", "Widget", true))
            ),
            Err(ProductError::MissingId)
        );
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        apply(
            &mut state,
            ProductAction::DeleteProduct {
                product_id: "never-added".into(),
            },
        )
        .unwrap();
        assert_eq!(state.products, vec![widget()]);

        apply(
            &mut state,
            ProductAction::DeleteProduct {
                product_id: "p1".into(),
            },
        )
        .unwrap();
        assert!(state.find_product("p1").is_none());
    }

    #[test]
    fn test_edit_replaces_only_the_match() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        apply(
            &mut state,
            ProductAction::AddProduct(Product::new("p2", "Gadget", true)),
        )
        .unwrap();

        apply(
            &mut state,
            ProductAction::EditProduct {
                edited_product: Product::new("p1", "Widget Pro", false),
            },
        )
        .unwrap();

        assert_eq!(
            state.products,
            vec![
                Product::new("p1", "Widget Pro", false),
                Product::new("p2", "Gadget", true),
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_are_all_edited_and_toggled() {
        let mut state = ProductState::default();
        for name in ["A", "B"] {
            apply(
                &mut state,
                ProductAction::AddProduct(Product::new("p1", name, true)),
            )
            .unwrap();
        }

        let edited = Product::new("p1", "E", false);
        apply(
            &mut state,
            ProductAction::EditProduct {
                edited_product: edited.clone(),
            },
        )
        .unwrap();
        assert_eq!(state.products, vec![edited.clone(), edited]);

        apply(
            &mut state,
            ProductAction::ToggleProduct {
                product_id: "p1".into(),
            },
        )
        .unwrap();
        let toggled = Product::new("p1", "E", true);
        assert_eq!(state.products, vec![toggled.clone(), toggled]);
    }

    #[test]
    fn test_edit_unknown_leaves_collection_unchanged() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        let before = state.clone();

        apply(
            &mut state,
            ProductAction::EditProduct {
                edited_product: Product::new("ghost", "Ghost", true),
            },
        )
        .unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_flips_availability() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();

        let toggle = ProductAction::ToggleProduct {
            product_id: "p1".into(),
        };
        apply(&mut state, toggle.clone()).unwrap();
        assert!(!state.products[0].is_available);
        apply(&mut state, toggle).unwrap();
        assert!(state.products[0].is_available);
    }

    #[test]
    fn test_toast_is_single_slot() {
        let mut state = ProductState::default();
        let first = Toast::success("first", &widget());
        let second = Toast::for_product(ToastType::Error, "second", &widget());

        apply(&mut state, ProductAction::AddToast(first)).unwrap();
        apply(&mut state, ProductAction::AddToast(second.clone())).unwrap();
        assert_eq!(state.toast, Some(second));
    }

    #[test]
    fn test_delete_toast_ignores_id() {
        for toast_id in ["", "unrelated", "\u{0}garbage\u{fffd}"] {
            let mut state = ProductState::default();
            apply(
                &mut state,
                ProductAction::AddToast(Toast::success("hi", &widget())),
            )
            .unwrap();
            apply(
                &mut state,
                ProductAction::DeleteToast {
                    toast_id: toast_id.to_string(),
                },
            )
            .unwrap();
            assert_eq!(state.toast, None);
        }
    }

    #[test]
    fn test_edit_toast_replaces_wholesale() {
        let mut state = ProductState::default();
        let original = Toast::success("saved", &widget());
        apply(&mut state, ProductAction::AddToast(original.clone())).unwrap();

        let mut edited = original;
        edited.is_active = false;
        edited.message = "dismissed".into();
        apply(
            &mut state,
            ProductAction::EditToast {
                edited_toast: edited.clone(),
            },
        )
        .unwrap();
        assert_eq!(state.toast, Some(edited));
    }

    #[test]
    fn test_filtered_view() {
        let mut state = ProductState::default();
        apply(&mut state, ProductAction::AddProduct(widget())).unwrap();
        apply(
            &mut state,
            ProductAction::AddProduct(Product::new("p2", "Gadget", false)),
        )
        .unwrap();

        assert_eq!(state.filtered(ProductFilter::IsAvailable), vec![widget()]);
        assert_eq!(state.filtered(ProductFilter::All), state.products);
    }
}
