use crate::clients::{ProductStore, ProductsSelection};
use crate::model::Product;
use crate::product_slice::{ProductError, ProductFilter};

/// The product table.
///
/// Subscribes to the product slice only, so toast changes never wake it. The filter and
/// the product being edited are local to the view.
pub struct ProductListView {
    products: ProductsSelection,
    filter: ProductFilter,
    editing: Option<Product>,
}

impl ProductListView {
    pub fn new(store: &ProductStore) -> Self {
        Self {
            products: store.select_products(),
            filter: ProductFilter::All,
            editing: None,
        }
    }

    pub fn filter(&self) -> ProductFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProductFilter) {
        self.filter = filter;
    }

    /// Every product, unfiltered.
    pub fn products(&self) -> &[Product] {
        self.products.current()
    }

    /// The rows to render: products passing the filter, in collection order.
    pub fn visible(&self) -> Vec<Product> {
        self.filter
            .apply(self.products.current())
            .cloned()
            .collect()
    }

    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn begin_edit(&mut self, product: Product) {
        self.editing = Some(product);
    }

    pub fn clear_editing(&mut self) {
        self.editing = None;
    }

    /// Picks up the latest product list without waiting. Returns `true` if it changed.
    pub fn refresh(&mut self) -> bool {
        self.products.refresh()
    }

    /// Waits for the product list to change.
    pub async fn changed(&mut self) -> Result<(), ProductError> {
        self.products
            .changed()
            .await
            .map(|_| ())
            .map_err(|e| ProductError::StoreCommunication(e.to_string()))
    }
}
