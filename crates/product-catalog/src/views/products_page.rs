use super::{
    AddProductForm, EditProductForm, FilterSelect, ProductItemView, ProductListView, ToastView,
};
use crate::clients::ProductStore;
use crate::model::Product;
use crate::product_slice::{ProductError, ProductFilter};

/// The products page: toast, add-or-edit form, filter and table.
///
/// While a product is being edited the edit form replaces the add form.
pub struct ProductsPage {
    store: ProductStore,
    list: ProductListView,
    filter: FilterSelect,
    add_form: AddProductForm,
    edit_form: Option<EditProductForm>,
    toast: ToastView,
}

impl ProductsPage {
    pub fn new(store: ProductStore) -> Self {
        Self {
            list: ProductListView::new(&store),
            filter: FilterSelect::default(),
            add_form: AddProductForm::new(store.clone()),
            edit_form: None,
            toast: ToastView::new(store.clone()),
            store,
        }
    }

    pub fn list(&self) -> &ProductListView {
        &self.list
    }

    pub fn toast(&self) -> &ToastView {
        &self.toast
    }

    pub fn toast_mut(&mut self) -> &mut ToastView {
        &mut self.toast
    }

    pub fn add_form(&mut self) -> &mut AddProductForm {
        &mut self.add_form
    }

    pub fn edit_form(&mut self) -> Option<&mut EditProductForm> {
        self.edit_form.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_form.is_some()
    }

    /// Picks up the latest published state. Returns `true` if anything shown changed.
    pub fn refresh(&mut self) -> bool {
        let products = self.list.refresh();
        let toast = self.toast.refresh();
        products || toast
    }

    pub fn select_filter(&mut self, option: &str) -> Result<ProductFilter, ProductError> {
        let filter = self.filter.select(option)?;
        self.list.set_filter(filter);
        Ok(filter)
    }

    /// One view per visible row.
    pub fn items(&self) -> Vec<ProductItemView> {
        self.list
            .visible()
            .into_iter()
            .map(|product| ProductItemView::new(self.store.clone(), product))
            .collect()
    }

    /// The edit button of a row.
    pub fn begin_edit(&mut self, product: Product) {
        self.edit_form = Some(EditProductForm::new(self.store.clone(), product.clone()));
        self.list.begin_edit(product);
    }

    pub fn cancel_edit(&mut self) {
        self.edit_form = None;
        self.list.clear_editing();
    }

    /// Submits the edit form. On success the page goes back to the add form.
    pub async fn submit_edit(&mut self) -> Result<bool, ProductError> {
        let Some(form) = self.edit_form.as_mut() else {
            return Ok(false);
        };
        let saved = form.submit().await?;
        if saved {
            self.cancel_edit();
        }
        Ok(saved)
    }

    /// Confirms a row's pending delete, leaving edit mode if that row was being edited.
    pub async fn confirm_delete(&mut self, item: &mut ProductItemView) -> Result<(), ProductError> {
        let reset = item.confirm_delete(self.list.editing()).await?;
        if reset {
            self.cancel_edit();
        }
        Ok(())
    }
}
