use crate::clients::{ProductStore, ToastSelection};
use crate::model::Toast;
use crate::product_slice::ProductError;

/// The notification area. Subscribes to the toast slice only.
pub struct ToastView {
    store: ProductStore,
    toast: ToastSelection,
}

impl ToastView {
    pub fn new(store: ProductStore) -> Self {
        let toast = store.select_toast();
        Self { store, toast }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.toast.current().as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current().is_some_and(|toast| toast.is_active)
    }

    pub fn refresh(&mut self) -> bool {
        self.toast.refresh()
    }

    /// Waits for a different toast (or none) to be published.
    pub async fn changed(&mut self) -> Result<Option<&Toast>, ProductError> {
        match self.toast.changed().await {
            Ok(toast) => Ok(toast.as_ref()),
            Err(e) => Err(ProductError::StoreCommunication(e.to_string())),
        }
    }

    /// Greys the toast out without removing it.
    pub async fn deactivate(&self) -> Result<(), ProductError> {
        let Some(toast) = self.current() else {
            return Ok(());
        };
        let edited_toast = Toast {
            is_active: false,
            ..toast.clone()
        };
        self.store.edit_toast(edited_toast).await
    }

    /// The close button.
    pub async fn dismiss(&self) -> Result<(), ProductError> {
        let toast_id = self
            .current()
            .map(|toast| toast.id.clone())
            .unwrap_or_default();
        self.store.delete_toast(toast_id).await
    }
}
