//! Dialog state. Visibility is local to each dialog.

use std::future::Future;

/// A yes/no dialog guarding a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationModal {
    header: String,
    message: String,
    visible: bool,
    loading: bool,
}

impl ConfirmationModal {
    pub fn new(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            message: message.into(),
            visible: false,
            loading: false,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Buttons are disabled while the OK action runs.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Runs `on_ok`, then closes the dialog whatever the outcome.
    pub async fn confirm<F, Fut, T>(&mut self, on_ok: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.loading = true;
        let result = on_ok().await;
        self.loading = false;
        self.close();
        result
    }
}

/// An informational dialog, optionally with an OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageModal {
    header: String,
    message: String,
    show_ok_button: bool,
    visible: bool,
}

impl MessageModal {
    pub fn new(
        header: impl Into<String>,
        message: impl Into<String>,
        show_ok_button: bool,
    ) -> Self {
        Self {
            header: header.into(),
            message: message.into(),
            show_ok_button,
            visible: false,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn shows_ok_button(&self) -> bool {
        self.show_ok_button
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replaces the text and shows the dialog.
    pub fn show(&mut self, header: impl Into<String>, message: impl Into<String>) {
        self.header = header.into();
        self.message = message.into();
        self.visible = true;
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// The OK button. Does nothing when the dialog has none.
    pub fn acknowledge(&mut self) {
        if self.show_ok_button {
            self.close();
        }
    }
}
