//! # Slice Selection
//!
//! A [`Selection`] narrows the store's state feed down to the part a view actually renders.
//! Views re-render when *their* slice changes, not on every action the store applies.

use crate::error::FrameworkError;
use crate::slice::StateSlice;
use tokio::sync::watch;

/// A live view of `selector(state)`.
///
/// ```rust
/// use store_framework::{StateSlice, StoreActor};
///
/// #[derive(Clone, Debug, Default)]
/// struct Page { title: String, visits: u32 }
///
/// #[derive(Clone, Debug)]
/// enum PageAction { Visit, Rename(String) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// impl StateSlice for Page {
///     type Action = PageAction;
///     type Error = Never;
///     type Context = ();
///
///     fn reduce(&mut self, action: &PageAction) -> Result<(), Never> {
///         match action {
///             PageAction::Visit => self.visits += 1,
///             PageAction::Rename(title) => self.title = title.clone(),
///         }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Page>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let mut title = client.select(|page: &Page| page.title.clone());
///     client.dispatch(PageAction::Visit).await.unwrap();
///     client.dispatch(PageAction::Rename("Home".into())).await.unwrap();
///
///     // The visit did not touch the title, so the first change seen is the rename.
///     assert_eq!(title.changed().await.unwrap(), "Home");
/// }
/// ```
pub struct Selection<S, T, F> {
    receiver: watch::Receiver<S>,
    selector: F,
    current: T,
}

impl<S, T, F> Selection<S, T, F>
where
    S: StateSlice,
    T: PartialEq,
    F: Fn(&S) -> T,
{
    pub(crate) fn new(mut receiver: watch::Receiver<S>, selector: F) -> Self {
        let current = selector(&receiver.borrow_and_update());
        Self {
            receiver,
            selector,
            current,
        }
    }

    /// The most recently observed value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Pulls the latest published state without waiting.
    ///
    /// Returns `true` when the selected value changed.
    pub fn refresh(&mut self) -> bool {
        let next = (self.selector)(&self.receiver.borrow_and_update());
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    /// Waits until the selected value differs from the current one.
    ///
    /// States that leave the selected value untouched are skipped. Fails with
    /// [`FrameworkError::StoreClosed`] once the store has shut down.
    pub async fn changed(&mut self) -> Result<&T, FrameworkError> {
        loop {
            self.receiver
                .changed()
                .await
                .map_err(|_| FrameworkError::StoreClosed)?;
            if self.refresh() {
                return Ok(&self.current);
            }
        }
    }
}
