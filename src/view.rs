//! Detail views and back-navigation.
//!
//! A [`DetailView`] can only be obtained through [`DetailView::resolve`],
//! which fetches the record first and constructs the view after the fetch
//! succeeds. A failed fetch surfaces the resolver's error and no view value
//! ever exists, so a view never observes a partially-loaded record.

use std::sync::{Arc, Mutex};

use sea_orm::DatabaseConnection;

use crate::errors::ApiError;
use crate::traits::CrudResource;

/// Back-navigation collaborator of a detail view.
pub trait History: Send + Sync {
    /// Navigate one step back. Best-effort; backing out of an empty history
    /// is a no-op.
    fn back(&self);
}

/// Stack of visited paths, the default [`History`] implementation.
#[derive(Default)]
pub struct NavigationHistory {
    stack: Mutex<Vec<String>>,
}

impl NavigationHistory {
    pub fn push(&self, path: impl Into<String>) {
        if let Ok(mut stack) = self.stack.lock() {
            stack.push(path.into());
        }
    }

    /// The path currently on top of the stack, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.stack.lock().ok().and_then(|stack| stack.last().cloned())
    }
}

impl History for NavigationHistory {
    fn back(&self) {
        if let Ok(mut stack) = self.stack.lock() {
            stack.pop();
        }
    }
}

/// A resolved detail view over one record.
///
/// Holds the record read-only for the lifetime of the view, together with
/// the history collaborator its back action delegates to.
pub struct DetailView<R> {
    entity: R,
    history: Arc<dyn History>,
}

impl<R: CrudResource> DetailView<R> {
    /// Fetch the record with the given id, then construct the view.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error when the fetch fails; in that case no
    /// view is constructed.
    pub async fn resolve(
        db: &DatabaseConnection,
        id: i64,
        history: Arc<dyn History>,
    ) -> Result<Self, ApiError> {
        let entity = R::get_one(db, id).await?;
        Ok(Self { entity, history })
    }

    /// The resolved record.
    pub fn entity(&self) -> &R {
        &self.entity
    }

    /// Return to the previous navigation state. Delegates to the history
    /// collaborator exactly once; always succeeds.
    pub fn previous_state(&self) {
        self.history.back();
    }
}
