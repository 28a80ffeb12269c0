//! In-memory collection state
//!
//! The pure mutation rules shared by the task and team stores, kept free of
//! IO so they can be tested directly. The server's response is always the
//! authoritative copy; a collection never fabricates or merges records.

/// A cached record with a stable numeric identity
pub trait Resource {
    fn id(&self) -> i64;
}

impl Resource for crate::client::models::Task {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for crate::client::models::Team {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Cached view of one server-side collection.
///
/// Holds the last list the server answered with, the most recently fetched
/// single record, and the error from the last failed refresh (if any).
#[derive(Debug, Clone)]
pub struct Collection<T: Resource> {
    items: Vec<T>,
    current: Option<T>,
    last_error: Option<String>,
}

impl<T: Resource> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            last_error: None,
        }
    }
}

impl<T: Resource + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the whole list with the server's response and clear any
    /// recorded error
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.last_error = None;
    }

    /// A refresh failed: drop the stale list and record why. Callers render
    /// an empty list plus the error rather than data of unknown age.
    pub fn fail_reset(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.last_error = Some(message.into());
    }

    /// Prepend a freshly created record so it shows first in lists
    pub fn insert_front(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Replace the record with the same id in place, preserving list order.
    /// Returns false when the id is not cached, which is not an error; the
    /// server copy simply has nowhere to land.
    pub fn apply_update(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                if self
                    .current
                    .as_ref()
                    .map(|c| c.id() == item.id())
                    .unwrap_or(false)
                {
                    self.current = Some(item.clone());
                }
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Idempotent.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|item| item.id() != id);
        if self.current.as_ref().map(|c| c.id() == id).unwrap_or(false) {
            self.current = None;
        }
    }

    /// Record the most recently fetched single record
    pub fn set_current(&mut self, item: T) {
        self.current = Some(item);
    }
}
