use std::cell::RefCell;
use std::rc::Rc;

use crate::model::list::{ListChange, TodoList};

/// Error type for list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("item text cannot be blank")]
    BlankInput,
    #[error("index {index} out of range for list of {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Receives a notification after every successful mutation.
pub trait ListObserver {
    fn list_changed(&mut self, change: &ListChange);
}

impl<F> ListObserver for F
where
    F: FnMut(&ListChange),
{
    fn list_changed(&mut self, change: &ListChange) {
        self(change)
    }
}

/// Observer that records changes into a buffer shared with its owner.
///
/// Clone it, subscribe one clone and keep the other to [`ChangeLog::drain`].
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    changes: Rc<RefCell<Vec<ListChange>>>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every change recorded since the last drain, oldest first
    pub fn drain(&self) -> Vec<ListChange> {
        std::mem::take(&mut *self.changes.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.borrow().is_empty()
    }
}

impl ListObserver for ChangeLog {
    fn list_changed(&mut self, change: &ListChange) {
        self.changes.borrow_mut().push(*change);
    }
}

/// Owns a [`TodoList`] and is the only way to change it.
///
/// Every operation either succeeds and notifies all observers, or fails and
/// leaves the list untouched.
#[derive(Default)]
pub struct TodoListStore {
    list: TodoList,
    observers: Vec<Box<dyn ListObserver>>,
}

impl std::fmt::Debug for TodoListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoListStore")
            .field("list", &self.list)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TodoListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: impl ListObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn count(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn item(&self, index: usize) -> Result<&str, ListError> {
        self.check_index(index)?;
        Ok(&self.list.items[index])
    }

    pub fn items(&self) -> &[String] {
        &self.list.items
    }

    /// Append an item. Surrounding whitespace is trimmed.
    pub fn add(&mut self, text: &str) -> Result<ListChange, ListError> {
        let text = non_blank(text)?;
        self.list.items.push(text.to_string());
        let change = ListChange::Inserted {
            at: self.list.len() - 1,
        };
        self.notify(change);
        Ok(change)
    }

    /// Replace the text of an item in place
    pub fn rename(&mut self, index: usize, text: &str) -> Result<ListChange, ListError> {
        self.check_index(index)?;
        let text = non_blank(text)?;
        self.list.items[index] = text.to_string();
        let change = ListChange::Updated { at: index };
        self.notify(change);
        Ok(change)
    }

    /// Remove an item, shifting later items down. Returns the removed text.
    pub fn remove(&mut self, index: usize) -> Result<String, ListError> {
        self.check_index(index)?;
        let item = self.list.items.remove(index);
        self.notify(ListChange::Removed { at: index });
        Ok(item)
    }

    /// Mark an item done. A completed item leaves the list, exactly like
    /// [`TodoListStore::remove`].
    pub fn complete(&mut self, index: usize) -> Result<String, ListError> {
        self.remove(index)
    }

    /// Exchange two items. `i == j` succeeds without moving anything.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<ListChange, ListError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.list.items.swap(i, j);
        let change = ListChange::Reordered { from: i, to: j };
        self.notify(change);
        Ok(change)
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.list.len() {
            tracing::debug!(index, count = self.list.len(), "index out of range");
            return Err(ListError::IndexOutOfRange {
                index,
                count: self.list.len(),
            });
        }
        Ok(())
    }

    fn notify(&mut self, change: ListChange) {
        tracing::debug!(kind = change.kind(), ?change, count = self.list.len(), "list changed");
        for observer in &mut self.observers {
            observer.list_changed(&change);
        }
    }
}

fn non_blank(text: &str) -> Result<&str, ListError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        tracing::debug!("rejected blank item text");
        return Err(ListError::BlankInput);
    }
    Ok(trimmed)
}
