use serde::Serialize;

/// The ordered list of todo items. Display order is storage order.
///
/// Only [`crate::ops::list_ops::TodoListStore`] mutates a list, which keeps
/// every item non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    pub items: Vec<String>,
}

impl TodoList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What a successful mutation did to the list.
///
/// Carries just enough for a presentation layer to apply a minimal diff
/// instead of redrawing everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListChange {
    Inserted { at: usize },
    Updated { at: usize },
    Removed { at: usize },
    Reordered { from: usize, to: usize },
}

impl ListChange {
    /// Short lowercase name, used in logs and text output
    pub fn kind(&self) -> &'static str {
        match self {
            ListChange::Inserted { .. } => "inserted",
            ListChange::Updated { .. } => "updated",
            ListChange::Removed { .. } => "removed",
            ListChange::Reordered { .. } => "reordered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_is_empty() {
        let list = TodoList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_change_json_shape() {
        let json = serde_json::to_string(&ListChange::Inserted { at: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"inserted","at":2}"#);
        let json = serde_json::to_string(&ListChange::Reordered { from: 0, to: 1 }).unwrap();
        assert_eq!(json, r#"{"kind":"reordered","from":0,"to":1}"#);
    }

    #[test]
    fn test_change_kind() {
        assert_eq!(ListChange::Updated { at: 0 }.kind(), "updated");
        assert_eq!(ListChange::Removed { at: 3 }.kind(), "removed");
    }
}
