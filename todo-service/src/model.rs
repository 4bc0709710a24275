//! Todo item entity

use serde::{Deserialize, Serialize};

/// Identifier type for todo items
pub type TodoId = i64;

/// A single todo record
///
/// Serialized with camelCase field names (`id`, `name`, `isComplete`). Every
/// field is optional on input, so a create request may omit `id` entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned identifier
    #[serde(default)]
    pub id: TodoId,

    /// Free-form label
    #[serde(default)]
    pub name: Option<String>,

    /// Completion flag
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItem {
    /// Create an item with the given id, name and completion flag
    pub fn new(id: TodoId, name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id,
            name: Some(name.into()),
            is_complete,
        }
    }

    /// Copy every mutable field from `other`, keeping this item's id
    pub fn overwrite_from(&mut self, other: TodoItem) {
        self.name = other.name;
        self.is_complete = other.is_complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let item = TodoItem::new(1, "Task 1", true);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Task 1", "isComplete": true })
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let item: TodoItem = serde_json::from_str(r#"{ "name": "Task 3" }"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.name.as_deref(), Some("Task 3"));
        assert!(!item.is_complete);

        let empty: TodoItem = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TodoItem::default());
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut stored = TodoItem::new(2, "Task 2", false);
        stored.overwrite_from(TodoItem {
            id: 99,
            name: None,
            is_complete: true,
        });
        assert_eq!(stored.id, 2);
        assert!(stored.name.is_none());
        assert!(stored.is_complete);
    }
}
