use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored todo as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated create input with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

impl NewTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_completed: false,
        }
    }
}

/// Validated partial update. `None` leaves the field untouched.
///
/// `description` is doubly optional: `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_camel_case_and_omits_missing_description() {
        let now = Utc::now();
        let todo = Todo {
            id: 7,
            title: "Buy groceries".into(),
            description: None,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("description").is_none());
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());

        let back: Todo = serde_json::from_value(json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn empty_patch() {
        assert!(TodoPatch::default().is_empty());
        let patch = TodoPatch {
            is_completed: Some(true),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
