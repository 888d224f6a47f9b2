//! Boundary validation for todo payloads.
//!
//! Bodies arrive as raw JSON values and are checked field by field; every
//! problem is collected so a client sees all of them at once. Keys other than
//! `title`, `description` and `isCompleted` are ignored. Nothing here touches
//! the service.

use serde_json::{Map, Value};
use tracing::debug;

use todo_types::{FieldError, NewTodo, TodoPatch};

/// Matches the `varchar(255)` title column of the original schema.
pub const MAX_TITLE_LEN: usize = 255;

const FIELDS: &[&str] = &["title", "description", "isCompleted"];

pub fn validate_create(body: &Value) -> Result<NewTodo, Vec<FieldError>> {
    let obj = as_object(body)?;
    ignore_unknown(obj);
    let mut errors = Vec::new();

    let title = match obj.get("title") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("title", "title is required"));
            None
        }
        Some(v) => check_title(v, &mut errors),
    };

    let description = match obj.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new("description", "description must be a string"));
            None
        }
    };

    let is_completed = match obj.get("isCompleted") {
        None => false,
        Some(v) => check_bool(v, &mut errors).unwrap_or(false),
    };

    match title {
        Some(title) if errors.is_empty() => Ok(NewTodo {
            title,
            description,
            is_completed,
        }),
        _ => Err(errors),
    }
}

pub fn validate_patch(body: &Value) -> Result<TodoPatch, Vec<FieldError>> {
    let obj = as_object(body)?;
    ignore_unknown(obj);
    let mut errors = Vec::new();
    let mut patch = TodoPatch::default();

    if let Some(v) = obj.get("title") {
        patch.title = check_title(v, &mut errors);
    }

    match obj.get("description") {
        None => {}
        Some(Value::Null) => patch.description = Some(None),
        Some(Value::String(s)) => patch.description = Some(Some(s.clone())),
        Some(_) => errors.push(FieldError::new(
            "description",
            "description must be a string or null",
        )),
    }

    if let Some(v) = obj.get("isCompleted") {
        patch.is_completed = check_bool(v, &mut errors);
    }

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    body.as_object()
        .ok_or_else(|| vec![FieldError::new("body", "request body must be a JSON object")])
}

fn ignore_unknown(obj: &Map<String, Value>) {
    for key in obj.keys().filter(|k| !FIELDS.contains(&k.as_str())) {
        debug!("Ignoring unknown todo property {:?}", key);
    }
}

fn check_title(v: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    match v {
        Value::String(s) if s.is_empty() => {
            errors.push(FieldError::new("title", "title should not be empty"));
            None
        }
        Value::String(s) if s.chars().count() > MAX_TITLE_LEN => {
            errors.push(FieldError::new(
                "title",
                format!("title must be at most {} characters", MAX_TITLE_LEN),
            ));
            None
        }
        Value::String(s) => Some(s.clone()),
        _ => {
            errors.push(FieldError::new("title", "title must be a string"));
            None
        }
    }
}

fn check_bool(v: &Value, errors: &mut Vec<FieldError>) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        _ => {
            errors.push(FieldError::new("isCompleted", "isCompleted must be a boolean"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn create_with_only_title_applies_defaults() {
        let new = validate_create(&json!({ "title": "Buy groceries" })).unwrap();
        assert_eq!(new, NewTodo::titled("Buy groceries"));
    }

    #[test]
    fn create_with_all_fields() {
        let new = validate_create(&json!({
            "title": "Buy groceries",
            "description": "Buy milk, eggs, and bread from the store",
            "isCompleted": true,
        }))
        .unwrap();
        assert_eq!(
            new.description.as_deref(),
            Some("Buy milk, eggs, and bread from the store")
        );
        assert!(new.is_completed);
    }

    #[test]
    fn create_rejects_missing_and_empty_title() {
        let errs = validate_create(&json!({})).unwrap_err();
        assert_eq!(fields(&errs), vec!["title"]);

        let errs = validate_create(&json!({ "title": "" })).unwrap_err();
        assert_eq!(errs[0].message, "title should not be empty");
    }

    #[test]
    fn create_rejects_overlong_title() {
        let long = "a".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_create(&json!({ "title": long })).is_err());

        let max = "a".repeat(MAX_TITLE_LEN);
        assert!(validate_create(&json!({ "title": max })).is_ok());
    }

    #[test]
    fn create_collects_every_error() {
        let errs = validate_create(&json!({
            "title": 5,
            "description": false,
            "isCompleted": "yes",
            "priority": "high",
        }))
        .unwrap_err();

        let mut got = fields(&errs);
        got.sort();
        assert_eq!(got, vec!["description", "isCompleted", "title"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let new = validate_create(&json!({ "title": "A", "priority": "high" })).unwrap();
        assert_eq!(new, NewTodo::titled("A"));

        let patch = validate_patch(&json!({ "isCompleted": true, "id": 7 })).unwrap();
        assert_eq!(patch.is_completed, Some(true));
        assert_eq!(patch.title, None);
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [json!([]), json!("title"), json!(null), json!(3)] {
            let errs = validate_create(&body).unwrap_err();
            assert_eq!(fields(&errs), vec!["body"]);
            assert!(validate_patch(&body).is_err());
        }
    }

    #[test]
    fn patch_takes_any_subset() {
        assert!(validate_patch(&json!({})).unwrap().is_empty());

        let patch = validate_patch(&json!({ "isCompleted": true })).unwrap();
        assert_eq!(patch.is_completed, Some(true));
        assert_eq!(patch.title, None);
        assert_eq!(patch.description, None);
    }

    #[test]
    fn patch_null_description_clears_it() {
        let patch = validate_patch(&json!({ "description": null })).unwrap();
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn patch_type_checks_present_fields() {
        let errs = validate_patch(&json!({ "title": "", "isCompleted": null })).unwrap_err();
        assert_eq!(fields(&errs), vec!["title", "isCompleted"]);

        let errs = validate_patch(&json!({ "title": null })).unwrap_err();
        assert_eq!(fields(&errs), vec!["title"]);
    }
}
