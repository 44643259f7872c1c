//! Input schemas for tasks, categories and identifiers

use serde_json::{json, Value};
use uuid::Uuid;

use super::fields::{
    CATEGORY_NAME, ID, TASK_CATEGORY_ID, TASK_DESCRIPTION, TASK_IS_DONE, TASK_PRIORITY,
    TASK_TITLE,
};
use super::reader::ObjectReader;
use super::{validate, Schema, ValidationResult};
use crate::category::{CategoryPatch, NewCategory};
use crate::task::{NewTask, TaskPatch, DEFAULT_PRIORITY};
use crate::Result;

/// Task creation: `title` required, `isDone` and `priority` defaulted
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskCreateSchema;

impl Schema for TaskCreateSchema {
    type Output = NewTask;

    fn check(&self, raw: &Value) -> ValidationResult<NewTask> {
        let mut reader = ObjectReader::new(raw);
        let title = reader.required(&TASK_TITLE);
        let description = reader.nullable(&TASK_DESCRIPTION);
        let is_done = reader.optional(&TASK_IS_DONE).unwrap_or(false);
        let priority = reader.optional(&TASK_PRIORITY).unwrap_or(DEFAULT_PRIORITY);
        let category_id = reader.nullable(&TASK_CATEGORY_ID);

        reader.finish(title.map(|title| NewTask {
            title,
            description,
            is_done,
            priority,
            category_id,
        }))
    }
}

/// Task update: every field optional, nothing defaulted
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskUpdateSchema;

impl Schema for TaskUpdateSchema {
    type Output = TaskPatch;

    fn check(&self, raw: &Value) -> ValidationResult<TaskPatch> {
        let mut reader = ObjectReader::new(raw);
        let patch = TaskPatch {
            title: reader.optional(&TASK_TITLE),
            description: reader.patch(&TASK_DESCRIPTION),
            is_done: reader.optional(&TASK_IS_DONE),
            priority: reader.optional(&TASK_PRIORITY),
            category_id: reader.patch(&TASK_CATEGORY_ID),
        };
        reader.finish(Some(patch))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryCreateSchema;

impl Schema for CategoryCreateSchema {
    type Output = NewCategory;

    fn check(&self, raw: &Value) -> ValidationResult<NewCategory> {
        let mut reader = ObjectReader::new(raw);
        let name = reader.required(&CATEGORY_NAME);
        reader.finish(name.map(|name| NewCategory { name }))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryUpdateSchema;

impl Schema for CategoryUpdateSchema {
    type Output = CategoryPatch;

    fn check(&self, raw: &Value) -> ValidationResult<CategoryPatch> {
        let mut reader = ObjectReader::new(raw);
        let name = reader.optional(&CATEGORY_NAME);
        reader.finish(Some(CategoryPatch { name }))
    }
}

/// `{ "id": <uuid> }`
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSchema;

impl Schema for IdSchema {
    type Output = Uuid;

    fn check(&self, raw: &Value) -> ValidationResult<Uuid> {
        let mut reader = ObjectReader::new(raw);
        let id = reader.required(&ID);
        reader.finish(id)
    }
}

/// Parses an entity identifier, failing with `BAD_REQUEST` keyed by `id`
pub fn validate_id(id: &str) -> Result<Uuid> {
    validate(&IdSchema, &json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_error::ErrorCode;
    use crate::patch::Patch;

    fn errors_for<T: std::fmt::Debug>(result: ValidationResult<T>, field: &str) -> Vec<String> {
        result
            .field_errors()
            .and_then(|errors| errors.get(field).cloned())
            .unwrap_or_default()
    }

    #[test]
    fn test_create_applies_defaults() {
        let result = TaskCreateSchema.check(&json!({ "title": "Write docs" }));
        assert_eq!(result, ValidationResult::Valid(NewTask::new("Write docs")));
    }

    #[test]
    fn test_create_keeps_supplied_values() {
        let category_id = Uuid::new_v4();
        let result = TaskCreateSchema.check(&json!({
            "title": "Ship",
            "description": "Release 1.0",
            "isDone": true,
            "priority": 7,
            "categoryId": category_id,
        }));

        let expected = NewTask::new("Ship")
            .with_description("Release 1.0")
            .with_priority(7)
            .with_category(category_id)
            .done();
        assert_eq!(result, ValidationResult::Valid(expected));
    }

    #[test]
    fn test_create_rejects_short_title() {
        let result = TaskCreateSchema.check(&json!({ "title": "ab" }));
        assert_eq!(
            errors_for(result, "title"),
            vec!["Title must be at least 3 characters long".to_string()]
        );
    }

    #[test]
    fn test_create_requires_title() {
        let result = TaskCreateSchema.check(&json!({ "priority": 2 }));
        assert_eq!(errors_for(result, "title"), vec!["Title is required".to_string()]);
    }

    #[test]
    fn test_create_collects_all_fields() {
        let result = TaskCreateSchema.check(&json!({
            "title": "x".repeat(101),
            "description": "d".repeat(256),
            "isDone": "yes",
            "priority": 11,
            "categoryId": "work",
        }));

        let errors = result.field_errors().unwrap();
        let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(
            fields,
            vec!["categoryId", "description", "isDone", "priority", "title"]
        );
        assert_eq!(errors["isDone"], vec!["isDone must be a boolean".to_string()]);
        assert_eq!(errors["priority"], vec!["Priority must not exceed 10".to_string()]);
    }

    #[test]
    fn test_create_treats_null_optional_as_absent() {
        let result = TaskCreateSchema.check(&json!({
            "title": "Nulls",
            "description": null,
            "categoryId": null,
        }));
        assert_eq!(result, ValidationResult::Valid(NewTask::new("Nulls")));
    }

    #[test]
    fn test_create_rejects_null_priority() {
        let result = TaskCreateSchema.check(&json!({ "title": "Nulls", "priority": null }));
        assert_eq!(
            errors_for(result, "priority"),
            vec!["Priority must be a number".to_string()]
        );
    }

    #[test]
    fn test_non_object_input() {
        let result = TaskCreateSchema.check(&json!(["title"]));
        assert_eq!(
            errors_for(result, "input"),
            vec!["Input must be an object".to_string()]
        );
    }

    #[test]
    fn test_update_does_not_apply_defaults() {
        let result = TaskUpdateSchema.check(&json!({}));
        assert_eq!(result, ValidationResult::Valid(TaskPatch::default()));
    }

    #[test]
    fn test_update_distinguishes_false_and_null() {
        let result = TaskUpdateSchema.check(&json!({
            "isDone": false,
            "description": null,
        }));
        assert_eq!(
            result,
            ValidationResult::Valid(TaskPatch {
                is_done: Some(false),
                description: Patch::Clear,
                ..TaskPatch::default()
            })
        );
    }

    #[test]
    fn test_update_still_enforces_constraints() {
        let result = TaskUpdateSchema.check(&json!({ "title": "no", "priority": 0 }));
        let errors = result.field_errors().unwrap();
        assert_eq!(errors["title"], vec!["Title must be at least 3 characters long".to_string()]);
        assert_eq!(errors["priority"], vec!["Priority must be at least 1".to_string()]);
    }

    #[test]
    fn test_update_rejects_null_title() {
        let result = TaskUpdateSchema.check(&json!({ "title": null }));
        assert_eq!(errors_for(result, "title"), vec!["Title must be a string".to_string()]);
    }

    #[test]
    fn test_category_schemas() {
        assert_eq!(
            CategoryCreateSchema.check(&json!({ "name": "Work" })),
            ValidationResult::Valid(NewCategory::new("Work"))
        );
        assert_eq!(
            errors_for(CategoryCreateSchema.check(&json!({ "name": "Wo" })), "name"),
            vec!["Category must be at least 3 characters long".to_string()]
        );
        assert_eq!(
            CategoryUpdateSchema.check(&json!({})),
            ValidationResult::Valid(CategoryPatch::default())
        );
    }

    #[test]
    fn test_validate_id() {
        let id = Uuid::new_v4();
        assert_eq!(validate_id(&id.to_string()).unwrap(), id);

        let err = validate_id("123").unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.code(), ErrorCode::BadRequest);
        assert_eq!(
            api.field_errors().unwrap()["id"],
            vec!["Invalid ID format".to_string()]
        );
    }
}
