//! Canonical field constraints
//!
//! Create and update schemas are both built from these entries, so a
//! constraint is declared exactly once.

use super::rules::{FlagRule, IntRule, TextRule, UuidRule};

pub const TASK_TITLE: TextRule = TextRule {
    field: "title",
    label: "Title",
    min_len: Some(3),
    max_len: Some(100),
};

pub const TASK_DESCRIPTION: TextRule = TextRule {
    field: "description",
    label: "Description",
    min_len: None,
    max_len: Some(255),
};

pub const TASK_IS_DONE: FlagRule = FlagRule {
    field: "isDone",
    label: "isDone",
};

pub const TASK_PRIORITY: IntRule = IntRule {
    field: "priority",
    label: "Priority",
    min: 1,
    max: 10,
};

pub const TASK_CATEGORY_ID: UuidRule = UuidRule {
    field: "categoryId",
    message: "CategoryId must be a valid UUID",
};

pub const CATEGORY_NAME: TextRule = TextRule {
    field: "name",
    label: "Category",
    min_len: Some(3),
    max_len: Some(100),
};

pub const ID: UuidRule = UuidRule {
    field: "id",
    message: "Invalid ID format",
};
