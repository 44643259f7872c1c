//! Input validation
//!
//! Untrusted input arrives as a JSON value. A [`Schema`] checks it against
//! the constraint table in [`fields`] and either produces a typed value or
//! collects every field violation.

pub mod fields;
mod reader;
mod rules;
mod schemas;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::api_error::ApiError;
use crate::Result;

pub use reader::ObjectReader;
pub use rules::{FlagRule, IntRule, Rule, TextRule, UuidRule};
pub use schemas::{
    validate_id, CategoryCreateSchema, CategoryUpdateSchema, IdSchema, TaskCreateSchema,
    TaskUpdateSchema,
};

/// Field name to violation messages, ordered by field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Outcome of checking input against a schema
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> ValidationResult<T> {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Converts violations into a `BAD_REQUEST` carrying the field mapping
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(ApiError::invalid_fields(errors).into()),
        }
    }
}

/// A declarative, side-effect free constraint set
pub trait Schema {
    type Output;

    fn check(&self, raw: &Value) -> ValidationResult<Self::Output>;
}

/// Checks `raw` against `schema`, failing with `BAD_REQUEST` on any violation
pub fn validate<S: Schema>(schema: &S, raw: &Value) -> Result<S::Output> {
    schema.check(raw).into_result()
}
