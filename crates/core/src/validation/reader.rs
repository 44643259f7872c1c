//! Field-by-field reading of an input object

use serde_json::{Map, Value};

use super::rules::Rule;
use super::{FieldErrors, ValidationResult};
use crate::patch::Patch;

/// Key used when the input itself is not an object
pub const INPUT_FIELD: &str = "input";

/// Reads fields out of an input object while accumulating violations.
///
/// Reading never stops at the first bad field; [`ObjectReader::finish`]
/// reports everything collected.
#[derive(Debug)]
pub struct ObjectReader<'a> {
    fields: Option<&'a Map<String, Value>>,
    errors: FieldErrors,
}

impl<'a> ObjectReader<'a> {
    pub fn new(raw: &'a Value) -> Self {
        let mut reader = Self {
            fields: raw.as_object(),
            errors: FieldErrors::new(),
        };
        if reader.fields.is_none() {
            reader.reject(INPUT_FIELD, vec!["Input must be an object".to_string()]);
        }
        reader
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(field))
    }

    fn reject(&mut self, field: &str, messages: Vec<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .extend(messages);
    }

    fn checked<R: Rule>(&mut self, rule: &R, raw: &Value) -> Option<R::Value> {
        match rule.check(raw) {
            Ok(value) => Some(value),
            Err(messages) => {
                self.reject(rule.field(), messages);
                None
            }
        }
    }

    /// Field that must be present; `null` is checked like any other value
    pub fn required<R: Rule>(&mut self, rule: &R) -> Option<R::Value> {
        match self.get(rule.field()) {
            Some(raw) => self.checked(rule, raw),
            None => {
                if self.fields.is_some() {
                    self.reject(rule.field(), vec![rule.required_message()]);
                }
                None
            }
        }
    }

    /// Field that may be omitted but not `null`
    pub fn optional<R: Rule>(&mut self, rule: &R) -> Option<R::Value> {
        let raw = self.get(rule.field())?;
        self.checked(rule, raw)
    }

    /// Field that may be omitted or `null`; both read as absent
    pub fn nullable<R: Rule>(&mut self, rule: &R) -> Option<R::Value> {
        match self.get(rule.field()) {
            None | Some(Value::Null) => None,
            Some(raw) => self.checked(rule, raw),
        }
    }

    /// Update of a field that may hold no value: omitted leaves it, `null`
    /// clears it
    pub fn patch<R: Rule>(&mut self, rule: &R) -> Patch<R::Value> {
        match self.get(rule.field()) {
            None => Patch::Unchanged,
            Some(Value::Null) => Patch::Clear,
            Some(raw) => match self.checked(rule, raw) {
                Some(value) => Patch::Set(value),
                None => Patch::Unchanged,
            },
        }
    }

    /// Yields `value` when no violation was recorded
    pub fn finish<T>(self, value: Option<T>) -> ValidationResult<T> {
        match value {
            Some(value) if self.errors.is_empty() => ValidationResult::Valid(value),
            _ => {
                debug_assert!(!self.errors.is_empty(), "missing value without a violation");
                ValidationResult::Invalid(self.errors)
            }
        }
    }
}
