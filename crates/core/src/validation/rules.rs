//! Single-field constraint rules

use serde_json::Value;
use uuid::Uuid;

/// A constraint on one field of an input object.
///
/// `check` receives the field's value (which may be `null`) and returns
/// either the coerced value or every violation it found.
pub trait Rule {
    type Value;

    /// Key of the field in the input object
    fn field(&self) -> &'static str;

    /// Message recorded when a required field is missing
    fn required_message(&self) -> String;

    fn check(&self, raw: &Value) -> Result<Self::Value, Vec<String>>;
}

/// String with optional length bounds, counted in UTF-16 code units as
/// browser clients count them
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: &'static str,
    pub label: &'static str,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
}

impl Rule for TextRule {
    type Value = String;

    fn field(&self) -> &'static str {
        self.field
    }

    fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }

    fn check(&self, raw: &Value) -> Result<String, Vec<String>> {
        let Some(text) = raw.as_str() else {
            return Err(vec![format!("{} must be a string", self.label)]);
        };

        let len = text.encode_utf16().count();
        let mut errors = Vec::new();
        if let Some(min) = self.min_len {
            if len < min {
                errors.push(format!(
                    "{} must be at least {} characters long",
                    self.label, min
                ));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                errors.push(format!("{} must not exceed {} characters", self.label, max));
            }
        }

        if errors.is_empty() {
            Ok(text.to_string())
        } else {
            Err(errors)
        }
    }
}

/// Integer within an inclusive range
#[derive(Debug, Clone, Copy)]
pub struct IntRule {
    pub field: &'static str,
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
}

impl Rule for IntRule {
    type Value = u8;

    fn field(&self) -> &'static str {
        self.field
    }

    fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }

    fn check(&self, raw: &Value) -> Result<u8, Vec<String>> {
        let Some(number) = raw.as_f64() else {
            return Err(vec![format!("{} must be a number", self.label)]);
        };

        // All violations are reported, e.g. 0.5 is neither integral nor in range
        let mut errors = Vec::new();
        if number.fract() != 0.0 {
            errors.push(format!("{} must be an integer", self.label));
        }
        if number < f64::from(self.min) {
            errors.push(format!("{} must be at least {}", self.label, self.min));
        }
        if number > f64::from(self.max) {
            errors.push(format!("{} must not exceed {}", self.label, self.max));
        }

        if errors.is_empty() {
            Ok(number as u8)
        } else {
            Err(errors)
        }
    }
}

/// Boolean flag
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    pub field: &'static str,
    pub label: &'static str,
}

impl Rule for FlagRule {
    type Value = bool;

    fn field(&self) -> &'static str {
        self.field
    }

    fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }

    fn check(&self, raw: &Value) -> Result<bool, Vec<String>> {
        raw.as_bool()
            .ok_or_else(|| vec![format!("{} must be a boolean", self.label)])
    }
}

/// Hyphenated UUID string
#[derive(Debug, Clone, Copy)]
pub struct UuidRule {
    pub field: &'static str,
    pub message: &'static str,
}

/// Accepts only the canonical 8-4-4-4-12 hyphenated form
pub(crate) fn parse_hyphenated_uuid(text: &str) -> Option<Uuid> {
    if text.len() != 36 {
        return None;
    }
    Uuid::try_parse(text).ok()
}

impl Rule for UuidRule {
    type Value = Uuid;

    fn field(&self) -> &'static str {
        self.field
    }

    fn required_message(&self) -> String {
        self.message.to_string()
    }

    fn check(&self, raw: &Value) -> Result<Uuid, Vec<String>> {
        raw.as_str()
            .and_then(parse_hyphenated_uuid)
            .ok_or_else(|| vec![self.message.to_string()])
    }
}
