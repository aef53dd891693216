//! Strict validation of untrusted JSON bodies into insert shapes.
//!
//! Validation runs in two passes. The shape pass works on the raw JSON map
//! and reports unknown keys, missing required keys and non-string values.
//! The rule pass deserializes into the wire struct and runs its
//! [`validator::Validate`] rules over every field the shape pass did not
//! flag. Both lists are merged into one [`ValidationError`], one entry per
//! field.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

/// Field name used when the body itself is unusable (not an object).
pub const BODY_FIELD: &str = "body";

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_NOT_A_STRING: &str = "Expected string";
pub const MSG_UNRECOGNIZED_KEY: &str = "Unrecognized key";
pub const MSG_NOT_AN_OBJECT: &str = "Expected object";

/// A single field-level failure, reported under the wire (camelCase) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field that failed validation, one entry per field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build from collected violations, sorted by field for stable output.
    pub fn from_violations(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self { violations }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Names of the failing fields, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first()
                    .map(|err| FieldViolation::new(wire_name(&field), describe(err)))
            })
            .collect();
        Self::from_violations(violations)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe(err: &validator::ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Failed '{}' check", err.code))
}

/// Convert a Rust field name (`type_demande`) to its wire name (`typeDemande`).
pub fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Build a `validator` error carrying a human-readable message.
pub fn rule_error(code: &'static str, message: String) -> validator::ValidationError {
    let mut err = validator::ValidationError::new(code);
    err.message = Some(message.into());
    err
}

// ---------------------------------------------------------------------------
// Shape declaration
// ---------------------------------------------------------------------------

/// One declared key of a wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// A wire shape accepted from clients, convertible to its storage insert shape.
///
/// `FIELDS` lists every accepted key by wire name; anything else is rejected.
pub trait InsertShape: DeserializeOwned + Validate {
    type Output;

    const FIELDS: &'static [FieldSpec];

    /// Convert an already validated value into the insert shape.
    fn into_insert(self) -> Result<Self::Output, ValidationError>;
}

/// Validate a JSON body against `T` and return its insert shape.
pub fn validate_insert<T: InsertShape>(body: Value) -> Result<T::Output, ValidationError> {
    let Value::Object(map) = body else {
        return Err(ValidationError::single(BODY_FIELD, MSG_NOT_AN_OBJECT));
    };

    let mut violations = check_shape(&map, T::FIELDS);
    let map = strip_flagged(map, T::FIELDS, &violations);

    let input: T = serde_json::from_value(Value::Object(map))
        .map_err(|e| ValidationError::single(BODY_FIELD, e.to_string()))?;

    if let Err(errors) = input.validate() {
        let unflagged: Vec<FieldViolation> = ValidationError::from(errors)
            .violations
            .into_iter()
            .filter(|rv| !violations.iter().any(|v| v.field == rv.field))
            .collect();
        violations.extend(unflagged);
    }

    if !violations.is_empty() {
        return Err(ValidationError::from_violations(violations));
    }
    input.into_insert()
}

/// Drop unknown keys and stand in for every flagged declared key so the
/// rest of the body can still be deserialized and rule-checked. Required
/// keys get `""`, optional keys are removed. Rule failures on these
/// stand-ins are discarded by the caller.
fn strip_flagged(
    mut map: Map<String, Value>,
    fields: &[FieldSpec],
    violations: &[FieldViolation],
) -> Map<String, Value> {
    map.retain(|key, _| fields.iter().any(|f| f.name == key.as_str()));
    for field in fields {
        if !violations.iter().any(|v| v.field == field.name) {
            continue;
        }
        if field.required {
            map.insert(field.name.to_string(), Value::String(String::new()));
        } else {
            map.remove(field.name);
        }
    }
    map
}

fn check_shape(map: &Map<String, Value>, fields: &[FieldSpec]) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = map
        .keys()
        .filter(|key| !fields.iter().any(|f| f.name == key.as_str()))
        .map(|key| FieldViolation::new(key.clone(), MSG_UNRECOGNIZED_KEY))
        .collect();

    for field in fields {
        match map.get(field.name) {
            None | Some(Value::Null) if field.required => {
                violations.push(FieldViolation::new(field.name, MSG_REQUIRED));
            }
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => violations.push(FieldViolation::new(field.name, MSG_NOT_A_STRING)),
        }
    }

    violations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
