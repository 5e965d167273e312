//! Request-shape validation for JSON bodies.
//!
//! `ValidatedJson<T>` replaces `axum::Json<T>` on write endpoints. The body is parsed
//! as a JSON object and checked against the rules `T` declares through `RequestShape`
//! before deserialization:
//!
//! - fields not declared by `T` are rejected
//! - required fields must be present and non-null
//! - primitives are type-checked, with numbers and booleans coerced to strings where a
//!   string is expected
//!
//! Every violation is collected, so a single 400 response lists all rejected fields
//! instead of stopping at the first one. Handlers only ever see well-shaped input.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::server::error::{validation::ValidationError, AppError};

/// Expected JSON type of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    StringArray,
    Object,
}

/// Declares one accepted field of a request body.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Request DTOs that declare the exact set of fields they accept.
pub trait RequestShape: DeserializeOwned {
    const FIELDS: &'static [FieldRule];
}

/// JSON body extractor that enforces the `RequestShape` of `T`.
///
/// # Rejections
/// - `AppError::JsonRejection` - Body is not valid JSON or lacks a JSON `Content-Type`
/// - `AppError::BadRequest` - Body is not a JSON object
/// - `AppError::ValidationErr` - One or more fields violate the declared shape
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: RequestShape,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut value) = Json::<Value>::from_request(req, state).await?;

        check_shape(&mut value, T::FIELDS)?;

        let payload = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

        Ok(Self(payload))
    }
}

/// Validates and coerces `value` in place against `rules`.
///
/// # Returns
/// - `Ok(())` - Body matches the declared shape (after coercion)
/// - `Err(AppError::BadRequest)` - Body is not a JSON object
/// - `Err(AppError::ValidationErr)` - Every rejected field
pub fn check_shape(value: &mut Value, rules: &[FieldRule]) -> Result<(), AppError> {
    let Value::Object(fields) = value else {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let mut errors = ValidationError::new();

    // Unknown fields first, in the order the caller sent them
    for key in fields.keys() {
        if !rules.iter().any(|rule| rule.name == key) {
            errors.push(key.clone(), format!("property {} should not exist", key));
        }
    }

    for rule in rules {
        check_field(fields, rule, &mut errors);
    }

    errors.into_result().map_err(Into::into)
}

fn check_field(fields: &mut Map<String, Value>, rule: &FieldRule, errors: &mut ValidationError) {
    let value = match fields.get_mut(rule.name) {
        None | Some(Value::Null) => {
            if rule.required {
                errors.push(rule.name, format!("{} is required", rule.name));
            } else {
                fields.remove(rule.name);
            }
            return;
        }
        Some(value) => value,
    };

    match rule.kind {
        FieldKind::String => {
            if !coerce_to_string(value) {
                errors.push(rule.name, format!("{} must be a string", rule.name));
            }
        }
        FieldKind::StringArray => {
            let valid = match value {
                Value::Array(items) => items.iter_mut().all(coerce_to_string),
                _ => false,
            };
            if !valid {
                errors.push(
                    rule.name,
                    format!("{} must be an array of strings", rule.name),
                );
            }
        }
        FieldKind::Object => {
            if !value.is_object() {
                errors.push(rule.name, format!("{} must be an object", rule.name));
            }
        }
    }
}

/// Converts numbers and booleans to their string form.
///
/// Returns whether `value` is a string afterwards.
fn coerce_to_string(value: &mut Value) -> bool {
    let coerced = match value {
        Value::String(_) => return true,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return false,
    };
    *value = Value::String(coerced);
    true
}
