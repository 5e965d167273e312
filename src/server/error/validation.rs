use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// A single rejected input field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Malformed or missing input, carrying every rejected field at once.
///
/// Produced both by the request-shape extractor at the HTTP boundary and by
/// service-level input rules. Results in a 400 Bad Request listing each field.
#[derive(Error, Debug, Clone, PartialEq, Default)]
#[error("Validation failed for {} field(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rejected field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns `Ok(())` when nothing was rejected, otherwise the collected error.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Whether a violation was recorded for `field`.
    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Converts validation errors into a 400 Bad Request with field-level detail.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let fields = self
            .violations
            .into_iter()
            .map(|v| FieldErrorDto {
                field: v.field,
                message: v.message,
            })
            .collect();

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Validation failed".to_string(),
                fields,
            }),
        )
            .into_response()
    }
}
