//! Event domain models and parameters.

use serde_json::Value;

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::{
        error::validation::ValidationError,
        middleware::validation::{FieldKind, FieldRule, RequestShape},
    },
};

/// An appended audit record. The payload is opaque and returned verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub event_type: String,
    pub name: String,
    pub payload: Value,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            event_type: entity.event_type,
            name: entity.name,
            payload: entity.payload,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            event_type: self.event_type,
            name: self.name,
            payload: self.payload,
        }
    }
}

/// Parameters for recording an event.
#[derive(Debug, Clone)]
pub struct RecordEventParam {
    pub event_type: String,
    pub name: String,
    pub payload: Value,
}

impl RecordEventParam {
    pub fn new(event_type: impl Into<String>, name: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            name: name.into(),
            payload,
        }
    }

    /// Converts the request DTO, defaulting a missing payload to `{}`.
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            event_type: dto.event_type,
            name: dto.name,
            payload: dto
                .payload
                .unwrap_or_else(|| Value::Object(Default::default())),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.event_type.trim().is_empty() {
            errors.push("type", "type should not be empty");
        }
        if self.name.trim().is_empty() {
            errors.push("name", "name should not be empty");
        }
        errors.into_result()
    }
}

impl RequestShape for CreateEventDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("type", FieldKind::String),
        FieldRule::required("name", FieldKind::String),
        FieldRule::optional("payload", FieldKind::Object),
    ];
}
