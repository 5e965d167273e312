use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub name: String,
    #[schema(value_type = Object)]
    pub payload: Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    #[serde(rename = "type")]
    pub event_type: String,
    pub name: String,
    /// Stored verbatim; defaults to an empty object.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub payload: Option<Value>,
}

