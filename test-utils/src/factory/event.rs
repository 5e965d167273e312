//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test events with customizable fields.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    event_type: String,
    name: String,
    payload: Value,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - type: `"coffee"`
    /// - name: `"event_{id}"`
    /// - payload: `{}`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_type: "coffee".to_string(),
            name: format!("event_{}", id),
            payload: json!({}),
        }
    }

    /// Sets the event type.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Sets the event name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the event payload.
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            event_type: ActiveValue::Set(self.event_type),
            name: ActiveValue::Set(self.name),
            payload: ActiveValue::Set(self.payload),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
