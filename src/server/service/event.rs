use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::{
        event::{Event, RecordEventParam},
        pagination::Pagination,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an event; the payload is stored as given.
    ///
    /// # Returns
    /// - `Ok(Event)` - The stored event, including its generated ID
    /// - `Err(AppError::ValidationErr)` - `type` or `name` is blank
    pub async fn record(&self, param: RecordEventParam) -> Result<Event, AppError> {
        param.validate()?;

        let event = EventRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Recorded event {} ({}/{})",
            event.id,
            event.event_type,
            event.name
        );

        Ok(event)
    }

    /// Gets an event by ID, or `NotFound`.
    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event #{} not found", id)))
    }

    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_paginated(pagination)
            .await?)
    }
}
