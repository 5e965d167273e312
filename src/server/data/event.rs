use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::{
    event::{Event, RecordEventParam},
    pagination::Pagination,
};

/// Append-only access to the event log; events are never updated or deleted.
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an event and returns it with its generated ID.
    pub async fn create(&self, param: RecordEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            event_type: ActiveValue::Set(param.event_type),
            name: ActiveValue::Set(param.name),
            payload: ActiveValue::Set(param.payload),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets a window of events in insertion (ID) order.
    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }
}
