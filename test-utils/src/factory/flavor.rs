//! Flavor factory for creating test flavor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flavors.
///
/// Flavor names are unique in the schema, so the default name carries a
/// counter suffix.
pub struct FlavorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> FlavorFactory<'a> {
    /// Creates a new FlavorFactory with name `"flavor {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("flavor {}", id),
        }
    }

    /// Sets the flavor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the flavor entity into the database.
    pub async fn build(self) -> Result<entity::flavor::Model, DbErr> {
        entity::flavor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flavor with a default unique name.
pub async fn create_flavor(db: &DatabaseConnection) -> Result<entity::flavor::Model, DbErr> {
    FlavorFactory::new(db).build().await
}
