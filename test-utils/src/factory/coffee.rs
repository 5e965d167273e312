//! Coffee factory for creating test coffee entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test coffees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::coffee::CoffeeFactory;
///
/// let coffee = CoffeeFactory::new(&db)
///     .name("Shipwreck Roast")
///     .brand("Buddy Brew")
///     .recommendations(3)
///     .build()
///     .await?;
/// ```
pub struct CoffeeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    brand: String,
    recommendations: i32,
}

impl<'a> CoffeeFactory<'a> {
    /// Creates a new CoffeeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Coffee {id}"` where id is auto-incremented
    /// - brand: `"Buddy Brew"`
    /// - recommendations: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Coffee {}", id),
            brand: "Buddy Brew".to_string(),
            recommendations: 0,
        }
    }

    /// Sets the coffee name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the coffee brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the recommendation count.
    pub fn recommendations(mut self, recommendations: i32) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Builds and inserts the coffee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::coffee::Model)` - Created coffee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::coffee::Model, DbErr> {
        entity::coffee::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            brand: ActiveValue::Set(self.brand),
            recommendations: ActiveValue::Set(self.recommendations),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coffee with default values.
///
/// Shorthand for `CoffeeFactory::new(db).build().await`.
pub async fn create_coffee(db: &DatabaseConnection) -> Result<entity::coffee::Model, DbErr> {
    CoffeeFactory::new(db).build().await
}
