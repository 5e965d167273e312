use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        coffee::{CoffeeChanges, CoffeeRepository, NewCoffee},
        event::EventRepository,
    },
    error::AppError,
    model::{
        coffee::{Coffee, CreateCoffeeParam, UpdateCoffeeParam},
        event::RecordEventParam,
        pagination::Pagination,
    },
    service::flavor::FlavorService,
};

/// Event type written when a coffee is recommended.
pub const RECOMMEND_EVENT_TYPE: &str = "coffee";
/// Event name written when a coffee is recommended.
pub const RECOMMEND_EVENT_NAME: &str = "recommend_coffee";

pub struct CoffeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoffeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a coffee and attaches its flavors, creating unknown flavors by name.
    ///
    /// Flavor inserts, the coffee insert and the join rows run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The new coffee with zero recommendations and its resolved flavors
    /// - `Err(AppError::ValidationErr)` - Blank name, brand or flavor name
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(&self, param: CreateCoffeeParam) -> Result<Coffee, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;

        let flavors = FlavorService::new(&txn)
            .resolve_by_names(&param.flavors)
            .await?;

        let repo = CoffeeRepository::new(&txn);
        let mut coffee = repo
            .create(NewCoffee {
                name: param.name,
                brand: param.brand,
            })
            .await?;

        let flavor_ids: Vec<i32> = flavors.iter().map(|f| f.id).collect();
        repo.set_flavors(coffee.id, &flavor_ids).await?;

        txn.commit().await?;

        coffee.flavors = flavors;

        tracing::info!("Created coffee {} ({})", coffee.id, coffee.name);

        Ok(coffee)
    }

    /// Gets a window of coffees ordered by ID, each with its flavors.
    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Vec<Coffee>, AppError> {
        Ok(CoffeeRepository::new(self.db)
            .get_paginated(pagination)
            .await?)
    }

    /// Gets a coffee with its flavors.
    ///
    /// # Returns
    /// - `Ok(Coffee)` - Coffee found
    /// - `Err(AppError::NotFound)` - No coffee with this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Coffee, AppError> {
        CoffeeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| coffee_not_found(id))
    }

    /// Applies a partial update.
    ///
    /// Only the fields present in `param` change. A present flavor list is resolved like
    /// on create and replaces the current flavor set. The existence check runs before
    /// anything else, so an unknown ID never creates flavors.
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The coffee as stored after the update
    /// - `Err(AppError::NotFound)` - No coffee with this ID
    /// - `Err(AppError::ValidationErr)` - A present field is blank
    pub async fn update(&self, param: UpdateCoffeeParam) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;
        let repo = CoffeeRepository::new(&txn);

        if !repo.exists(param.id).await? {
            return Err(coffee_not_found(param.id));
        }

        param.validate()?;

        repo.update(
            param.id,
            CoffeeChanges {
                name: param.name,
                brand: param.brand,
            },
        )
        .await?;

        if let Some(names) = param.flavors {
            let flavors = FlavorService::new(&txn).resolve_by_names(&names).await?;
            let flavor_ids: Vec<i32> = flavors.iter().map(|f| f.id).collect();
            repo.set_flavors(param.id, &flavor_ids).await?;
        }

        let coffee = repo.get_by_id(param.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Coffee {} not found after update", param.id))
        })?;

        txn.commit().await?;

        tracing::info!("Updated coffee {}", coffee.id);

        Ok(coffee)
    }

    /// Deletes a coffee and its flavor links, keeping the flavors themselves.
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The coffee as it was before removal
    /// - `Err(AppError::NotFound)` - No coffee with this ID
    pub async fn delete(&self, id: i32) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;
        let repo = CoffeeRepository::new(&txn);

        let coffee = repo.get_by_id(id).await?.ok_or_else(|| coffee_not_found(id))?;

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted coffee {}", id);

        Ok(coffee)
    }

    /// Adds a recommendation and records a `recommend_coffee` event for it.
    ///
    /// The increment and the event insert commit together or not at all.
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The coffee with its incremented count
    /// - `Err(AppError::NotFound)` - No coffee with this ID
    pub async fn recommend(&self, id: i32) -> Result<Coffee, AppError> {
        let txn = self.db.begin().await?;
        let repo = CoffeeRepository::new(&txn);

        if !repo.exists(id).await? {
            return Err(coffee_not_found(id));
        }

        repo.increment_recommendations(id).await?;

        EventRepository::new(&txn)
            .create(RecordEventParam::new(
                RECOMMEND_EVENT_TYPE,
                RECOMMEND_EVENT_NAME,
                json!({ "coffeeId": id }),
            ))
            .await?;

        let coffee = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Coffee {} not found after recommendation", id))
        })?;

        txn.commit().await?;

        tracing::info!(
            "Recommended coffee {} ({} recommendations)",
            id,
            coffee.recommendations
        );

        Ok(coffee)
    }
}

fn coffee_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Coffee #{} not found", id))
}
