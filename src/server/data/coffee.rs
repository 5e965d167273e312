//! Coffee data repository for database operations.
//!
//! This module provides the `CoffeeRepository` for managing coffee rows and their links
//! to flavors through the `coffee_flavor` join table. Returned coffees always carry their
//! current flavor set, loaded with `FlavorRepository::get_by_coffee_ids`.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::flavor::FlavorRepository,
    model::{coffee::Coffee, pagination::Pagination},
};

/// Column values for a new coffee row.
#[derive(Debug, Clone)]
pub struct NewCoffee {
    pub name: String,
    pub brand: String,
}

/// Column changes for an existing coffee row; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct CoffeeChanges {
    pub name: Option<String>,
    pub brand: Option<String>,
}

/// Repository providing database operations for coffee management.
pub struct CoffeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoffeeRepository<'a, C> {
    /// Creates a new CoffeeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection pool or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new coffee with zero recommendations and no flavors.
    ///
    /// Flavors are attached separately with `set_flavors`.
    ///
    /// # Returns
    /// - `Ok(Coffee)` - The created coffee with generated ID and an empty flavor set
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, new: NewCoffee) -> Result<Coffee, DbErr> {
        let entity = entity::coffee::ActiveModel {
            name: ActiveValue::Set(new.name),
            brand: ActiveValue::Set(new.brand),
            recommendations: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Coffee::from_entity(entity, Vec::new()))
    }

    /// Gets a coffee by ID together with its flavors.
    ///
    /// # Returns
    /// - `Ok(Some(Coffee))` - Coffee found
    /// - `Ok(None)` - No coffee with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Coffee>, DbErr> {
        let Some(coffee) = entity::prelude::Coffee::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut flavors = FlavorRepository::new(self.db)
            .get_by_coffee_ids(&[coffee.id])
            .await?;

        let mut result = Coffee::from_entity(coffee, Vec::new());
        result.flavors = flavors.remove(&result.id).unwrap_or_default();

        Ok(Some(result))
    }

    /// Gets a window of coffees ordered by ID, each with its flavors.
    ///
    /// An offset past the last row yields an empty vector.
    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Vec<Coffee>, DbErr> {
        let coffees = entity::prelude::Coffee::find()
            .order_by_asc(entity::coffee::Column::Id)
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = coffees.iter().map(|c| c.id).collect();
        let mut flavors = FlavorRepository::new(self.db)
            .get_by_coffee_ids(&ids)
            .await?;

        Ok(coffees
            .into_iter()
            .map(|c| {
                let coffee_flavors = flavors.remove(&c.id).unwrap_or_default();
                let mut coffee = Coffee::from_entity(c, Vec::new());
                coffee.flavors = coffee_flavors;
                coffee
            })
            .collect())
    }

    /// Checks whether a coffee with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Coffee::find()
            .filter(entity::coffee::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the present column changes to a coffee.
    ///
    /// Flavor links are not touched.
    ///
    /// # Returns
    /// - `Ok(())` - Changes applied (a no-op when `changes` is empty)
    /// - `Err(DbErr::RecordNotFound)` - No coffee exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, changes: CoffeeChanges) -> Result<(), DbErr> {
        let coffee = entity::prelude::Coffee::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Coffee with id {} not found",
                id
            )))?;

        if changes.name.is_none() && changes.brand.is_none() {
            return Ok(());
        }

        let mut active_model: entity::coffee::ActiveModel = coffee.into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(brand) = changes.brand {
            active_model.brand = ActiveValue::Set(brand);
        }

        active_model.update(self.db).await?;

        Ok(())
    }

    /// Adds one to a coffee's recommendation count.
    ///
    /// The increment is a single `UPDATE ... SET recommendations = recommendations + 1`,
    /// so concurrent calls never overwrite each other.
    ///
    /// # Returns
    /// - `Ok(())` - Count incremented
    /// - `Err(DbErr::RecordNotFound)` - No coffee exists with the specified ID
    pub async fn increment_recommendations(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::Coffee::update_many()
            .filter(entity::coffee::Column::Id.eq(id))
            .col_expr(
                entity::coffee::Column::Recommendations,
                Expr::col(entity::coffee::Column::Recommendations).add(1),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Coffee with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Replaces a coffee's flavor links with exactly `flavor_ids`.
    ///
    /// Only join rows are written; flavor rows are never created or deleted here.
    /// Duplicate IDs in `flavor_ids` are linked once.
    pub async fn set_flavors(&self, coffee_id: i32, flavor_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::CoffeeFlavor::delete_many()
            .filter(entity::coffee_flavor::Column::CoffeeId.eq(coffee_id))
            .exec(self.db)
            .await?;

        let mut linked: Vec<i32> = Vec::with_capacity(flavor_ids.len());
        for &flavor_id in flavor_ids {
            if linked.contains(&flavor_id) {
                continue;
            }

            entity::coffee_flavor::ActiveModel {
                coffee_id: ActiveValue::Set(coffee_id),
                flavor_id: ActiveValue::Set(flavor_id),
            }
            .insert(self.db)
            .await?;

            linked.push(flavor_id);
        }

        Ok(())
    }

    /// Deletes a coffee and its flavor links.
    ///
    /// Linked flavors are kept even if no other coffee uses them.
    ///
    /// # Returns
    /// - `Ok(true)` - Coffee deleted
    /// - `Ok(false)` - No coffee with this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::CoffeeFlavor::delete_many()
            .filter(entity::coffee_flavor::Column::CoffeeId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Coffee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
