//! Flavor data repository.
//!
//! Flavors are looked up by their natural key, the name. The repository does no
//! de-duplication of its own; resolving a list of names to flavors (reuse or create)
//! is a service concern built from `get_by_names` and `create`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::coffee::Flavor;

pub struct FlavorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlavorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new flavor.
    ///
    /// # Returns
    /// - `Ok(Flavor)` - The created flavor with generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation if a flavor with
    ///   this name was inserted concurrently
    pub async fn create(&self, name: String) -> Result<Flavor, DbErr> {
        let entity = entity::flavor::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flavor::from_entity(entity))
    }

    /// Gets the flavor with exactly this name, if any.
    #[cfg(test)]
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Flavor>, DbErr> {
        let entity = entity::prelude::Flavor::find()
            .filter(entity::flavor::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Flavor::from_entity))
    }

    /// Gets every existing flavor whose name is in `names`.
    ///
    /// Names with no matching flavor are simply absent from the result.
    pub async fn get_by_names(&self, names: &[String]) -> Result<Vec<Flavor>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Flavor::find()
            .filter(entity::flavor::Column::Name.is_in(names.iter().cloned()))
            .order_by_asc(entity::flavor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flavor::from_entity).collect())
    }

    /// Gets the flavors attached to each of the given coffees.
    ///
    /// Coffees without flavors have no entry in the returned map. Flavors are ordered
    /// by ID within each coffee.
    pub async fn get_by_coffee_ids(
        &self,
        coffee_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Flavor>>, DbErr> {
        if coffee_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::CoffeeFlavor::find()
            .filter(entity::coffee_flavor::Column::CoffeeId.is_in(coffee_ids.iter().copied()))
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        // Fetch all linked flavors in one query
        let flavor_ids: Vec<i32> = links.iter().map(|l| l.flavor_id).collect();
        let flavors_map: HashMap<i32, entity::flavor::Model> = entity::prelude::Flavor::find()
            .filter(entity::flavor::Column::Id.is_in(flavor_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| (f.id, f))
            .collect();

        let mut result: HashMap<i32, Vec<Flavor>> = HashMap::new();
        for link in links {
            if let Some(flavor) = flavors_map.get(&link.flavor_id) {
                result
                    .entry(link.coffee_id)
                    .or_default()
                    .push(Flavor::from_entity(flavor.clone()));
            }
        }

        for flavors in result.values_mut() {
            flavors.sort_by_key(|f| f.id);
        }

        Ok(result)
    }
}
