//! Resolve-or-create of flavors by name.

use sea_orm::{ConnectionTrait, DbErr};
use std::collections::{HashMap, HashSet};

use crate::server::{data::flavor::FlavorRepository, model::coffee::Flavor};

pub struct FlavorService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlavorService<'a, C> {
    /// Creates a new FlavorService.
    ///
    /// # Arguments
    /// - `db` - Normally the open transaction of the coffee write that needs the flavors,
    ///   so flavor inserts and join rows commit together
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves flavor names to flavor rows, creating the ones that don't exist yet.
    ///
    /// Names are trimmed and de-duplicated first, so two mentions of the same name in
    /// one request converge on a single row. Existing flavors are fetched in one query;
    /// each remaining name is inserted.
    ///
    /// # Returns
    /// - `Ok(Vec<Flavor>)` - One flavor per distinct name, in first-mention order
    /// - `Err(DbErr)` - Database error; a unique violation here means a concurrent
    ///   request created the same flavor first
    pub async fn resolve_by_names(&self, names: &[String]) -> Result<Vec<Flavor>, DbErr> {
        let names = distinct_names(names);
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let repo = FlavorRepository::new(self.db);

        let mut existing: HashMap<String, Flavor> = repo
            .get_by_names(&names)
            .await?
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();

        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let flavor = match existing.remove(&name) {
                Some(flavor) => flavor,
                None => {
                    tracing::debug!("Creating flavor '{}'", name);
                    repo.create(name).await?
                }
            };
            resolved.push(flavor);
        }

        Ok(resolved)
    }
}

/// Trims names and drops blanks and repeats, keeping first-mention order.
pub fn distinct_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect()
}
