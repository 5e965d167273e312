//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep default names unique across factories, which matters for
/// flavors since their name column is unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links an existing coffee to an existing flavor through the join table.
///
/// # Arguments
/// - `db` - Database connection
/// - `coffee_id` - ID of the coffee
/// - `flavor_id` - ID of the flavor
///
/// # Returns
/// - `Ok(entity::coffee_flavor::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate link)
pub async fn link_flavor(
    db: &DatabaseConnection,
    coffee_id: i32,
    flavor_id: i32,
) -> Result<entity::coffee_flavor::Model, DbErr> {
    entity::coffee_flavor::ActiveModel {
        coffee_id: ActiveValue::Set(coffee_id),
        flavor_id: ActiveValue::Set(flavor_id),
    }
    .insert(db)
    .await
}

/// Creates a coffee with default values linked to newly created flavors.
///
/// One flavor row is created per name, so names must not already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `flavor_names` - Names of the flavors to create and link
///
/// # Returns
/// - `Ok((coffee, flavors))` - The coffee and its flavors in input order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_coffee_with_flavors(
    db: &DatabaseConnection,
    flavor_names: &[&str],
) -> Result<(entity::coffee::Model, Vec<entity::flavor::Model>), DbErr> {
    let coffee = crate::factory::coffee::create_coffee(db).await?;

    let mut flavors = Vec::with_capacity(flavor_names.len());
    for name in flavor_names {
        let flavor = crate::factory::flavor::FlavorFactory::new(db)
            .name(*name)
            .build()
            .await?;
        link_flavor(db, coffee.id, flavor.id).await?;
        flavors.push(flavor);
    }

    Ok((coffee, flavors))
}
