use super::*;

/// Tests creating a coffee whose flavors do not exist yet.
///
/// Expected: Ok with zero recommendations and one new flavor per name
#[tokio::test]
async fn creates_coffee_and_missing_flavors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = CoffeeService::new(db)
        .create(create_param(
            "Shipwreck Roast",
            "Buddy Brew",
            &["chocolate", "vanilla"],
        ))
        .await?;

    assert_eq!(coffee.name, "Shipwreck Roast");
    assert_eq!(coffee.brand, "Buddy Brew");
    assert_eq!(coffee.recommendations, 0);
    assert_eq!(coffee.flavor_names(), vec!["chocolate", "vanilla"]);
    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 2);

    Ok(())
}

/// Tests that flavors are resolved by name across coffees.
///
/// Creating a second coffee that mentions an existing flavor must link the
/// existing row instead of inserting another one.
///
/// Expected: Ok with "chocolate" stored once and shared by both coffees
#[tokio::test]
async fn reuses_existing_flavors_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CoffeeService::new(db);
    let first = service
        .create(create_param("A", "Buddy Brew", &["chocolate"]))
        .await?;
    let second = service
        .create(create_param("B", "Nescafe", &["chocolate", "caramel"]))
        .await?;

    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 2);

    let shared = first.flavors[0].id;
    assert!(second.flavors.iter().any(|f| f.id == shared));

    Ok(())
}

/// Tests that repeated names in one request link a single flavor.
///
/// Expected: Ok with one flavor attached
#[tokio::test]
async fn collapses_repeated_flavor_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = CoffeeService::new(db)
        .create(create_param(
            "Shipwreck Roast",
            "Buddy Brew",
            &["chocolate", " chocolate "],
        ))
        .await?;

    assert_eq!(coffee.flavor_names(), vec!["chocolate"]);
    assert_eq!(entity::prelude::CoffeeFlavor::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a coffee without flavors.
///
/// Expected: Ok with an empty flavor set
#[tokio::test]
async fn creates_coffee_without_flavors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = CoffeeService::new(db)
        .create(create_param("Plain", "Nescafe", &[]))
        .await?;

    assert!(coffee.flavors.is_empty());

    Ok(())
}

/// Tests that blank input is rejected before anything is written.
///
/// Expected: Err(AppError::ValidationErr) with no rows stored
#[tokio::test]
async fn rejects_blank_fields_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoffeeService::new(db)
        .create(create_param(" ", "Buddy Brew", &["chocolate"]))
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => assert!(err.has_field("name")),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(entity::prelude::Coffee::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed join-row write rolls back the flavor and coffee inserts.
///
/// The schema lacks the join table, so linking flavors fails after the flavor
/// and the coffee have been inserted in the same transaction.
///
/// Expected: Err(AppError::DbErr) with no flavor and no coffee stored
#[tokio::test]
async fn failed_flavor_link_rolls_back_create() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coffee)
        .with_table(entity::prelude::Flavor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoffeeService::new(db)
        .create(create_param("Shipwreck Roast", "Buddy Brew", &["chocolate"]))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Coffee::find().count(db).await?, 0);

    Ok(())
}
