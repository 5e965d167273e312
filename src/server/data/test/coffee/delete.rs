use super::*;

/// Tests deleting a coffee with flavors.
///
/// Verifies that the coffee and its join rows are removed while the flavor rows
/// stay available to other coffees.
///
/// Expected: Ok(true) with flavors kept
#[tokio::test]
async fn deletes_coffee_and_keeps_flavors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, _) =
        factory::helpers::create_coffee_with_flavors(db, &["chocolate", "vanilla"]).await?;

    let repo = CoffeeRepository::new(db);
    let deleted = repo.delete(coffee.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(coffee.id).await?.is_none());
    assert_eq!(entity::prelude::CoffeeFlavor::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 2);

    Ok(())
}

/// Tests deleting an ID with no coffee.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_coffee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CoffeeRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
