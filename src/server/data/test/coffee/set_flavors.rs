use super::*;

/// Tests replacing a coffee's flavor links.
///
/// Expected: Ok with only the new flavors linked and the old flavor row kept
#[tokio::test]
async fn replaces_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, old) = factory::helpers::create_coffee_with_flavors(db, &["chocolate"]).await?;
    let vanilla = factory::flavor::FlavorFactory::new(db)
        .name("vanilla")
        .build()
        .await?;

    let repo = CoffeeRepository::new(db);
    repo.set_flavors(coffee.id, &[vanilla.id]).await?;

    let updated = repo.get_by_id(coffee.id).await?.unwrap();
    assert_eq!(updated.flavor_names(), vec!["vanilla"]);

    let kept = entity::prelude::Flavor::find_by_id(old[0].id).one(db).await?;
    assert!(kept.is_some());

    Ok(())
}

/// Tests that duplicate IDs are linked once.
///
/// Expected: Ok with a single join row
#[tokio::test]
async fn links_duplicate_ids_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = factory::create_coffee(db).await?;
    let flavor = factory::create_flavor(db).await?;

    CoffeeRepository::new(db)
        .set_flavors(coffee.id, &[flavor.id, flavor.id])
        .await?;

    assert_eq!(entity::prelude::CoffeeFlavor::find().count(db).await?, 1);

    Ok(())
}

/// Tests clearing every link with an empty list.
///
/// Expected: Ok with no flavors on the coffee
#[tokio::test]
async fn empty_list_detaches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, _) =
        factory::helpers::create_coffee_with_flavors(db, &["chocolate", "vanilla"]).await?;

    let repo = CoffeeRepository::new(db);
    repo.set_flavors(coffee.id, &[]).await?;

    let updated = repo.get_by_id(coffee.id).await?.unwrap();
    assert!(updated.flavors.is_empty());
    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 2);

    Ok(())
}
