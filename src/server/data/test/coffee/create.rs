use super::*;

/// Tests creating a coffee row.
///
/// Verifies that the repository stores name and brand, starts the recommendation
/// count at zero and returns the coffee without flavors.
///
/// Expected: Ok with coffee created
#[tokio::test]
async fn creates_coffee_with_zero_recommendations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoffeeRepository::new(db);
    let coffee = repo
        .create(NewCoffee {
            name: "Shipwreck Roast".to_string(),
            brand: "Buddy Brew".to_string(),
        })
        .await?;

    assert_eq!(coffee.name, "Shipwreck Roast");
    assert_eq!(coffee.brand, "Buddy Brew");
    assert_eq!(coffee.recommendations, 0);
    assert!(coffee.flavors.is_empty());

    let stored = entity::prelude::Coffee::find_by_id(coffee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Shipwreck Roast");

    Ok(())
}

/// Tests that coffee names are not unique.
///
/// Expected: Ok with two distinct rows sharing a name
#[tokio::test]
async fn allows_duplicate_coffee_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoffeeRepository::new(db);
    let first = repo
        .create(NewCoffee {
            name: "House Blend".to_string(),
            brand: "Buddy Brew".to_string(),
        })
        .await?;
    let second = repo
        .create(NewCoffee {
            name: "House Blend".to_string(),
            brand: "Nescafe".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Coffee::find().count(db).await?, 2);

    Ok(())
}
