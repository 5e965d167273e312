use super::*;

/// Tests that pagination windows are ordered by ID.
///
/// Expected: Ok with the second and third coffee for offset 1, limit 2
#[tokio::test]
async fn returns_window_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::create_coffee(db).await?.id);
    }

    let result = CoffeeRepository::new(db)
        .get_paginated(Pagination::new(Some(2), Some(1)))
        .await?;

    let result_ids: Vec<i32> = result.iter().map(|c| c.id).collect();
    assert_eq!(result_ids, vec![ids[1], ids[2]]);

    Ok(())
}

/// Tests that every coffee in a page carries its own flavors.
///
/// Expected: Ok with flavors attached per coffee and an empty set for a bare coffee
#[tokio::test]
async fn attaches_flavors_per_coffee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_coffee_with_flavors(db, &["chocolate"]).await?;
    factory::create_coffee(db).await?;
    factory::helpers::create_coffee_with_flavors(db, &["cherry", "almond"]).await?;

    let result = CoffeeRepository::new(db)
        .get_paginated(Pagination::default())
        .await?;

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].flavor_names(), vec!["chocolate"]);
    assert!(result[1].flavors.is_empty());
    assert_eq!(result[2].flavor_names(), vec!["almond", "cherry"]);

    Ok(())
}

/// Tests an offset past the last coffee.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_offset_exceeds_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_coffee(db).await?;
    factory::create_coffee(db).await?;

    let result = CoffeeRepository::new(db)
        .get_paginated(Pagination::new(Some(10), Some(5)))
        .await?;

    assert!(result.is_empty());

    Ok(())
}
