use super::*;

/// Tests that a created coffee reads back identically.
///
/// Expected: Ok with equal name, brand, recommendations and flavor names
#[tokio::test]
async fn created_coffee_reads_back() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CoffeeService::new(db);
    let created = service
        .create(create_param(
            "Shipwreck Roast",
            "Buddy Brew",
            &["vanilla", "chocolate"],
        ))
        .await?;

    let found = service.get_by_id(created.id).await?;

    assert_eq!(found.name, created.name);
    assert_eq!(found.brand, created.brand);
    assert_eq!(found.recommendations, created.recommendations);
    assert_eq!(found.flavor_names(), created.flavor_names());

    Ok(())
}

/// Tests reading an unknown ID.
///
/// Expected: Err(AppError::NotFound) naming the ID
#[tokio::test]
async fn missing_coffee_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoffeeService::new(db).get_by_id(42).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Coffee #42 not found"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests paging through coffees.
///
/// Expected: Ok with at most `limit` coffees and an empty page past the end
#[tokio::test]
async fn pages_through_coffees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_coffee(db).await?;
    }

    let service = CoffeeService::new(db);

    let page = service.get_paginated(Pagination::new(Some(2), None)).await?;
    assert_eq!(page.len(), 2);

    let rest = service
        .get_paginated(Pagination::new(Some(2), Some(2)))
        .await?;
    assert_eq!(rest.len(), 1);

    let past_end = service
        .get_paginated(Pagination::new(Some(2), Some(3)))
        .await?;
    assert!(past_end.is_empty());

    Ok(())
}
