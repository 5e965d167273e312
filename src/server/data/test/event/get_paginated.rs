use super::*;

/// Tests listing events in insertion order.
///
/// Expected: Ok with events ordered by ID and windowed by offset
#[tokio::test]
async fn lists_events_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    let third = factory::create_event(db).await?;

    let repo = EventRepository::new(db);

    let all = repo.get_paginated(Pagination::default()).await?;
    let ids: Vec<i32> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    let tail = repo.get_paginated(Pagination::new(None, Some(2))).await?;
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].id, third.id);

    Ok(())
}
