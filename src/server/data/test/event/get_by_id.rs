use super::*;

/// Tests loading an event created by the factory.
///
/// Expected: Ok(Some) for an existing ID and Ok(None) otherwise
#[tokio::test]
async fn finds_event_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .name("brew_started")
        .payload(json!({ "temperature": 93 }))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let found = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(found.name, "brew_started");
    assert_eq!(found.payload, json!({ "temperature": 93 }));
    assert!(repo.get_by_id(created.id + 1).await?.is_none());

    Ok(())
}
