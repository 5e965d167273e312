use super::*;

/// Tests appending an event with a structured payload.
///
/// Expected: Ok with the payload stored verbatim
#[tokio::test]
async fn creates_event_with_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo
        .create(RecordEventParam::new(
            "coffee",
            "recommend_coffee",
            json!({ "coffeeId": 7, "tags": ["a", "b"] }),
        ))
        .await?;

    assert_eq!(event.event_type, "coffee");
    assert_eq!(event.name, "recommend_coffee");

    let stored = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(stored.payload, json!({ "coffeeId": 7, "tags": ["a", "b"] }));

    Ok(())
}
