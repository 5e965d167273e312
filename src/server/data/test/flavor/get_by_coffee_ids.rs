use super::*;

/// Tests grouping flavors by coffee, including a flavor shared by two coffees.
///
/// Expected: Ok with one entry per coffee that has flavors
#[tokio::test]
async fn groups_flavors_by_coffee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_coffee(db).await?;
    let second = factory::create_coffee(db).await?;
    let bare = factory::create_coffee(db).await?;
    let chocolate = factory::flavor::FlavorFactory::new(db)
        .name("chocolate")
        .build()
        .await?;
    let vanilla = factory::flavor::FlavorFactory::new(db)
        .name("vanilla")
        .build()
        .await?;

    factory::helpers::link_flavor(db, first.id, vanilla.id).await?;
    factory::helpers::link_flavor(db, first.id, chocolate.id).await?;
    factory::helpers::link_flavor(db, second.id, chocolate.id).await?;

    let result = FlavorRepository::new(db)
        .get_by_coffee_ids(&[first.id, second.id, bare.id])
        .await?;

    assert_eq!(result.len(), 2);

    let first_ids: Vec<i32> = result[&first.id].iter().map(|f| f.id).collect();
    assert_eq!(first_ids, vec![chocolate.id, vanilla.id]);

    let second_ids: Vec<i32> = result[&second.id].iter().map(|f| f.id).collect();
    assert_eq!(second_ids, vec![chocolate.id]);

    assert!(!result.contains_key(&bare.id));

    Ok(())
}
