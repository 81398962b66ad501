use super::*;

/// Tests the maximum sort_order on an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JourneyRepository::new(db);

    assert_eq!(repo.max_sort_order().await?, None);

    Ok(())
}

/// Tests the maximum sort_order with rows present.
///
/// Expected: Ok(Some(7))
#[tokio::test]
async fn returns_highest_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::journey::create_journey_with(db, date(2020, 1, 1), 3).await?;
    factory::journey::create_journey_with(db, date(2020, 1, 1), 7).await?;

    let repo = JourneyRepository::new(db);

    assert_eq!(repo.max_sort_order().await?, Some(7));

    Ok(())
}
