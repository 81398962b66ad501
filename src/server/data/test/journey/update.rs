use super::*;

fn param(sort_order: Option<i32>) -> SaveJourneyParam {
    SaveJourneyParam {
        title: "Moved in together".to_string(),
        date: date(2022, 8, 1),
        description: "Boxes everywhere".to_string(),
        image_url: None,
        sort_order,
    }
}

/// Tests an update without sort_order keeps the entry's position.
///
/// Expected: sort_order unchanged
#[tokio::test]
async fn keeps_sort_order_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::journey::create_journey_with(db, date(2020, 1, 1), 5).await?;

    let repo = JourneyRepository::new(db);
    let updated = repo.update(entry.id, param(None)).await?.unwrap();

    assert_eq!(updated.title, "Moved in together");
    assert_eq!(updated.sort_order, 5);

    Ok(())
}

/// Tests an update with sort_order moves the entry.
///
/// Expected: sort_order replaced
#[tokio::test]
async fn replaces_sort_order_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::journey::create_journey_with(db, date(2020, 1, 1), 5).await?;

    let repo = JourneyRepository::new(db);
    let updated = repo.update(entry.id, param(Some(1))).await?.unwrap();

    assert_eq!(updated.sort_order, 1);
    assert!(repo.update(entry.id + 1, param(None)).await?.is_none());

    Ok(())
}
