use super::*;

/// Tests reordering assigns sort_order by position in the id list.
///
/// Expected: entries come back in the requested order with sort_order 0..n
#[tokio::test]
async fn assigns_sort_order_by_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::journey::create_journey_with(db, date(2020, 1, 1), 0).await?;
    let b = factory::journey::create_journey_with(db, date(2020, 1, 1), 1).await?;
    let c = factory::journey::create_journey_with(db, date(2020, 1, 1), 2).await?;

    let repo = JourneyRepository::new(db);
    repo.reorder(&[c.id, a.id, b.id]).await?;

    let entries = repo.get_all().await?;
    let ids: Vec<i32> = entries.iter().map(|j| j.id).collect();
    let orders: Vec<i32> = entries.iter().map(|j| j.sort_order).collect();

    assert_eq!(ids, vec![c.id, a.id, b.id]);
    assert_eq!(orders, vec![0, 1, 2]);

    Ok(())
}

/// Tests counting which of the given ids exist.
///
/// Expected: only existing ids are counted
#[tokio::test]
async fn counts_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::journey::create_journey(db).await?;
    let b = factory::journey::create_journey(db).await?;

    let repo = JourneyRepository::new(db);

    assert_eq!(repo.count_existing(&[a.id, b.id, 999]).await?, 2);

    Ok(())
}
