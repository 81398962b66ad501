use super::*;

/// Tests entries are ordered by sort_order, then date, then id.
///
/// Expected: lower sort_order first; equal sort_order falls back to date
#[tokio::test]
async fn orders_by_sort_order_then_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Journey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let last = factory::journey::create_journey_with(db, date(2019, 1, 1), 2).await?;
    let later_date = factory::journey::create_journey_with(db, date(2021, 1, 1), 1).await?;
    let earlier_date = factory::journey::create_journey_with(db, date(2020, 1, 1), 1).await?;
    let first = factory::journey::create_journey_with(db, date(2022, 1, 1), 0).await?;

    let repo = JourneyRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|j| j.id).collect();

    assert_eq!(ids, vec![first.id, earlier_date.id, later_date.id, last.id]);

    Ok(())
}
