use super::*;

/// Tests milestones are returned earliest date first.
///
/// Expected: ascending by date
#[tokio::test]
async fn orders_by_date_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Milestone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later =
        factory::milestone::create_milestone_on(db, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .await?;
    let earlier =
        factory::milestone::create_milestone_on(db, NaiveDate::from_ymd_opt(2019, 6, 15).unwrap())
            .await?;

    let repo = MilestoneRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
