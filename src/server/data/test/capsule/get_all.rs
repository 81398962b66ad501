use super::*;

/// Tests capsules are ordered by unlock time ascending.
///
/// Expected: soonest unlock first
#[tokio::test]
async fn orders_by_unlock_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageTeaser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later =
        factory::message_teaser::create_message_teaser_unlocking_at(db, now + Duration::days(10))
            .await?;
    let opened =
        factory::message_teaser::create_message_teaser_unlocking_at(db, now - Duration::days(1))
            .await?;
    let sooner =
        factory::message_teaser::create_message_teaser_unlocking_at(db, now + Duration::days(2))
            .await?;

    let repo = CapsuleRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![opened.id, sooner.id, later.id]);

    Ok(())
}
