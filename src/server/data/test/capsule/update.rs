use super::*;

/// Tests updating a capsule's content and unlock time.
///
/// Expected: Ok(Some(Capsule)) with new values
#[tokio::test]
async fn updates_capsule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageTeaser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let capsule = factory::create_message_teaser(db).await?;
    let unlock_at = Utc::now() + Duration::days(100);

    let repo = CapsuleRepository::new(db);
    let updated = repo
        .update(
            capsule.id,
            SaveCapsuleParam {
                title: "Read on our anniversary".to_string(),
                teaser: "A little surprise".to_string(),
                content: "Dinner reservations at eight".to_string(),
                unlock_at,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Read on our anniversary");
    assert_eq!(updated.content, "Dinner reservations at eight");
    assert_eq!(updated.unlock_at.timestamp(), unlock_at.timestamp());

    assert!(repo.delete(capsule.id).await?);
    assert!(repo.find_by_id(capsule.id).await?.is_none());

    Ok(())
}
