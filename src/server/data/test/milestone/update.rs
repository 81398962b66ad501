use super::*;

/// Tests updating and deleting a milestone.
///
/// Expected: updated fields persisted; deleted milestone gone
#[tokio::test]
async fn updates_and_deletes_milestone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Milestone)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let milestone = factory::create_milestone(db).await?;

    let repo = MilestoneRepository::new(db);
    let updated = repo
        .update(
            milestone.id,
            SaveMilestoneParam {
                title: "Engagement".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 12, 24).unwrap(),
                description: Some("We said yes".to_string()),
                icon: Some("ring".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Engagement");
    assert_eq!(updated.icon.as_deref(), Some("ring"));

    assert!(repo.delete(milestone.id).await?);
    assert!(repo.find_by_id(milestone.id).await?.is_none());
    assert!(!repo.delete(milestone.id).await?);

    Ok(())
}
