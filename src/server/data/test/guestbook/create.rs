use super::*;

/// Tests new entries start pending and unmoderated.
///
/// Expected: status Pending, moderated_at None
#[tokio::test]
async fn stores_entry_as_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestbookRepository::new(db);
    let entry = repo
        .create(SignGuestbookParam {
            name: "Grandma".to_string(),
            message: "So proud of you two".to_string(),
        })
        .await?;

    assert_eq!(entry.status, GuestbookStatus::Pending);
    assert!(entry.moderated_at.is_none());

    Ok(())
}
