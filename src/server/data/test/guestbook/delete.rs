use super::*;

/// Tests deletion returns the entry as it was.
///
/// Expected: Ok(Some(entry)) then Ok(None)
#[tokio::test]
async fn returns_deleted_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry =
        factory::guestbook_entry::create_guestbook_entry_with_status(db, GuestbookStatus::Approved)
            .await?;

    let repo = GuestbookRepository::new(db);
    let deleted = repo.delete(entry.id).await?.unwrap();

    assert_eq!(deleted.id, entry.id);
    assert!(deleted.is_approved());
    assert!(repo.find_by_id(entry.id).await?.is_none());
    assert!(repo.delete(entry.id).await?.is_none());

    Ok(())
}
