use super::*;

/// Tests approving an entry stamps moderated_at.
///
/// Expected: status Approved with moderated_at set
#[tokio::test]
async fn approving_sets_moderated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::create_guestbook_entry(db).await?;

    let repo = GuestbookRepository::new(db);
    let approved = repo
        .set_status(entry.id, GuestbookStatus::Approved)
        .await?
        .unwrap();

    assert_eq!(approved.status, GuestbookStatus::Approved);
    assert!(approved.moderated_at.is_some());

    Ok(())
}

/// Tests returning an entry to pending clears moderated_at.
///
/// Expected: status Pending with moderated_at None
#[tokio::test]
async fn resetting_to_pending_clears_moderated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry =
        factory::guestbook_entry::create_guestbook_entry_with_status(db, GuestbookStatus::Rejected)
            .await?;

    let repo = GuestbookRepository::new(db);
    let rejected = repo
        .set_status(entry.id, GuestbookStatus::Rejected)
        .await?
        .unwrap();
    assert!(rejected.moderated_at.is_some());

    let pending = repo
        .set_status(entry.id, GuestbookStatus::Pending)
        .await?
        .unwrap();

    assert_eq!(pending.status, GuestbookStatus::Pending);
    assert!(pending.moderated_at.is_none());

    Ok(())
}

/// Tests moderating a missing entry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestbookRepository::new(db);

    assert!(repo
        .set_status(1, GuestbookStatus::Approved)
        .await?
        .is_none());

    Ok(())
}
