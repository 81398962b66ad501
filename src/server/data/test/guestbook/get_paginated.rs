use super::*;

/// Tests filtering by status.
///
/// Expected: only approved entries when filtering; every entry otherwise
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let approved =
        factory::guestbook_entry::create_guestbook_entry_with_status(db, GuestbookStatus::Approved)
            .await?;
    factory::guestbook_entry::create_guestbook_entry_with_status(db, GuestbookStatus::Rejected)
        .await?;
    factory::create_guestbook_entry(db).await?;

    let repo = GuestbookRepository::new(db);

    let public = repo
        .get_paginated(Some(GuestbookStatus::Approved), FIRST_PAGE)
        .await?;
    assert_eq!(public.total, 1);
    assert_eq!(public.items[0].id, approved.id);

    let all = repo.get_paginated(None, FIRST_PAGE).await?;
    assert_eq!(all.total, 3);

    Ok(())
}

/// Tests entries are listed newest first.
///
/// Expected: descending by creation
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuestbookEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guestbook_entry(db).await?;
    let second = factory::create_guestbook_entry(db).await?;

    let repo = GuestbookRepository::new(db);
    let page = repo.get_paginated(None, FIRST_PAGE).await?;

    let ids: Vec<i32> = page.items.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
