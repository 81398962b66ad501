use super::*;

const FIRST_PAGE: PageParam = PageParam {
    page: 0,
    per_page: 10,
};

/// Tests the unread filter and newest-first ordering.
///
/// Expected: all messages newest first; only unread ones when filtered
#[tokio::test]
async fn filters_unread_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let read = factory::contact_message::create_contact_message_with_read(db, true).await?;
    let unread = factory::create_contact_message(db).await?;

    let repo = ContactMessageRepository::new(db);

    let all = repo.get_paginated(false, FIRST_PAGE).await?;
    let ids: Vec<i32> = all.items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![unread.id, read.id]);

    let only_unread = repo.get_paginated(true, FIRST_PAGE).await?;
    assert_eq!(only_unread.total, 1);
    assert_eq!(only_unread.items[0].id, unread.id);

    Ok(())
}

/// Tests marking a message read removes it from the unread listing.
///
/// Expected: unread total drops to zero
#[tokio::test]
async fn marking_read_updates_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = factory::create_contact_message(db).await?;

    let repo = ContactMessageRepository::new(db);
    let updated = repo.set_read(message.id, true).await?.unwrap();

    assert!(updated.read);
    assert_eq!(repo.get_paginated(true, FIRST_PAGE).await?.total, 0);

    Ok(())
}
