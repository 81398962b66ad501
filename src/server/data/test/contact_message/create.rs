use super::*;

/// Tests a submitted message is stored unread.
///
/// Expected: Ok(ContactMessage) with read=false
#[tokio::test]
async fn stores_message_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);
    let message = repo
        .create(SendContactMessageParam {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "Lovely site".to_string(),
        })
        .await?;

    assert!(!message.read);
    assert_eq!(message.email, "visitor@example.com");

    Ok(())
}
