use super::*;

/// Tests updating a memory replaces its fields and image list.
///
/// Expected: Ok(Some(Memory)) with only the new images
#[tokio::test]
async fn replaces_fields_and_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (memory, _) = factory::helpers::create_memory_with_images(db, 3).await?;

    let mut param = save_param("Renamed");
    param.images = vec![MemoryImage {
        url: "/uploads/only.jpg".to_string(),
        caption: None,
    }];
    param.tags = vec![];

    let repo = MemoryRepository::new(db);
    let updated = repo.update(memory.id, param).await?.unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(updated.tags.is_empty());
    assert_eq!(updated.images.len(), 1);
    assert_eq!(updated.images[0].url, "/uploads/only.jpg");
    assert!(updated.updated_at >= memory.updated_at);

    let reloaded = repo.find_by_id(memory.id).await?.unwrap();
    assert_eq!(reloaded.images.len(), 1);

    Ok(())
}

/// Tests updating a missing memory.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_memory() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemoryRepository::new(db);
    let result = repo.update(12345, save_param("Nothing")).await?;

    assert!(result.is_none());

    Ok(())
}
