use super::*;

/// Tests images are returned ordered by position.
///
/// Verifies that images inserted out of order come back sorted.
///
/// Expected: Ok(Some(Memory)) with images sorted by position
#[tokio::test]
async fn returns_images_in_position_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let memory = factory::memory::create_memory(db).await?;
    let second = factory::memory::create_memory_image(db, memory.id, 1).await?;
    let first = factory::memory::create_memory_image(db, memory.id, 0).await?;

    let repo = MemoryRepository::new(db);
    let found = repo.find_by_id(memory.id).await?.unwrap();

    let urls: Vec<_> = found.images.iter().map(|i| i.url.clone()).collect();
    assert_eq!(urls, vec![first.url, second.url]);

    Ok(())
}

/// Tests a missing memory yields None.
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

    assert!(repo.find_by_id(404).await?.is_none());

    Ok(())
}
