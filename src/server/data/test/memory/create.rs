use super::*;

/// Tests creating a memory with images and tags.
///
/// Verifies that the memory row, its tags and its images are stored and that
/// images keep the order they were given in.
///
/// Expected: Ok(Memory)
#[tokio::test]
async fn creates_memory_with_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemoryRepository::new(db);
    let memory = repo.create(save_param("Fourth of July")).await?;

    assert_eq!(memory.title, "Fourth of July");
    assert_eq!(memory.tags, vec!["summer", "lake"]);
    assert_eq!(memory.images.len(), 2);
    assert_eq!(memory.images[0].url, "/uploads/a.jpg");
    assert_eq!(memory.images[1].url, "/uploads/b.jpg");

    let reloaded = repo.find_by_id(memory.id).await?.unwrap();
    assert_eq!(reloaded.title, memory.title);
    assert_eq!(reloaded.tags, memory.tags);
    assert_eq!(reloaded.images, memory.images);

    Ok(())
}
