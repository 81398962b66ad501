use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a memory also removes its images.
///
/// Expected: Ok(true) and no image rows left
#[tokio::test]
async fn deletes_memory_and_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (memory, _) = factory::helpers::create_memory_with_images(db, 2).await?;

    let repo = MemoryRepository::new(db);
    let deleted = repo.delete(memory.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(memory.id).await?.is_none());
    let remaining = entity::prelude::MemoryImage::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests deleting a missing memory.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_memory() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemoryRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
