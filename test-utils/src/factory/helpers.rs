//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a memory with the given number of image attachments.
///
/// Images are created with positions `0..count` and urls `/uploads/image-{n}.jpg`.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of images to attach
///
/// # Returns
/// - `Ok((memory, images))` - The created memory and its images in position order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_memory_with_images(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::memory::Model, Vec<entity::memory_image::Model>), DbErr> {
    let memory = crate::factory::memory::create_memory(db).await?;

    let mut images = Vec::new();
    for position in 0..count {
        let image = crate::factory::memory::create_memory_image(db, memory.id, position).await?;
        images.push(image);
    }

    Ok((memory, images))
}
