//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle dependencies such as memory images
//! belonging to a memory.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let memory = factory::memory::create_memory(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .password("correct horse")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod contact_message;
pub mod guestbook_entry;
pub mod helpers;
pub mod journey;
pub mod memory;
pub mod message_teaser;
pub mod milestone;
pub mod news;
pub mod profile;
pub mod user;

pub use contact_message::create_contact_message;
pub use guestbook_entry::create_guestbook_entry;
pub use journey::create_journey;
pub use memory::create_memory;
pub use message_teaser::create_message_teaser;
pub use milestone::create_milestone;
pub use news::create_news;
pub use profile::create_profile;
pub use user::create_user;
