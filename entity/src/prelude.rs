pub use super::contact_message::Entity as ContactMessage;
pub use super::guestbook_entry::Entity as GuestbookEntry;
pub use super::journey::Entity as Journey;
pub use super::memory::Entity as Memory;
pub use super::memory_image::Entity as MemoryImage;
pub use super::message_teaser::Entity as MessageTeaser;
pub use super::milestone::Entity as Milestone;
pub use super::news::Entity as News;
pub use super::profile::Entity as Profile;
pub use super::user::Entity as User;
