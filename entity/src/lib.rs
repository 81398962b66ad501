pub mod prelude;

pub mod contact_message;
pub mod guestbook_entry;
pub mod journey;
pub mod memory;
pub mod memory_image;
pub mod message_teaser;
pub mod milestone;
pub mod news;
pub mod profile;
pub mod user;
