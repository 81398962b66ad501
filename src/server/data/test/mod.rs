mod capsule;
mod contact_message;
mod guestbook;
mod journey;
mod memory;
mod milestone;
mod news;
mod profile;
mod user;
