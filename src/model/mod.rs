//! API data transfer objects.
//!
//! Request and response bodies exchanged with the browser client. Every type here is
//! serialized as JSON and documented in the OpenAPI schema. Domain models in
//! `server::model` convert into these at the controller boundary.

pub mod api;
pub mod capsule;
pub mod contact;
pub mod guestbook;
pub mod journey;
pub mod memory;
pub mod milestone;
pub mod news;
pub mod pagination;
pub mod profile;
pub mod upload;
pub mod user;
