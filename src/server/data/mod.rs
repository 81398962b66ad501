//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod capsule;
pub mod contact_message;
pub mod guestbook;
pub mod journey;
pub mod memory;
pub mod milestone;
pub mod news;
pub mod profile;
pub mod user;

#[cfg(test)]
mod test;
