//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types carry already-validated input from controllers into services.

pub mod capsule;
pub mod contact;
pub mod guestbook;
pub mod journey;
pub mod memory;
pub mod milestone;
pub mod news;
pub mod page;
pub mod profile;
pub mod user;
