//! Service layer for business rules and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate requests
//! against state held in the database (slug uniqueness, journey ordering, capsule
//! unlock times), publish guestbook events and map missing rows to `AppError::NotFound`.
//! Controllers work with DTOs; services work with the domain models in
//! `server::model`.

pub mod auth;
pub mod capsule;
pub mod contact;
pub mod guestbook;
pub mod journey;
pub mod memory;
pub mod milestone;
pub mod news;
pub mod profile;
pub mod seed;
pub mod sitemap;
pub mod upload;
pub mod user;
