//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert request DTOs into validated
//! params, call the matching service and convert the result back into DTOs. Every
//! handler carries a `utoipa::path` annotation that feeds the OpenAPI document.

pub mod auth;
pub mod capsule;
pub mod contact;
pub mod guestbook;
pub mod health;
pub mod journey;
pub mod memory;
pub mod milestone;
pub mod news;
pub mod param;
pub mod profile;
pub mod upload;
