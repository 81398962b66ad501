//! Session wrappers and request guards.

pub mod auth;
pub mod rate_limit;
pub mod session;

#[cfg(test)]
mod test;
