//! Small helpers shared across layers.

pub mod markdown;
pub mod password;
pub mod slug;
pub mod validate;
