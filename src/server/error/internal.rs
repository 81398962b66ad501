use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash or parse a stored password hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A memory row holds a tags column that is not a JSON string array.
    #[error("Stored tags for memory {memory_id} are not valid JSON: {source}")]
    CorruptTags {
        /// The memory whose tags failed to parse
        memory_id: i32,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Tags could not be serialized for storage.
    #[error("Failed to serialize tags: {0}")]
    SerializeTags(#[source] serde_json::Error),
}
