use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadDto {
    /// Public path of the stored file, e.g. `/uploads/1700000000-abc123.jpg`
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub content_type: String,
}

/// Multipart form accepted by the upload endpoint (documentation only).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFormDto {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
