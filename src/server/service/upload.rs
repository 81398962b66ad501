//! Upload storage for images, video and audio used by memories and profiles.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::server::error::AppError;

const ALLOWED_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mp3", "audio/mpeg"),
];

/// Public path prefix the upload directory is served under.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// A file that has been written to the upload directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub content_type: String,
}

pub struct UploadService<'a> {
    upload_dir: &'a Path,
    max_bytes: usize,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a Path, max_bytes: usize) -> Self {
        Self {
            upload_dir,
            max_bytes,
        }
    }

    /// Stores `bytes` under a generated `{timestamp}-{random}.{ext}` name.
    ///
    /// The extension is taken from the client-supplied `original_name` and decides the
    /// stored content type.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty file, missing or disallowed extension
    /// - `Err(AppError::PayloadTooLarge)` - File exceeds the configured limit
    pub async fn store(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredUpload, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if bytes.len() > self.max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Uploaded file exceeds {} bytes",
                self.max_bytes
            )));
        }

        let (extension, content_type) = original_name
            .and_then(allowed_extension)
            .ok_or_else(|| AppError::BadRequest("File type is not allowed".to_string()))?;

        tokio::fs::create_dir_all(self.upload_dir).await?;

        let filename = format!(
            "{}-{}.{}",
            Utc::now().timestamp(),
            generate_random_suffix(),
            extension
        );
        tokio::fs::write(self.upload_dir.join(&filename), bytes).await?;

        tracing::info!("Stored upload {} ({} bytes)", filename, bytes.len());

        Ok(StoredUpload {
            url: format!("{}/{}", UPLOAD_URL_PREFIX, filename),
            filename,
            size: bytes.len() as u64,
            content_type: content_type.to_string(),
        })
    }

    /// Deletes a previously stored upload by file name.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Name contains path separators or `..`
    /// - `Err(AppError::NotFound)` - No such file
    pub async fn delete(&self, filename: &str) -> Result<(), AppError> {
        let path = self.resolve(filename)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("Deleted upload {}", filename);
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("Upload not found".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn resolve(&self, filename: &str) -> Result<PathBuf, AppError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(AppError::BadRequest("Invalid file name".to_string()));
        }

        Ok(self.upload_dir.join(filename))
    }
}

/// Returns the lowercased extension and its content type when the extension is allowed.
fn allowed_extension(name: &str) -> Option<(String, &'static str)> {
    let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();

    ALLOWED_EXTENSIONS
        .iter()
        .find(|(allowed, _)| *allowed == extension)
        .map(|(_, content_type)| (extension, *content_type))
}

fn generate_random_suffix() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const SUFFIX_LENGTH: usize = 8;

    let mut rng = rand::rng();

    (0..SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: File is written with a generated name and the extension's content type
    #[tokio::test]
    async fn stores_allowed_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let service = UploadService::new(dir.path(), 1024);

        let stored = service.store(Some("Holiday.JPG"), b"image-bytes").await?;

        assert!(stored.filename.ends_with(".jpg"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert_eq!(stored.size, 11);
        assert_eq!(stored.content_type, "image/jpeg");

        let written = tokio::fs::read(dir.path().join(&stored.filename)).await?;
        assert_eq!(written, b"image-bytes");

        Ok(())
    }

    /// Expected: Empty files and disallowed types are BadRequest, oversized is PayloadTooLarge
    #[tokio::test]
    async fn rejects_invalid_files() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let service = UploadService::new(dir.path(), 4);

        assert!(matches!(
            service.store(Some("a.png"), b"").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.store(Some("script.sh"), b"echo").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.store(None, b"data").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.store(Some("big.png"), b"too large").await,
            Err(AppError::PayloadTooLarge(_))
        ));

        Ok(())
    }

    /// Expected: Traversal names are rejected, missing files are NotFound
    #[tokio::test]
    async fn delete_validates_name() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let service = UploadService::new(dir.path(), 1024);

        assert!(matches!(
            service.delete("../secret.txt").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.delete("nested/file.png").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.delete("missing.png").await,
            Err(AppError::NotFound(_))
        ));

        let stored = service.store(Some("a.webp"), b"webp").await?;
        service.delete(&stored.filename).await?;
        assert!(!dir.path().join(&stored.filename).exists());

        Ok(())
    }
}
