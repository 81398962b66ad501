//! Memory domain models, parameters and tag normalization.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::memory::{MemoryDto, MemoryImageDto, SaveMemoryDto},
    server::{
        error::{internal::InternalError, AppError},
        util::validate,
    },
};

/// Category assigned when none is provided.
pub const DEFAULT_CATEGORY: &str = "moment";
pub const MAX_TITLE_LENGTH: usize = 200;
const MAX_DESCRIPTION_LENGTH: usize = 20_000;
const MAX_SHORT_FIELD_LENGTH: usize = 100;

/// Image attached to a memory, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryImage {
    pub url: String,
    pub caption: Option<String>,
}

impl MemoryImage {
    pub fn into_dto(self) -> MemoryImageDto {
        MemoryImageDto {
            url: self.url,
            caption: self.caption,
        }
    }
}

/// A dated memory with its images and normalized tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub mood: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub images: Vec<MemoryImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memory {
    pub fn into_dto(self) -> MemoryDto {
        MemoryDto {
            id: self.id,
            title: self.title,
            date: self.date,
            description: self.description,
            category: self.category,
            mood: self.mood,
            location: self.location,
            tags: self.tags,
            images: self.images.into_iter().map(MemoryImage::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model and its image rows to a domain model.
    ///
    /// `images` must already be sorted by position.
    ///
    /// # Returns
    /// - `Ok(Memory)` - The converted memory
    /// - `Err(AppError::InternalErr(CorruptTags))` - Stored tags column is not a JSON string array
    pub fn from_entity(
        entity: entity::memory::Model,
        images: Vec<entity::memory_image::Model>,
    ) -> Result<Self, AppError> {
        let tags = decode_tags(&entity.tags).map_err(|source| InternalError::CorruptTags {
            memory_id: entity.id,
            source,
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            description: entity.description,
            category: entity.category,
            mood: entity.mood,
            location: entity.location,
            tags,
            images: images
                .into_iter()
                .map(|image| MemoryImage {
                    url: image.url,
                    caption: image.caption,
                })
                .collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Validated input for creating or replacing a memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveMemoryParam {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub mood: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub images: Vec<MemoryImage>,
}

impl SaveMemoryParam {
    /// Validates and normalizes a request body.
    ///
    /// # Returns
    /// - `Ok(SaveMemoryParam)` - Trimmed title, defaulted category, normalized tags
    /// - `Err(AppError::BadRequest)` - Blank or overlong title, or an image without a url
    pub fn from_dto(dto: SaveMemoryDto) -> Result<Self, AppError> {
        let title = validate::required_text("Title", &dto.title, MAX_TITLE_LENGTH)?;
        let description =
            validate::bounded_text("Description", &dto.description, MAX_DESCRIPTION_LENGTH)?;

        let category = match dto.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            category => validate::required_text("Category", category, MAX_SHORT_FIELD_LENGTH)?,
        };

        let images = dto
            .images
            .into_iter()
            .map(|image| {
                let url = image.url.trim();
                if url.is_empty() {
                    return Err(AppError::BadRequest("Image url is required".to_string()));
                }
                Ok(MemoryImage {
                    url: url.to_string(),
                    caption: validate::optional_text("Caption", image.caption, MAX_TITLE_LENGTH)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title,
            date: dto.date,
            description,
            category,
            mood: validate::optional_text("Mood", dto.mood, MAX_SHORT_FIELD_LENGTH)?,
            location: validate::optional_text("Location", dto.location, MAX_TITLE_LENGTH)?,
            tags: normalize_tags(dto.tags),
            images,
        })
    }
}

/// Optional exact-match filters for the memory listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryFilter {
    pub category: Option<String>,
    pub mood: Option<String>,
    /// Matched against the normalized form.
    pub tag: Option<String>,
}

/// Trims, lowercases and de-duplicates tags, keeping first-seen order.
///
/// Double quotes are stripped so a stored tag can be matched inside the JSON column
/// with a plain `LIKE '%"tag"%'`. Tags left empty are dropped.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();

    for tag in tags {
        let tag = normalize_tag(tag.as_ref());
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }

    normalized
}

/// Normalizes a single tag the way stored tags are normalized.
pub fn normalize_tag(tag: &str) -> String {
    tag.replace('"', "").trim().to_lowercase()
}

pub fn encode_tags(tags: &[String]) -> Result<String, AppError> {
    let encoded = serde_json::to_string(tags).map_err(InternalError::SerializeTags)?;
    Ok(encoded)
}

fn decode_tags(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
}
