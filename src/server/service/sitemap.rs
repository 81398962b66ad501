//! Sitemap generation for search engines.

use std::path::Path;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::{memory::MemoryRepository, news::NewsRepository, profile::ProfileRepository},
    error::AppError,
};

const STATIC_PAGES: &[&str] = &[
    "/",
    "/memories",
    "/timeline",
    "/milestones",
    "/news",
    "/guestbook",
    "/time-capsule",
    "/contact",
];

pub struct SitemapService<'a> {
    db: &'a DatabaseConnection,
    site_url: &'a Url,
}

impl<'a> SitemapService<'a> {
    pub fn new(db: &'a DatabaseConnection, site_url: &'a Url) -> Self {
        Self { db, site_url }
    }

    /// Builds the `urlset` document for static pages, memories, published news and profiles.
    pub async fn generate(&self) -> Result<String, AppError> {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
        );

        for page in STATIC_PAGES {
            self.push_url(&mut xml, page, None)?;
        }

        let memories = MemoryRepository::new(self.db).get_all_lastmod().await?;
        for (id, updated_at) in memories {
            self.push_url(&mut xml, &format!("/memories/{}", id), Some(updated_at))?;
        }

        let news = NewsRepository::new(self.db).get_published_lastmod().await?;
        for (slug, updated_at) in news {
            self.push_url(&mut xml, &format!("/news/{}", slug), Some(updated_at))?;
        }

        let profiles = ProfileRepository::new(self.db).get_all_lastmod().await?;
        for (slug, updated_at) in profiles {
            self.push_url(&mut xml, &format!("/profiles/{}", slug), Some(updated_at))?;
        }

        xml.push_str("</urlset>\n");
        Ok(xml)
    }

    /// Generates the sitemap and writes it to `path`.
    pub async fn write_to(&self, path: &Path) -> Result<(), AppError> {
        let xml = self.generate().await?;
        write_atomic(path, xml.as_bytes()).await?;

        tracing::info!("Wrote sitemap to {}", path.display());

        Ok(())
    }

    fn push_url(
        &self,
        xml: &mut String,
        path: &str,
        lastmod: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        let loc = self.site_url.join(path)?;

        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(loc.as_str()));
        xml.push_str("</loc>");
        if let Some(lastmod) = lastmod {
            xml.push_str(&format!("<lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d")));
        }
        xml.push_str("</url>\n");

        Ok(())
    }
}

/// Writes to a sibling temporary file then renames it over `path`, so readers never
/// see a partially written file.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");

    tokio::fs::write(&tmp, contents).await?;
    tokio::fs::rename(&tmp, path).await
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
