//! Environment-based application configuration.

use std::{path::PathBuf, str::FromStr};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SITE_URL: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;
/// Every day at 03:00 (seconds field first, as tokio-cron-scheduler expects).
const DEFAULT_SITEMAP_CRON: &str = "0 0 3 * * *";
const DEFAULT_SESSION_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Public URL of the front end, used for sitemap links.
    pub site_url: Url,
    /// Origin allowed by CORS with credentials.
    pub frontend_origin: String,

    pub upload_dir: PathBuf,
    pub public_dir: PathBuf,
    pub upload_max_bytes: usize,

    pub sitemap_cron: String,

    pub cookie_secure: bool,
    pub session_days: i64,

    /// Take the rate limit key from forwarding headers. Only safe behind a reverse proxy
    /// that overwrites them.
    pub trust_proxy: bool,

    /// Bootstrap admin credentials, used when no admin exists yet.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let site_url = optional_var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let frontend_origin = optional_var("FRONTEND_ORIGIN")
            .unwrap_or_else(|| site_url.trim_end_matches('/').to_string());

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            host: optional_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed_var("PORT", DEFAULT_PORT)?,
            site_url: Url::parse(&site_url).map_err(|_| ConfigError::InvalidEnvVar {
                name: "SITE_URL".to_string(),
                value: site_url.clone(),
            })?,
            frontend_origin,
            upload_dir: optional_var("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            public_dir: optional_var("PUBLIC_DIR")
                .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string())
                .into(),
            upload_max_bytes: parsed_var("UPLOAD_MAX_BYTES", DEFAULT_UPLOAD_MAX_BYTES)?,
            sitemap_cron: optional_var("SITEMAP_CRON")
                .unwrap_or_else(|| DEFAULT_SITEMAP_CRON.to_string()),
            cookie_secure: parsed_var("COOKIE_SECURE", false)?,
            session_days: parsed_var("SESSION_DAYS", DEFAULT_SESSION_DAYS)?,
            trust_proxy: parsed_var("TRUST_PROXY", false)?,
            admin_email: optional_var("ADMIN_EMAIL"),
            admin_password: optional_var("ADMIN_PASSWORD"),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables are both treated as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
