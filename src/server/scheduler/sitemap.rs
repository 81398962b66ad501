use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{config::Config, error::AppError, service::sitemap::SitemapService};

/// File name the sitemap is written to inside the public directory.
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

/// Starts the sitemap regeneration scheduler.
///
/// Writes `{public_dir}/sitemap.xml` on the `SITEMAP_CRON` schedule (daily at 03:00 by
/// default). Failures are logged and retried on the next run.
///
/// # Arguments
/// - `db`: Database connection
/// - `config`: Application configuration providing the schedule, site URL and output directory
pub async fn start_scheduler(db: DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let site_url = config.site_url.clone();
    let output = config.public_dir.join(SITEMAP_FILE_NAME);

    let job = Job::new_async(config.sitemap_cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let site_url = site_url.clone();
        let output = output.clone();

        Box::pin(async move {
            if let Err(e) = SitemapService::new(&db, &site_url).write_to(&output).await {
                tracing::error!("Error regenerating sitemap: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Sitemap scheduler started ({})", config.sitemap_cron);

    Ok(())
}
