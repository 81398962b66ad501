//! Command-line interface: run the server or perform one-off maintenance tasks.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::sitemap::SITEMAP_FILE_NAME,
    service::{seed::SeedService, sitemap::SitemapService, user::UserService},
    startup,
};

#[derive(Parser)]
#[command(name = "garden")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Backend for a personal digital garden")]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Create the configured admin and sample content where tables are empty
    Seed,

    /// Create an admin user
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        /// Display name (default: "Admin")
        #[arg(long)]
        name: Option<String>,
    },

    /// Replace a user's password
    ResetPassword {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Write the sitemap
    Sitemap {
        /// Output file (default: `{PUBLIC_DIR}/sitemap.xml`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<(), AppError> {
        let config = Config::from_env()?;

        match self.command.unwrap_or(Commands::Serve) {
            Commands::Serve => startup::serve(config).await,
            Commands::Migrate => {
                startup::connect_to_database(&config).await?;
                tracing::info!("Migrations applied");
                Ok(())
            }
            Commands::Seed => {
                let db = startup::connect_to_database(&config).await?;
                SeedService::new(&db)
                    .run(
                        config.admin_email.as_deref(),
                        config.admin_password.as_deref(),
                    )
                    .await?;
                Ok(())
            }
            Commands::CreateAdmin {
                email,
                password,
                name,
            } => {
                let db = startup::connect_to_database(&config).await?;
                let user = UserService::new(&db)
                    .create_admin(&email, &password, name.as_deref())
                    .await?;
                tracing::info!("Created admin {} ({})", user.email, user.id);
                Ok(())
            }
            Commands::ResetPassword { email, password } => {
                let db = startup::connect_to_database(&config).await?;
                UserService::new(&db)
                    .reset_password(&email, &password)
                    .await?;
                tracing::info!("Password reset for {}", email);
                Ok(())
            }
            Commands::Sitemap { output } => {
                let db = startup::connect_to_database(&config).await?;
                let output = output.unwrap_or_else(|| config.public_dir.join(SITEMAP_FILE_NAME));
                SitemapService::new(&db, &config.site_url)
                    .write_to(&output)
                    .await
            }
        }
    }
}
