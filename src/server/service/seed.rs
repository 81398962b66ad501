//! Sample data for a fresh installation.
//!
//! Each table is only seeded while it is empty, so running the seed repeatedly is safe.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{journey::JourneyRepository, milestone::MilestoneRepository, profile::ProfileRepository},
    error::AppError,
    model::{
        journey::SaveJourneyParam, milestone::SaveMilestoneParam, profile::SaveProfileParam,
    },
    service::user::UserService,
};

/// What a seed run inserted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub profiles: usize,
    pub journey: usize,
    pub milestones: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn run(
        &self,
        admin_email: Option<&str>,
        admin_password: Option<&str>,
    ) -> Result<SeedReport, AppError> {
        let admin = UserService::new(self.db)
            .ensure_admin(admin_email, admin_password)
            .await?;

        let report = SeedReport {
            admin_created: admin.is_some(),
            profiles: self.seed_profiles().await?,
            journey: self.seed_journey().await?,
            milestones: self.seed_milestones().await?,
        };

        tracing::info!(
            "Seed complete: admin_created={}, profiles={}, journey={}, milestones={}",
            report.admin_created,
            report.profiles,
            report.journey,
            report.milestones
        );

        Ok(report)
    }

    async fn seed_profiles(&self) -> Result<usize, AppError> {
        let repo = ProfileRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(0);
        }

        let profiles = [
            ("alex", "Alex", "Collects sunsets and bad puns."),
            ("sam", "Sam", "Keeps the plants alive."),
        ];
        for (slug, display_name, bio) in profiles {
            repo.create(SaveProfileParam {
                slug: slug.to_string(),
                display_name: display_name.to_string(),
                nickname: None,
                bio: bio.to_string(),
                avatar_url: None,
                birthday: None,
                quote: None,
            })
            .await?;
        }

        Ok(profiles.len())
    }

    async fn seed_journey(&self) -> Result<usize, AppError> {
        let repo = JourneyRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(0);
        }

        let entries = [
            ("First hello", date(2021, 4, 17), "The day we met."),
            ("First trip", date(2021, 9, 3), "A weekend by the sea."),
            ("Moving in", date(2022, 6, 1), "Boxes everywhere."),
        ];
        for (sort_order, (title, date, description)) in entries.iter().enumerate() {
            repo.create(
                SaveJourneyParam {
                    title: title.to_string(),
                    date: *date,
                    description: description.to_string(),
                    image_url: None,
                    sort_order: None,
                },
                sort_order as i32,
            )
            .await?;
        }

        Ok(entries.len())
    }

    async fn seed_milestones(&self) -> Result<usize, AppError> {
        let repo = MilestoneRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(0);
        }

        let milestones = [
            ("Anniversary", date(2021, 4, 17), "heart"),
            ("Moving day", date(2022, 6, 1), "home"),
        ];
        for (title, date, icon) in milestones {
            repo.create(SaveMilestoneParam {
                title: title.to_string(),
                date,
                description: None,
                icon: Some(icon.to_string()),
            })
            .await?;
        }

        Ok(milestones.len())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
