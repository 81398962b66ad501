use crate::server::{data::milestone::MilestoneRepository, model::milestone::SaveMilestoneParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
