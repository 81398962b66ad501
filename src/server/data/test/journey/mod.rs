use crate::server::{data::journey::JourneyRepository, model::journey::SaveJourneyParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod max_sort_order;
mod reorder;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
