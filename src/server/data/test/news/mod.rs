use crate::server::{
    data::news::NewsRepository,
    model::{
        news::{NewsFilter, NewsRecord},
        page::PageParam,
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod set_published;
mod slug_exists;
mod update;

fn record(slug: &str) -> NewsRecord {
    NewsRecord {
        title: "We moved!".to_string(),
        slug: slug.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        category: "update".to_string(),
        content: "New **home**".to_string(),
        published: true,
    }
}
