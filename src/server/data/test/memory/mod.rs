use crate::server::{
    data::memory::MemoryRepository,
    error::AppError,
    model::{
        memory::{MemoryFilter, MemoryImage, SaveMemoryParam},
        page::PageParam,
    },
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn save_param(title: &str) -> SaveMemoryParam {
    SaveMemoryParam {
        title: title.to_string(),
        date: date(2023, 7, 4),
        description: "Fireworks over the lake".to_string(),
        category: "trip".to_string(),
        mood: Some("happy".to_string()),
        location: Some("Lake Tahoe".to_string()),
        tags: vec!["summer".to_string(), "lake".to_string()],
        images: vec![
            MemoryImage {
                url: "/uploads/a.jpg".to_string(),
                caption: Some("Arrival".to_string()),
            },
            MemoryImage {
                url: "/uploads/b.jpg".to_string(),
                caption: None,
            },
        ],
    }
}
