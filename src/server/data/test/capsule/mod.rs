use crate::server::{data::capsule::CapsuleRepository, model::capsule::SaveCapsuleParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
