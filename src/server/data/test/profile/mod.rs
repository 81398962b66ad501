use crate::server::{data::profile::ProfileRepository, model::profile::SaveProfileParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod slug_exists;
mod update;

fn param(slug: &str) -> SaveProfileParam {
    SaveProfileParam {
        slug: slug.to_string(),
        display_name: "Sam".to_string(),
        nickname: Some("Sunshine".to_string()),
        bio: "Loves hiking".to_string(),
        avatar_url: None,
        birthday: None,
        quote: None,
    }
}
