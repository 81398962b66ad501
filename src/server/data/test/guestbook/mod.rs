use crate::server::{
    data::guestbook::GuestbookRepository,
    model::{guestbook::SignGuestbookParam, page::PageParam},
};
use entity::guestbook_entry::GuestbookStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod set_status;

const FIRST_PAGE: PageParam = PageParam {
    page: 0,
    per_page: 10,
};
