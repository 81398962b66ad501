use crate::server::{
    data::contact_message::ContactMessageRepository,
    model::{contact::SendContactMessageParam, page::PageParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
