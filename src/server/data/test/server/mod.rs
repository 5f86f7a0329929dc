use crate::server::{
    data::server::ServerRepository,
    model::server::{UpdateServerParam, UpsertServerParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
mod upsert;
