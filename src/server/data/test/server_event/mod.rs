use crate::{
    model::event::EventType,
    server::{
        data::server_event::ServerEventRepository, error::AppError,
        model::event::CreateServerEventParam,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_since;
mod last_before;
