use crate::server::{
    data::submission::SubmissionRepository,
    model::event::{CreateEventSubmissionParam, Division},
};
use chrono::{Duration, TimeZone, Utc};
use entity::prelude::Submission;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::submission::SubmissionFactory};

mod create_event_submission;
mod get_event_totals;
mod get_highest_event_submission;
mod get_user_division_total;
mod get_user_event_submissions;

const EVENT: &str = "hpp25";

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 18, 0, 0).unwrap()
}
