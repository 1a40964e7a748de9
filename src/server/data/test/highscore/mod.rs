use crate::server::{
    data::highscore::HighscoreRepository,
    model::statistics::{RecordStatisticsParam, StatField, StatValue, Statistics},
};
use chrono::{NaiveDate, TimeZone, Utc};
use entity::prelude::{Highscore, Submission};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::highscore::HighscoreFactory};

mod find_by_user_id;
mod get_best_per_field;
mod record_statistics;

fn param(user_id: &str, statistics: Statistics) -> RecordStatisticsParam {
    RecordStatisticsParam {
        user_id: user_id.to_string(),
        statistics,
        date: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    }
}
