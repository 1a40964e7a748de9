//! Submission log repository.
//!
//! Provides the `SubmissionRepository` for the append-only `submission` table. Event
//! submissions store one division count per row; statistics updates are written by
//! `HighscoreRepository` because they also touch the highscore table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::event::{
    CreateEventSubmissionParam, Division, DivisionTotal, EventSubmission, EventTotals,
};

use entity::submission::Column;

/// Column holding the counts of a division.
pub fn division_column(division: Division) -> Column {
    match division {
        Division::Science => Column::EventScienceCount,
        Division::Baldzerkers => Column::EventBaldzerkersCount,
        Division::Diaper => Column::EventDiaperCount,
        Division::Crayon => Column::EventCrayonCount,
        Division::Snack => Column::EventSnackCount,
    }
}

#[derive(Debug, FromQueryResult)]
struct EventTotalsRow {
    science: Option<i64>,
    baldzerkers: Option<i64>,
    diaper: Option<i64>,
    crayon: Option<i64>,
    snack: Option<i64>,
    submissions: i64,
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    total: Option<i64>,
}

/// Repository providing database operations for the submission log.
pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    /// Creates a new SubmissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SubmissionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a division count for an event.
    ///
    /// # Arguments
    /// - `param` - User, event and the single division count to store
    ///
    /// # Returns
    /// - `Ok(EventSubmission)` - The stored submission
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_event_submission(
        &self,
        param: CreateEventSubmissionParam,
    ) -> Result<EventSubmission, DbErr> {
        let mut active = entity::submission::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            date: ActiveValue::Set(param.date),
            event_key: ActiveValue::Set(Some(param.event_key)),
            ..Default::default()
        };
        active.set(division_column(param.division), Some(param.count).into());

        let entity = active.insert(self.db).await?;

        EventSubmission::from_entity(&entity)
            .into_iter()
            .next()
            .ok_or_else(|| DbErr::Custom("Stored submission has no division count".to_string()))
    }

    /// Lists a user's submissions for an event, oldest first.
    ///
    /// # Arguments
    /// - `event_key` - Event to filter by
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Vec<EventSubmission>)` - One entry per stored division count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_user_event_submissions(
        &self,
        event_key: &str,
        user_id: &str,
    ) -> Result<Vec<EventSubmission>, DbErr> {
        let rows = entity::prelude::Submission::find()
            .filter(Column::EventKey.eq(event_key))
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.iter().flat_map(EventSubmission::from_entity).collect())
    }

    /// Sums a user's counts for one division of an event.
    ///
    /// # Returns
    /// - `Ok(i64)` - Total, zero without submissions
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_user_division_total(
        &self,
        event_key: &str,
        user_id: &str,
        division: Division,
    ) -> Result<i64, DbErr> {
        let row = entity::prelude::Submission::find()
            .select_only()
            .column_as(division_column(division).sum(), "total")
            .filter(Column::EventKey.eq(event_key))
            .filter(Column::UserId.eq(user_id))
            .into_model::<TotalRow>()
            .one(self.db)
            .await?;

        Ok(row.and_then(|row| row.total).unwrap_or(0))
    }

    /// Aggregates per-division totals and the submission count of an event.
    ///
    /// # Returns
    /// - `Ok(EventTotals)` - Totals in division order; zeros for an empty event
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_event_totals(&self, event_key: &str) -> Result<EventTotals, DbErr> {
        let row = entity::prelude::Submission::find()
            .select_only()
            .column_as(Column::EventScienceCount.sum(), "science")
            .column_as(Column::EventBaldzerkersCount.sum(), "baldzerkers")
            .column_as(Column::EventDiaperCount.sum(), "diaper")
            .column_as(Column::EventCrayonCount.sum(), "crayon")
            .column_as(Column::EventSnackCount.sum(), "snack")
            .column_as(Column::Id.count(), "submissions")
            .filter(Column::EventKey.eq(event_key))
            .into_model::<EventTotalsRow>()
            .one(self.db)
            .await?;

        let Some(row) = row else {
            return Ok(EventTotals {
                divisions: Division::ALL
                    .into_iter()
                    .map(|division| DivisionTotal { division, total: 0 })
                    .collect(),
                submissions: 0,
            });
        };

        let totals = [row.science, row.baldzerkers, row.diaper, row.crayon, row.snack];

        Ok(EventTotals {
            divisions: Division::ALL
                .into_iter()
                .zip(totals)
                .map(|(division, total)| DivisionTotal {
                    division,
                    total: total.unwrap_or(0),
                })
                .collect(),
            submissions: row.submissions,
        })
    }

    /// Finds the single largest division count logged for an event.
    ///
    /// Ties are broken by the earliest submission.
    ///
    /// # Returns
    /// - `Ok(Some(EventSubmission))` - Highest submission
    /// - `Ok(None)` - Event has no submissions
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_highest_event_submission(
        &self,
        event_key: &str,
    ) -> Result<Option<EventSubmission>, DbErr> {
        let mut highest: Option<EventSubmission> = None;

        for division in Division::ALL {
            let column = division_column(division);
            let row = entity::prelude::Submission::find()
                .filter(Column::EventKey.eq(event_key))
                .filter(column.is_not_null())
                .order_by_desc(column)
                .order_by_asc(Column::Date)
                .one(self.db)
                .await?;

            let candidate = row.and_then(|row| {
                EventSubmission::from_entity(&row)
                    .into_iter()
                    .find(|submission| submission.division == division)
            });

            highest = match (highest, candidate) {
                (Some(current), Some(candidate))
                    if candidate.count > current.count
                        || (candidate.count == current.count && candidate.date < current.date) =>
                {
                    Some(candidate)
                }
                (None, candidate) => candidate,
                (current, _) => current,
            };
        }

        Ok(highest)
    }
}
