//! Highscore repository.
//!
//! Provides the `HighscoreRepository` for the one-row-per-user `highscore` table. A
//! statistics update is logged to the submission table and merged into the user's
//! highscore row within a single transaction.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::statistics::{
    Highscore, HighscoreEntry, RecordStatisticsParam, StatField,
};

use entity::highscore::Column;

/// Highscore column holding a statistics field.
fn stat_column(field: StatField) -> Column {
    match field {
        StatField::Name => Column::Name,
        StatField::Level => Column::Level,
        StatField::EnlistDate => Column::EnlistDate,
        StatField::MissionsWon => Column::MissionsWon,
        StatField::Kills => Column::Kills,
        StatField::Deaths => Column::Deaths,
        StatField::FriendlyKills => Column::FriendlyKills,
        StatField::SamplesCollected => Column::SamplesCollected,
    }
}

/// Repository providing database operations for highscores.
pub struct HighscoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HighscoreRepository<'a> {
    /// Creates a new HighscoreRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HighscoreRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a statistics update atomically.
    ///
    /// Appends the update to the submission log and upserts the user's highscore row.
    /// Only provided fields overwrite existing highscore values; the verified flag is
    /// never touched. Both writes commit together or not at all.
    ///
    /// # Arguments
    /// - `param` - User, validated statistics and timestamp
    ///
    /// # Returns
    /// - `Ok(Highscore)` - The user's highscore row after the update
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn record_statistics(&self, param: RecordStatisticsParam) -> Result<Highscore, DbErr> {
        let stats = &param.statistics;
        let txn = self.db.begin().await?;

        entity::submission::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.clone()),
            name: ActiveValue::Set(stats.name.clone()),
            date: ActiveValue::Set(param.date),
            level: ActiveValue::Set(stats.level),
            enlist_date: ActiveValue::Set(stats.enlist_date),
            missions_won: ActiveValue::Set(stats.missions_won),
            kills: ActiveValue::Set(stats.kills),
            deaths: ActiveValue::Set(stats.deaths),
            friendly_kills: ActiveValue::Set(stats.friendly_kills),
            samples_collected: ActiveValue::Set(stats.samples_collected),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut update_columns = vec![Column::Date];
        update_columns.extend(stats.values().into_iter().map(|(field, _)| stat_column(field)));

        let highscore = entity::highscore::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(stats.name.clone()),
            date: ActiveValue::Set(param.date),
            verified: ActiveValue::Set(false),
            level: ActiveValue::Set(stats.level),
            enlist_date: ActiveValue::Set(stats.enlist_date),
            missions_won: ActiveValue::Set(stats.missions_won),
            kills: ActiveValue::Set(stats.kills),
            deaths: ActiveValue::Set(stats.deaths),
            friendly_kills: ActiveValue::Set(stats.friendly_kills),
            samples_collected: ActiveValue::Set(stats.samples_collected),
        };

        let entity = entity::prelude::Highscore::insert(highscore)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;

        Ok(Highscore::from_entity(entity))
    }

    /// Finds the highscore row of a user.
    ///
    /// # Returns
    /// - `Ok(Some(Highscore))` - Row found
    /// - `Ok(None)` - User never submitted statistics
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Highscore>, DbErr> {
        let entity = entity::prelude::Highscore::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Highscore::from_entity))
    }

    /// Finds the best value of every ranked field.
    ///
    /// Enlist date ranks ascending, every other field descending. Ties go to the value
    /// submitted first. Fields nobody has provided are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<HighscoreEntry>)` - One entry per field with data, in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_best_per_field(&self) -> Result<Vec<HighscoreEntry>, DbErr> {
        let mut entries = Vec::new();

        for field in StatField::ranked() {
            let column = stat_column(field);
            let query = entity::prelude::Highscore::find().filter(column.is_not_null());
            let query = if field.lower_is_better() {
                query.order_by_asc(column)
            } else {
                query.order_by_desc(column)
            };

            let Some(entity) = query.order_by_asc(Column::Date).one(self.db).await? else {
                continue;
            };

            let highscore = Highscore::from_entity(entity);
            if let Some(value) = highscore.statistics.get(field) {
                entries.push(HighscoreEntry {
                    field,
                    user_id: highscore.user_id,
                    name: highscore.statistics.name,
                    value,
                });
            }
        }

        Ok(entries)
    }
}
