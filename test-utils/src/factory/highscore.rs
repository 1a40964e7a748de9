//! Highscore factory for creating per-user highscore rows.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test highscore rows with customizable fields.
pub struct HighscoreFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::highscore::ActiveModel,
}

impl<'a> HighscoreFactory<'a> {
    /// Creates a new HighscoreFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented id
    /// - name: `"User {id}"`
    /// - verified: `false`
    /// - every statistic column: NULL
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::highscore::ActiveModel {
                user_id: ActiveValue::Set(id.to_string()),
                name: ActiveValue::Set(Some(format!("User {}", id))),
                date: ActiveValue::Set(Utc::now()),
                verified: ActiveValue::Set(false),
                level: ActiveValue::Set(None),
                enlist_date: ActiveValue::Set(None),
                missions_won: ActiveValue::Set(None),
                kills: ActiveValue::Set(None),
                deaths: ActiveValue::Set(None),
                friendly_kills: ActiveValue::Set(None),
                samples_collected: ActiveValue::Set(None),
            },
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.model.user_id = ActiveValue::Set(user_id.into());
        self
    }

    /// Clears the display name so output falls back to the user id.
    pub fn without_name(mut self) -> Self {
        self.model.name = ActiveValue::Set(None);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = ActiveValue::Set(Some(name.into()));
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.model.verified = ActiveValue::Set(verified);
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.model.level = ActiveValue::Set(Some(level));
        self
    }

    pub fn enlist_date(mut self, date: NaiveDate) -> Self {
        self.model.enlist_date = ActiveValue::Set(Some(date));
        self
    }

    pub fn kills(mut self, kills: i32) -> Self {
        self.model.kills = ActiveValue::Set(Some(kills));
        self
    }

    pub fn missions_won(mut self, missions_won: i32) -> Self {
        self.model.missions_won = ActiveValue::Set(Some(missions_won));
        self
    }

    /// Builds and inserts the highscore row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::highscore::Model)` - Created highscore entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::highscore::Model, DbErr> {
        self.model.insert(self.db).await
    }
}

/// Creates a highscore row with default values.
pub async fn create_highscore(db: &DatabaseConnection) -> Result<entity::highscore::Model, DbErr> {
    HighscoreFactory::new(db).build().await
}
