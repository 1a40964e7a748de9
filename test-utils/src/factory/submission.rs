//! Submission factory for creating test submission log entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test submissions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::submission::SubmissionFactory;
///
/// let submission = SubmissionFactory::new(&db)
///     .user_id("123456789")
///     .event_key("hpp25")
///     .diaper(40)
///     .build()
///     .await?;
/// ```
pub struct SubmissionFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::submission::ActiveModel,
}

impl<'a> SubmissionFactory<'a> {
    /// Creates a new SubmissionFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented id
    /// - name: `"User {id}"`
    /// - date: now
    /// - every statistic and event column: NULL
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::submission::ActiveModel {
                user_id: ActiveValue::Set(id.to_string()),
                name: ActiveValue::Set(Some(format!("User {}", id))),
                date: ActiveValue::Set(Utc::now()),
                level: ActiveValue::Set(None),
                enlist_date: ActiveValue::Set(None),
                missions_won: ActiveValue::Set(None),
                kills: ActiveValue::Set(None),
                deaths: ActiveValue::Set(None),
                friendly_kills: ActiveValue::Set(None),
                samples_collected: ActiveValue::Set(None),
                event_key: ActiveValue::Set(None),
                event_science_count: ActiveValue::Set(None),
                event_baldzerkers_count: ActiveValue::Set(None),
                event_diaper_count: ActiveValue::Set(None),
                event_crayon_count: ActiveValue::Set(None),
                event_snack_count: ActiveValue::Set(None),
                ..Default::default()
            },
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.model.user_id = ActiveValue::Set(user_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = ActiveValue::Set(Some(name.into()));
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.model.date = ActiveValue::Set(date);
        self
    }

    pub fn event_key(mut self, event_key: impl Into<String>) -> Self {
        self.model.event_key = ActiveValue::Set(Some(event_key.into()));
        self
    }

    pub fn science(mut self, count: i32) -> Self {
        self.model.event_science_count = ActiveValue::Set(Some(count));
        self
    }

    pub fn baldzerkers(mut self, count: i32) -> Self {
        self.model.event_baldzerkers_count = ActiveValue::Set(Some(count));
        self
    }

    pub fn diaper(mut self, count: i32) -> Self {
        self.model.event_diaper_count = ActiveValue::Set(Some(count));
        self
    }

    pub fn crayon(mut self, count: i32) -> Self {
        self.model.event_crayon_count = ActiveValue::Set(Some(count));
        self
    }

    pub fn snack(mut self, count: i32) -> Self {
        self.model.event_snack_count = ActiveValue::Set(Some(count));
        self
    }

    pub fn kills(mut self, kills: i32) -> Self {
        self.model.kills = ActiveValue::Set(Some(kills));
        self
    }

    /// Builds and inserts the submission into the database.
    ///
    /// # Returns
    /// - `Ok(entity::submission::Model)` - Created submission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::submission::Model, DbErr> {
        self.model.insert(self.db).await
    }
}

/// Creates a submission with default values.
///
/// Shorthand for `SubmissionFactory::new(db).build().await`.
pub async fn create_submission(
    db: &DatabaseConnection,
) -> Result<entity::submission::Model, DbErr> {
    SubmissionFactory::new(db).build().await
}
