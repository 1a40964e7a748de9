use serenity::async_trait;

use crate::server::{
    command::{
        descriptor::{CommandDescriptor, OptionDescriptor},
        Command, CommandContext,
    },
    config::Config,
    data::highscore::HighscoreRepository,
    interaction::{model::Interaction, response::InteractionResponse},
    model::statistics::{FieldKind, RecordStatisticsParam, StatField, StatValue, Statistics},
};

/// `/update [fields]`: stores personal game statistics and shows the resulting
/// highscore row.
pub struct UpdateCommand;

/// Renders `**Label**: value` lines, or a placeholder when there is nothing to show.
pub fn format_values(values: &[(StatField, StatValue)]) -> String {
    if values.is_empty() {
        return "No data provided.".to_string();
    }

    values
        .iter()
        .map(|(field, value)| format!("**{}**: {}", field.label(), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl Command for UpdateCommand {
    fn descriptor(&self) -> CommandDescriptor {
        StatField::ALL.into_iter().fold(
            CommandDescriptor::new("update", "Update your Helldivers statistics"),
            |descriptor, field| {
                let option = match field.kind() {
                    FieldKind::Int { .. } => {
                        OptionDescriptor::integer(field.name(), field.description())
                    }
                    FieldKind::Text | FieldKind::Date => {
                        OptionDescriptor::string(field.name(), field.description())
                    }
                };
                descriptor.option(option)
            },
        )
    }

    async fn handle(
        &self,
        interaction: &Interaction,
        _config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let statistics = match Statistics::from_interaction(interaction) {
            Ok(statistics) => statistics,
            Err(e) => return InteractionResponse::ephemeral(format!("Error: {}", e)),
        };

        let Some(user_id) = interaction.invoker_id() else {
            tracing::warn!("update invoked without a user");
            return InteractionResponse::ephemeral("Failed to store data.");
        };
        let repo = HighscoreRepository::new(&ctx.db);
        let changed = format_values(&statistics.values());

        let highscore = if statistics.is_empty() {
            repo.find_by_user_id(user_id).await.unwrap_or_else(|e| {
                tracing::error!("Failed to read highscore of {}: {}", user_id, e);
                None
            })
        } else {
            let param = RecordStatisticsParam {
                user_id: user_id.to_string(),
                statistics,
                date: ctx.now(),
            };
            match repo.record_statistics(param).await {
                Ok(highscore) => Some(highscore),
                Err(e) => {
                    tracing::error!("Failed to store statistics of {}: {}", user_id, e);
                    return InteractionResponse::ephemeral("Failed to store data.");
                }
            }
        };

        let summary = match highscore {
            Some(highscore) => format_values(&highscore.statistics.values()),
            None => "No highscore found.".to_string(),
        };

        InteractionResponse::ephemeral(format!(
            "**Updated Values**\n{}\n\n**Current Highscore**\n{}",
            changed, summary
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{command::test_support, service::discord::fake::FakeDiscordApi};
    use chrono::Utc;
    use entity::prelude::Submission;
    use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use test_utils::{builder::TestBuilder, factory::highscore::HighscoreFactory};

    async fn run(db: &DatabaseConnection, options: Value) -> InteractionResponse {
        let ctx = test_support::context(db, Arc::new(FakeDiscordApi::new()), Utc::now());

        UpdateCommand
            .handle(
                &test_support::invocation("update", options),
                &Config::for_tests(),
                &ctx,
            )
            .await
    }

    /// Tests an update merging into an existing highscore row.
    ///
    /// Expected: only the provided field changes and the merged row is shown
    #[tokio::test]
    async fn merges_into_highscore() {
        let test = TestBuilder::new()
            .with_statistics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        HighscoreFactory::new(db)
            .user_id("1")
            .name("Tester")
            .level(40)
            .kills(100)
            .build()
            .await
            .unwrap();

        let response = run(db, json!([{ "name": "kills", "type": 4, "value": 250 }])).await;

        assert!(response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some(
                "**Updated Values**\n**Kills**: 250\n\n\
                 **Current Highscore**\n**Name**: Tester\n**Level**: 40\n**Kills**: 250"
            )
        );
        assert_eq!(Submission::find().count(db).await.unwrap(), 1);
    }

    /// Expected: `Error: ` prefixed validation message and nothing stored
    #[tokio::test]
    async fn rejects_invalid_value() {
        let test = TestBuilder::new()
            .with_statistics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let response = run(db, json!([{ "name": "level", "type": 4, "value": 151 }])).await;

        assert!(response.is_ephemeral());
        assert_eq!(response.content(), Some("Error: Level must be at most 150."));
        assert_eq!(Submission::find().count(db).await.unwrap(), 0);
    }

    /// Expected: nothing stored without options and no highscore reported
    #[tokio::test]
    async fn shows_placeholders_without_data() {
        let test = TestBuilder::new()
            .with_statistics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let response = run(db, json!([])).await;

        assert_eq!(
            response.content(),
            Some("**Updated Values**\nNo data provided.\n\n**Current Highscore**\nNo highscore found.")
        );
        assert_eq!(Submission::find().count(db).await.unwrap(), 0);
    }

    /// Expected: ephemeral storage failure when the tables are missing
    #[tokio::test]
    async fn reports_store_failure() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = run(db, json!([{ "name": "kills", "type": 4, "value": 1 }])).await;

        assert_eq!(response.content(), Some("Failed to store data."));
    }
}
