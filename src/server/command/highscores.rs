use serenity::async_trait;

use crate::server::{
    command::{descriptor::CommandDescriptor, Command, CommandContext},
    config::Config,
    data::highscore::HighscoreRepository,
    interaction::{model::Interaction, response::InteractionResponse},
};

/// `/highscores`: best value of every statistics field and who holds it.
pub struct HighscoresCommand;

#[async_trait]
impl Command for HighscoresCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new(
            "highscores",
            "Display highscores of all HellDads who /update their results.",
        )
    }

    async fn handle(
        &self,
        _interaction: &Interaction,
        _config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let entries = HighscoreRepository::new(&ctx.db)
            .get_best_per_field()
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to read highscores: {}", e);
                Vec::new()
            });

        if entries.is_empty() {
            return InteractionResponse::message("No highscores available.");
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                format!(
                    "**{}**: {} ({} | <@{}>)",
                    entry.field.label(),
                    entry.value,
                    entry.name.as_deref().unwrap_or(&entry.user_id),
                    entry.user_id
                )
            })
            .collect();

        InteractionResponse::message(lines.join("\n"))
    }
}
