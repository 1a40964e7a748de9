use serenity::async_trait;

use crate::server::{
    command::{
        descriptor::{choices, CommandDescriptor, OptionDescriptor},
        Command, CommandContext,
    },
    config::Config,
    interaction::{model::Interaction, response::InteractionResponse},
    model::feed::StatsKind,
};

/// `/stats [type]`: community statistics across platforms.
pub struct StatsCommand;

#[async_trait]
impl Command for StatsCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("stats", "Displays HellDads community stats").option(
            OptionDescriptor::string("type", "Which stats to display (optional)").choices(
                choices(&[
                    ("all", "all"),
                    ("reddit", "reddit"),
                    ("discord", "discord"),
                    ("tiktok", "tiktok"),
                    ("youtube", "youtube"),
                ]),
            ),
        )
    }

    async fn handle(
        &self,
        interaction: &Interaction,
        config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let kind = match interaction.option_str("type") {
            None => StatsKind::All,
            Some(key) => match StatsKind::from_key(key) {
                Some(kind) => kind,
                None => return InteractionResponse::ephemeral("Unknown type."),
            },
        };

        match ctx.feeds.community_stats(&config.stats_url).await {
            Ok(stats) => InteractionResponse::message(ctx.format.stats(&stats, kind)),
            Err(e) => {
                tracing::error!("Failed to fetch community stats: {}", e);
                InteractionResponse::ephemeral(
                    "Could not fetch community stats. Please try again later.",
                )
            }
        }
    }
}
