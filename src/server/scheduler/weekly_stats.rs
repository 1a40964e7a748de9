use crate::server::{
    command::CommandContext, config::Config, error::AppError, model::channel::OutgoingMessage,
    model::feed::StatsKind,
};

/// Posts the combined community stats to the main channel.
pub async fn post_weekly_stats(config: &Config, ctx: &CommandContext) -> Result<(), AppError> {
    let stats = ctx.feeds.community_stats(&config.stats_url).await?;

    ctx.discord
        .post_message(
            config.discord_main_channel_id,
            OutgoingMessage::text(ctx.format.stats(&stats, StatsKind::All)),
        )
        .await?;

    Ok(())
}
