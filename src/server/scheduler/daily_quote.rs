use crate::server::{
    command::CommandContext, config::Config, error::AppError, model::channel::OutgoingMessage,
};

/// Posts the quote of the day to the main channel.
///
/// # Returns
/// - `Ok(())` - Quote posted
/// - `Err(AppError::FeedErr)` - Daily quote feed unavailable
/// - `Err(AppError::DiscordErr)` - Message could not be posted
pub async fn post_daily_quote(config: &Config, ctx: &CommandContext) -> Result<(), AppError> {
    let quote = ctx.feeds.daily_quote(&config.quotes_daily_url).await?;

    ctx.discord
        .post_message(
            config.discord_main_channel_id,
            OutgoingMessage::text(ctx.format.quote(&quote.text, &quote.author)),
        )
        .await?;

    tracing::info!("Posted daily quote by {}", quote.author);

    Ok(())
}
