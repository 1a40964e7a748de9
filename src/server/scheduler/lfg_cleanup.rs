use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::server::{
    command::CommandContext, config::Config, error::AppError, model::channel::ChannelSummary,
    util::snowflake,
};

static LIFETIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w{3}-(3|6|12|24)h-").expect("lifetime pattern is valid"));

/// Lifetime encoded in an LFG channel name such as `lfg-6h-high-any`.
pub fn lifetime_hours(name: &str) -> Option<i64> {
    LIFETIME.captures(name)?.get(1)?.as_str().parse().ok()
}

/// Whether a channel's lifetime has run out at `now`.
///
/// The creation time comes from the channel's snowflake ID. Channels without a
/// lifetime in their name never expire.
pub fn is_expired(channel: &ChannelSummary, now: DateTime<Utc>) -> bool {
    let Some(hours) = lifetime_hours(&channel.name) else {
        return false;
    };

    snowflake::created_at(channel.id) + Duration::hours(hours) <= now
}

/// Deletes expired voice channels in the LFG category.
///
/// A failed deletion is logged and the remaining channels are still processed.
///
/// # Returns
/// - `Ok(usize)` - Number of channels deleted
/// - `Err(AppError::DiscordErr)` - Guild channels could not be listed
pub async fn cleanup_lfg_channels(config: &Config, ctx: &CommandContext) -> Result<usize, AppError> {
    let now = ctx.now();
    let channels = ctx.discord.guild_channels(config.discord_guild_id).await?;

    let mut deleted = 0;
    for channel in channels.iter().filter(|channel| {
        channel.parent_id == Some(config.discord_lfg_category_id) && is_expired(channel, now)
    }) {
        match ctx.discord.delete_channel(channel.id).await {
            Ok(()) => deleted += 1,
            Err(e) => tracing::error!("Failed to delete LFG channel {}: {}", channel.name, e),
        }
    }

    Ok(deleted)
}
