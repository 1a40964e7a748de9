//! Text formatting shared by commands and scheduled jobs.

use chrono::{DateTime, Utc};

use crate::server::model::feed::{CommunityStats, StatsKind};

const SITE_LINK: &str = "[www.helldads.org](<https://www.helldads.org>)";
const REDDIT_LINK: &str = "[Reddit](<https://reddit.com/r/HellDads>)";
const DISCORD_LINK: &str = "[Discord](<https://tinyurl.com/discord-helldads>)";
const TIKTOK_LINK: &str = "[TikTok](<https://www.tiktok.com/@helldads>)";
const YOUTUBE_LINK: &str = "[YouTube](<https://www.youtube.com/@HellDadsHQ>)";

/// Discord timestamp rendering styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// `d`, e.g. 06/01/2025
    ShortDate,
    /// `t`, e.g. 6:00 AM
    ShortTime,
    /// `R`, e.g. 3 days ago
    Relative,
}

impl TimestampStyle {
    fn code(self) -> char {
        match self {
            Self::ShortDate => 'd',
            Self::ShortTime => 't',
            Self::Relative => 'R',
        }
    }
}

/// Formatting service, constructed once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Formatter {
    thousands_separator: char,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// en-US conventions.
    pub fn new() -> Self {
        Self {
            thousands_separator: ',',
        }
    }

    /// Formats an integer with thousands separators, e.g. `1,234,567`.
    pub fn number(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if value < 0 {
            grouped.push('-');
        }
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        grouped
    }

    /// Formats a quote for posting.
    pub fn quote(&self, text: &str, author: &str) -> String {
        format!("🗨️ *\"{}\"*\n\n— **{}**", text, author)
    }

    /// Discord timestamp marker rendered in each reader's local time.
    pub fn timestamp(&self, time: DateTime<Utc>, style: TimestampStyle) -> String {
        format!("<t:{}:{}>", time.timestamp(), style.code())
    }

    /// Formats the community statistics in the requested layout.
    ///
    /// # Arguments
    /// - `stats` - Statistics snapshot from the feed
    /// - `kind` - `All` for the combined summary or a single platform
    pub fn stats(&self, stats: &CommunityStats, kind: StatsKind) -> String {
        let n = |value: i64| self.number(value);
        let updated = match stats.last_updated {
            Some(time) => format!(
                "Last updated: {}, {}",
                self.timestamp(time, TimestampStyle::Relative),
                SITE_LINK
            ),
            None => format!("Last updated: unknown, {}", SITE_LINK),
        };

        match kind {
            StatsKind::All => format!(
                "**HellDads Community Stats**\n\n\
                 {}: {} subscribers, {} active users\n\
                 {}: {} members, {} online\n\
                 {}: {} followers, {} videos\n\
                 {}: {} subscribers, {} videos\n\n\
                 {}",
                REDDIT_LINK,
                n(stats.reddit.subscribers),
                n(stats.reddit.active_user_count),
                DISCORD_LINK,
                n(stats.discord.approximate_member_count),
                n(stats.discord.approximate_presence_count),
                TIKTOK_LINK,
                n(stats.tiktok.follower_count),
                n(stats.tiktok.video_count),
                YOUTUBE_LINK,
                n(stats.youtube.subscriber_count),
                n(stats.youtube.video_count),
                updated
            ),
            StatsKind::Reddit => format!(
                "**HellDads {} Stats**\nSubscribers: {}\nActive users: {}\n\n{}",
                REDDIT_LINK,
                n(stats.reddit.subscribers),
                n(stats.reddit.active_user_count),
                updated
            ),
            StatsKind::Discord => format!(
                "**HellDads {} Stats**\nMembers: {}\nOnline: {}\n\n{}",
                DISCORD_LINK,
                n(stats.discord.approximate_member_count),
                n(stats.discord.approximate_presence_count),
                updated
            ),
            StatsKind::Tiktok => format!(
                "**HellDads {} Stats**\nFollower: {}\nVideos: {}\n\n{}",
                TIKTOK_LINK,
                n(stats.tiktok.follower_count),
                n(stats.tiktok.video_count),
                updated
            ),
            StatsKind::Youtube => format!(
                "**HellDads {} Stats**\nSubscribers: {}\nVideos: {}\n\n{}",
                YOUTUBE_LINK,
                n(stats.youtube.subscriber_count),
                n(stats.youtube.video_count),
                updated
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::feed::{RedditStats, YoutubeStats};

    fn stats() -> CommunityStats {
        CommunityStats {
            last_updated: DateTime::from_timestamp(1_736_143_200, 0),
            reddit: RedditStats {
                subscribers: 12345,
                active_user_count: 67,
            },
            youtube: YoutubeStats {
                subscriber_count: 5000,
                video_count: 30,
            },
            ..Default::default()
        }
    }

    #[test]
    fn number_groups_thousands() {
        let format = Formatter::new();

        assert_eq!(format.number(1_234_567), "1,234,567");
        assert_eq!(format.number(999), "999");
        assert_eq!(format.number(1000), "1,000");
        assert_eq!(format.number(0), "0");
        assert_eq!(format.number(-12_500), "-12,500");
    }

    #[test]
    fn quote_layout() {
        assert_eq!(
            Formatter::new().quote("Freedom never sleeps.", "Democracy Officer"),
            "🗨️ *\"Freedom never sleeps.\"*\n\n— **Democracy Officer**"
        );
    }

    /// Expected: combined layout lists every platform and the relative update time
    #[test]
    fn stats_all_layout() {
        let text = Formatter::new().stats(&stats(), StatsKind::All);

        assert!(text.starts_with("**HellDads Community Stats**\n\n"));
        assert!(text.contains(
            "[Reddit](<https://reddit.com/r/HellDads>): 12,345 subscribers, 67 active users\n"
        ));
        assert!(text.contains("[Discord](<https://tinyurl.com/discord-helldads>): 0 members, 0 online\n"));
        assert!(text.ends_with(
            "Last updated: <t:1736143200:R>, [www.helldads.org](<https://www.helldads.org>)"
        ));
    }

    #[test]
    fn stats_single_platform_layout() {
        let text = Formatter::new().stats(&stats(), StatsKind::Youtube);

        assert_eq!(
            text,
            "**HellDads [YouTube](<https://www.youtube.com/@HellDadsHQ>) Stats**\n\
             Subscribers: 5,000\nVideos: 30\n\n\
             Last updated: <t:1736143200:R>, [www.helldads.org](<https://www.helldads.org>)"
        );
    }
}
