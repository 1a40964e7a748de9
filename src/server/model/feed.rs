//! Payloads of the third-party JSON feeds.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A quote and the character it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// All quotes keyed by category display name.
pub type QuoteBook = BTreeMap<String, Vec<String>>;

/// Community statistics snapshot.
///
/// Counters default to zero when a platform is missing from the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reddit: RedditStats,
    #[serde(default)]
    pub discord: DiscordStats,
    #[serde(default)]
    pub tiktok: TiktokStats,
    #[serde(default)]
    pub youtube: YoutubeStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedditStats {
    pub subscribers: i64,
    pub active_user_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscordStats {
    pub approximate_member_count: i64,
    pub approximate_presence_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TiktokStats {
    pub follower_count: i64,
    pub video_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct YoutubeStats {
    pub subscriber_count: i64,
    pub video_count: i64,
}

/// Layout selected by the `/stats` `type` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKind {
    All,
    Reddit,
    Discord,
    Tiktok,
    Youtube,
}

impl StatsKind {
    pub const ALL: [StatsKind; 5] = [
        StatsKind::All,
        StatsKind::Reddit,
        StatsKind::Discord,
        StatsKind::Tiktok,
        StatsKind::Youtube,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Reddit => "reddit",
            Self::Discord => "discord",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}
