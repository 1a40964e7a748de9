//! Discord channel and message parameters for outbound REST calls.
//!
//! These types keep command handlers independent of the HTTP client so the Discord
//! capability can be swapped out in tests.

use serenity::all::Permissions;

use crate::server::interaction::response::AllowedMentions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
}

/// Whom a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteTarget {
    Role(u64),
    Member(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPermission {
    pub target: OverwriteTarget,
    pub allow: Permissions,
    pub deny: Permissions,
}

impl ChannelPermission {
    pub fn allow(target: OverwriteTarget, allow: Permissions) -> Self {
        Self {
            target,
            allow,
            deny: Permissions::empty(),
        }
    }

    pub fn deny(target: OverwriteTarget, deny: Permissions) -> Self {
        Self {
            target,
            allow: Permissions::empty(),
            deny,
        }
    }
}

/// Parameters for creating a guild channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelParam {
    pub name: String,
    pub kind: ChannelKind,
    /// Category the channel is created in.
    pub parent_id: Option<u64>,
    /// Voice channels only; zero means unlimited.
    pub user_limit: Option<u32>,
    pub permissions: Vec<ChannelPermission>,
}

/// A message posted by the bot outside of an interaction reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: String,
    /// `None` keeps Discord's default mention parsing.
    pub allowed_mentions: Option<AllowedMentions>,
}

impl OutgoingMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            allowed_mentions: None,
        }
    }
}

/// Minimal view of an existing guild channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    pub id: u64,
    pub name: String,
    pub parent_id: Option<u64>,
}
