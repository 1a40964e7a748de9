//! Outbound Discord REST capability.
//!
//! Command handlers and scheduled jobs talk to Discord only through `DiscordApi`, which
//! keeps them testable without network access. `SerenityDiscordApi` is the production
//! implementation over Serenity's HTTP client.

use serenity::{
    all::{
        ChannelId, ChannelType, CreateAllowedMentions, CreateChannel, CreateMessage, GuildId,
        PermissionOverwrite, PermissionOverwriteType, RoleId, UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    command::descriptor::CommandDescriptor,
    error::AppError,
    interaction::response::{AllowedMentions, MentionKind},
    model::channel::{
        ChannelKind, ChannelSummary, CreateChannelParam, OutgoingMessage, OverwriteTarget,
    },
    util::parse::parse_u64_from_str,
};

/// Discord operations used by the bot.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Creates a guild channel.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the new channel
    /// - `Err(AppError::DiscordErr)` - Discord rejected the request
    async fn create_channel(&self, guild_id: u64, channel: CreateChannelParam)
        -> Result<u64, AppError>;

    /// Posts a message to a channel.
    async fn post_message(&self, channel_id: u64, message: OutgoingMessage) -> Result<(), AppError>;

    /// Lists all channels of a guild.
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError>;

    /// Deletes a channel.
    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError>;

    /// Names of the currently registered global application commands.
    async fn list_commands(&self) -> Result<Vec<String>, AppError>;

    /// Replaces all global application commands with the given descriptors.
    async fn register_commands(&self, commands: &[CommandDescriptor]) -> Result<(), AppError>;
}

/// `DiscordApi` backed by Serenity's REST client.
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    /// Creates a new SerenityDiscordApi instance.
    ///
    /// # Arguments
    /// - `http` - Serenity HTTP client with the bot token and application id set
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn create_channel(
        &self,
        guild_id: u64,
        channel: CreateChannelParam,
    ) -> Result<u64, AppError> {
        let kind = match channel.kind {
            ChannelKind::Text => ChannelType::Text,
            ChannelKind::Voice => ChannelType::Voice,
        };

        let overwrites = channel.permissions.iter().map(|permission| PermissionOverwrite {
            allow: permission.allow,
            deny: permission.deny,
            kind: match permission.target {
                OverwriteTarget::Role(id) => PermissionOverwriteType::Role(RoleId::new(id)),
                OverwriteTarget::Member(id) => PermissionOverwriteType::Member(UserId::new(id)),
            },
        });

        let mut builder = CreateChannel::new(channel.name)
            .kind(kind)
            .permissions(overwrites.collect::<Vec<_>>());
        if let Some(parent_id) = channel.parent_id {
            builder = builder.category(ChannelId::new(parent_id));
        }
        if let Some(user_limit) = channel.user_limit {
            builder = builder.user_limit(user_limit);
        }

        let created = GuildId::new(guild_id)
            .create_channel(&self.http, builder)
            .await?;

        tracing::debug!("Created channel {} ({})", created.name, created.id);

        Ok(created.id.get())
    }

    async fn post_message(&self, channel_id: u64, message: OutgoingMessage) -> Result<(), AppError> {
        let mut builder = CreateMessage::new().content(message.content);
        if let Some(mentions) = message.allowed_mentions {
            builder = builder.allowed_mentions(to_serenity_mentions(&mentions)?);
        }

        ChannelId::new(channel_id)
            .send_message(&self.http, builder)
            .await?;

        Ok(())
    }

    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
        let channels = GuildId::new(guild_id).channels(&self.http).await?;

        Ok(channels
            .into_values()
            .map(|channel| ChannelSummary {
                id: channel.id.get(),
                name: channel.name,
                parent_id: channel.parent_id.map(|parent| parent.get()),
            })
            .collect())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id).delete(&self.http).await?;

        Ok(())
    }

    async fn list_commands(&self) -> Result<Vec<String>, AppError> {
        let commands = self.http.get_global_commands().await?;

        Ok(commands.into_iter().map(|command| command.name).collect())
    }

    async fn register_commands(&self, commands: &[CommandDescriptor]) -> Result<(), AppError> {
        let registered = self.http.create_global_commands(&commands).await?;

        tracing::info!("Registered {} global commands", registered.len());

        Ok(())
    }
}

fn to_serenity_mentions(mentions: &AllowedMentions) -> Result<CreateAllowedMentions, AppError> {
    let users = mentions
        .users
        .iter()
        .map(|id| parse_u64_from_str(id).map(UserId::new))
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = CreateAllowedMentions::new()
        .all_users(mentions.parse.contains(&MentionKind::Users))
        .all_roles(mentions.parse.contains(&MentionKind::Roles));
    if !users.is_empty() {
        builder = builder.users(users);
    }

    Ok(builder)
}

#[cfg(test)]
pub mod fake {
    //! Recording stand-in for Discord used by handler and job tests.

    use super::*;
    use std::sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Mutex,
    };

    /// A recorded outbound call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DiscordCall {
        CreateChannel {
            guild_id: u64,
            channel: CreateChannelParam,
        },
        PostMessage {
            channel_id: u64,
            message: OutgoingMessage,
        },
        GuildChannels {
            guild_id: u64,
        },
        DeleteChannel {
            channel_id: u64,
        },
        ListCommands,
        RegisterCommands {
            names: Vec<String>,
        },
    }

    /// Records every call and answers with canned data.
    #[derive(Default)]
    pub struct FakeDiscordApi {
        calls: Mutex<Vec<DiscordCall>>,
        channels: Mutex<Vec<ChannelSummary>>,
        next_channel_id: AtomicU64,
        failing: AtomicBool,
    }

    impl FakeDiscordApi {
        /// New channels get IDs starting at 9000.
        pub fn new() -> Self {
            Self {
                next_channel_id: AtomicU64::new(9000),
                ..Default::default()
            }
        }

        /// Makes every subsequent call fail.
        pub fn failing() -> Self {
            let api = Self::new();
            api.failing.store(true, Ordering::SeqCst);
            api
        }

        /// Channels returned by `guild_channels`.
        pub fn with_channels(self, channels: Vec<ChannelSummary>) -> Self {
            *self.channels.lock().unwrap() = channels;
            self
        }

        pub fn calls(&self) -> Vec<DiscordCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: DiscordCall) -> Result<(), AppError> {
            self.calls.lock().unwrap().push(call);
            if self.failing.load(Ordering::SeqCst) {
                return Err(serenity::Error::Other("discord unavailable").into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl DiscordApi for FakeDiscordApi {
        async fn create_channel(
            &self,
            guild_id: u64,
            channel: CreateChannelParam,
        ) -> Result<u64, AppError> {
            self.record(DiscordCall::CreateChannel { guild_id, channel })?;
            Ok(self.next_channel_id.fetch_add(1, Ordering::SeqCst))
        }

        async fn post_message(
            &self,
            channel_id: u64,
            message: OutgoingMessage,
        ) -> Result<(), AppError> {
            self.record(DiscordCall::PostMessage {
                channel_id,
                message,
            })
        }

        async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
            self.record(DiscordCall::GuildChannels { guild_id })?;
            Ok(self.channels.lock().unwrap().clone())
        }

        async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError> {
            self.record(DiscordCall::DeleteChannel { channel_id })
        }

        async fn list_commands(&self) -> Result<Vec<String>, AppError> {
            self.record(DiscordCall::ListCommands)?;
            Ok(Vec::new())
        }

        async fn register_commands(
            &self,
            commands: &[CommandDescriptor],
        ) -> Result<(), AppError> {
            self.record(DiscordCall::RegisterCommands {
                names: commands.iter().map(|c| c.name.to_string()).collect(),
            })
        }
    }
}
