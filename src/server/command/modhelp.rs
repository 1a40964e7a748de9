use serenity::{all::Permissions, async_trait};

use crate::server::{
    command::{
        descriptor::{CommandDescriptor, OptionDescriptor},
        Command, CommandContext,
    },
    config::Config,
    interaction::{
        model::Interaction,
        response::{AllowedMentions, InteractionResponse, MentionKind},
    },
    model::channel::{
        ChannelKind, ChannelPermission, CreateChannelParam, OutgoingMessage, OverwriteTarget,
    },
    util::slug,
};

/// `/modhelp message`: opens a private support channel shared with the moderators.
pub struct ModhelpCommand;

impl ModhelpCommand {
    /// Text channel under the support category hidden from everyone except the
    /// requester, the moderators and the bot itself.
    fn support_channel(config: &Config, user_id: u64, username: &str, message: &str) -> CreateChannelParam {
        let members = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

        CreateChannelParam {
            name: format!("modhelp-{}-{}", username, slug::words(message, "help")),
            kind: ChannelKind::Text,
            parent_id: Some(config.discord_support_category_id),
            user_limit: None,
            permissions: vec![
                ChannelPermission::deny(
                    OverwriteTarget::Role(config.discord_guild_id),
                    Permissions::VIEW_CHANNEL,
                ),
                ChannelPermission::allow(OverwriteTarget::Member(user_id), members),
                ChannelPermission::allow(
                    OverwriteTarget::Role(config.discord_mods_role_id),
                    members,
                ),
                ChannelPermission::allow(
                    OverwriteTarget::Member(config.discord_application_id),
                    members,
                ),
            ],
        }
    }
}

#[async_trait]
impl Command for ModhelpCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new(
            "modhelp",
            "Contact the moderators for help in a private chat",
        )
        .option(OptionDescriptor::string("message", "Your private message for the mods").required())
    }

    async fn handle(
        &self,
        interaction: &Interaction,
        config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let Some(user_id) = interaction.invoker_id().and_then(|id| id.parse::<u64>().ok()) else {
            tracing::warn!("modhelp invoked without a valid user");
            return InteractionResponse::ephemeral("Failed to contact mods.");
        };
        let username = interaction.invoker_name().unwrap_or("user");
        let message = interaction.option_str("message").unwrap_or_default();
        let source = interaction.channel_id.as_deref().unwrap_or_default();

        let channel = Self::support_channel(config, user_id, username, message);
        let channel_id = match ctx
            .discord
            .create_channel(config.discord_guild_id, channel)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to create support channel for {}: {}", user_id, e);
                return InteractionResponse::ephemeral("Failed to create support channel.");
            }
        };

        let notice = OutgoingMessage {
            content: format!(
                "<@&{}> New request from <@{}> in <#{}>:\n{}",
                config.discord_mods_role_id, user_id, source, message
            ),
            allowed_mentions: Some(AllowedMentions {
                parse: vec![MentionKind::Users, MentionKind::Roles],
                users: Vec::new(),
            }),
        };
        if let Err(e) = ctx.discord.post_message(channel_id, notice).await {
            tracing::error!("Failed to notify mods in {}: {}", channel_id, e);
            return InteractionResponse::ephemeral("Failed to contact mods.");
        }

        InteractionResponse::ephemeral(format!(
            "The mods have been notified. Your private support channel is <#{}>",
            channel_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        command::test_support,
        service::discord::fake::{DiscordCall, FakeDiscordApi},
    };
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;
    use test_utils::builder::TestBuilder;

    fn invocation() -> Interaction {
        test_support::invocation(
            "modhelp",
            json!([{ "name": "message", "type": 3, "value": "Someone is being rude in voice!" }]),
        )
    }

    /// Tests the full support flow against a recording Discord.
    ///
    /// Expected: private text channel created, mods pinged in it, ephemeral link returned
    #[tokio::test]
    async fn opens_support_channel() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let discord = Arc::new(FakeDiscordApi::new());
        let ctx = test_support::context(db, discord.clone(), Utc::now());
        let config = Config::for_tests();

        let response = ModhelpCommand.handle(&invocation(), &config, &ctx).await;

        assert!(response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some("The mods have been notified. Your private support channel is <#9000>")
        );

        let calls = discord.calls();
        assert_eq!(calls.len(), 2);
        let DiscordCall::CreateChannel { guild_id, channel } = &calls[0] else {
            panic!("expected channel creation, got {:?}", calls[0]);
        };
        assert_eq!(*guild_id, 300);
        assert_eq!(channel.name, "modhelp-Tester-someone-is-being-rude-in");
        assert_eq!(channel.kind, ChannelKind::Text);
        assert_eq!(channel.parent_id, Some(400));
        assert_eq!(
            channel.permissions[0],
            ChannelPermission::deny(OverwriteTarget::Role(300), Permissions::VIEW_CHANNEL)
        );
        let allowed: Vec<_> = channel.permissions[1..].iter().map(|p| p.target).collect();
        assert_eq!(
            allowed,
            vec![
                OverwriteTarget::Member(1),
                OverwriteTarget::Role(600),
                OverwriteTarget::Member(100)
            ]
        );

        let DiscordCall::PostMessage { channel_id, message } = &calls[1] else {
            panic!("expected message, got {:?}", calls[1]);
        };
        assert_eq!(*channel_id, 9000);
        assert_eq!(
            message.content,
            "<@&600> New request from <@1> in <#2>:\nSomeone is being rude in voice!"
        );
    }

    /// Expected: ephemeral creation failure and no message posted
    #[tokio::test]
    async fn reports_channel_failure() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let discord = Arc::new(FakeDiscordApi::failing());
        let ctx = test_support::context(db, discord.clone(), Utc::now());

        let response = ModhelpCommand
            .handle(&invocation(), &Config::for_tests(), &ctx)
            .await;

        assert!(response.is_ephemeral());
        assert_eq!(response.content(), Some("Failed to create support channel."));
        assert_eq!(discord.calls().len(), 1);
    }
}
