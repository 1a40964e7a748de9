use regex::Regex;
use serenity::async_trait;
use std::sync::LazyLock;

use crate::server::{
    command::{
        descriptor::{choices, CommandDescriptor, OptionDescriptor},
        Command, CommandContext,
    },
    config::Config,
    interaction::{
        model::Interaction,
        response::{AllowedMentions, InteractionResponse},
    },
    model::channel::{ChannelKind, CreateChannelParam},
    util::slug,
};

/// Lifetime used when the caller does not pick one.
pub const DEFAULT_DURATION: &str = "3h";

static FRIEND_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("friend code pattern is valid"));

/// `/lfg`: creates a temporary squad voice channel and announces it.
///
/// The duration is encoded in the channel name so the cleanup job can tell when the
/// channel expires.
pub struct LfgCommand;

#[async_trait]
impl Command for LfgCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("lfg", "Create a temporary squad voice channel")
            .option(
                OptionDescriptor::string("faction", "Preferred faction").choices(choices(&[
                    ("Any", "any"),
                    ("Automatons", "automatons"),
                    ("Terminids", "terminids"),
                    ("Illuminates", "illuminates"),
                ])),
            )
            .option(
                OptionDescriptor::string("activity", "What are you diving for?").choices(
                    choices(&[
                        ("Major Order", "major_order"),
                        ("Event", "event"),
                        ("Fun", "fun"),
                        ("Farming", "farming"),
                        ("Training", "training"),
                        ("Testing", "testing"),
                        ("Video Recording", "video_recording"),
                        ("Streaming", "streaming"),
                    ]),
                ),
            )
            .option(
                OptionDescriptor::string("difficulty", "Requested difficulty").choices(choices(&[
                    ("Low (1–3)", "low"),
                    ("Medium (4–6)", "medium"),
                    ("High (7–9)", "high"),
                    ("Super (10)", "super"),
                ])),
            )
            .option(
                OptionDescriptor::string("duration", "How long the channel stays open").choices(
                    choices(&[
                        ("3 hours", "3h"),
                        ("6 hours", "6h"),
                        ("12 hours", "12h"),
                        ("24 hours", "24h"),
                    ]),
                ),
            )
            .option(OptionDescriptor::string(
                "friendcode",
                "Your Helldivers friend code without # (format: 1234-5678)",
            ))
            .option(OptionDescriptor::string(
                "comment",
                "Short custom instructions (e.g. “can’t talk”)",
            ))
            .option(
                OptionDescriptor::string("max_players", "Limit how many players can join").choices(
                    choices(&[
                        ("Unlimited", "unlimited"),
                        ("2", "2"),
                        ("3", "3"),
                        ("4", "4"),
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
        let descriptor = self.descriptor();
        let label = |option: &str, value: Option<&str>, fallback: &'static str| {
            value
                .and_then(|value| descriptor.choice_name(option, value))
                .unwrap_or(fallback)
        };

        let faction = interaction.option_str("faction").unwrap_or("any");
        let activity = interaction.option_str("activity");
        let difficulty = interaction.option_str("difficulty");
        let duration = interaction
            .option_str("duration")
            .filter(|value| descriptor.choice_name("duration", value).is_some())
            .unwrap_or(DEFAULT_DURATION);
        let friendcode = interaction.option_str("friendcode");
        let comment = interaction.option_str("comment");
        let max_players = interaction.option_str("max_players").unwrap_or("unlimited");

        if friendcode.is_some_and(|code| !FRIEND_CODE.is_match(code)) {
            return InteractionResponse::ephemeral(
                "Invalid friend code format. Please use `1234-5678` (without #).",
            );
        }

        let Some(user_id) = interaction.invoker_id() else {
            tracing::warn!("lfg invoked without a user");
            return InteractionResponse::ephemeral(
                "Failed to create a squad channel. Please try again.",
            );
        };

        let name = [Some("lfg"), Some(duration), difficulty, Some(faction), activity]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("-");
        let channel = CreateChannelParam {
            name: slug::channel_name(&name),
            kind: ChannelKind::Voice,
            parent_id: Some(config.discord_lfg_category_id),
            user_limit: Some(max_players.parse().unwrap_or(0)),
            permissions: Vec::new(),
        };

        let channel_id = match ctx
            .discord
            .create_channel(config.discord_guild_id, channel)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to create lfg channel: {}", e);
                return InteractionResponse::ephemeral(
                    "Failed to create a squad channel. Please try again.",
                );
            }
        };

        let mut summary = vec![
            format!("**Faction:** {}", label("faction", Some(faction), "Any")),
            format!("**Activity:** {}", label("activity", activity, "Any")),
            format!("**Difficulty:** {}", label("difficulty", difficulty, "Any")),
            format!(
                "**Max Players:** {}",
                label("max_players", Some(max_players), "Unlimited")
            ),
            format!("**Duration:** {}", label("duration", Some(duration), "3 hours")),
        ];
        if let Some(code) = friendcode {
            summary.push(format!("**Friend Code:** #{}", code));
        }
        if let Some(comment) = comment {
            summary.push(format!("**Note:** {}", comment));
        }

        InteractionResponse::message(format!(
            "<@{}> is looking for a group (@LFG) in squad voice channel: <#{}>\n{}",
            user_id,
            channel_id,
            summary.join("\n")
        ))
        .with_allowed_mentions(AllowedMentions::users([user_id.to_string()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        command::test_support,
        scheduler::lfg_cleanup,
        service::discord::fake::{DiscordCall, FakeDiscordApi},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use test_utils::builder::TestBuilder;

    async fn run(discord: Arc<FakeDiscordApi>, options: Value) -> InteractionResponse {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let ctx = test_support::context(db, discord, Utc::now());

        LfgCommand
            .handle(
                &test_support::invocation("lfg", options),
                &Config::for_tests(),
                &ctx,
            )
            .await
    }

    /// Tests a fully specified request.
    ///
    /// Expected: voice channel named after the options, public summary pinging only the user
    #[tokio::test]
    async fn creates_squad_channel() {
        let discord = Arc::new(FakeDiscordApi::new());

        let response = run(
            discord.clone(),
            json!([
                { "name": "faction", "type": 3, "value": "terminids" },
                { "name": "activity", "type": 3, "value": "major_order" },
                { "name": "difficulty", "type": 3, "value": "super" },
                { "name": "duration", "type": 3, "value": "12h" },
                { "name": "friendcode", "type": 3, "value": "1234-5678" },
                { "name": "comment", "type": 3, "value": "can't talk" },
                { "name": "max_players", "type": 3, "value": "4" },
            ]),
        )
        .await;

        assert!(!response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some(
                "<@1> is looking for a group (@LFG) in squad voice channel: <#9000>\n\
                 **Faction:** Terminids\n\
                 **Activity:** Major Order\n\
                 **Difficulty:** Super (10)\n\
                 **Max Players:** 4\n\
                 **Duration:** 12 hours\n\
                 **Friend Code:** #1234-5678\n\
                 **Note:** can't talk"
            )
        );
        let InteractionResponse::ChannelMessage(data) = &response else {
            panic!("expected a message");
        };
        assert_eq!(
            data.allowed_mentions,
            Some(AllowedMentions::users(["1".to_string()]))
        );

        let calls = discord.calls();
        let DiscordCall::CreateChannel { channel, .. } = &calls[0] else {
            panic!("expected channel creation");
        };
        assert_eq!(channel.name, "lfg-12h-super-terminids-majorord");
        assert_eq!(lfg_cleanup::lifetime_hours(&channel.name), Some(12));
        assert_eq!(channel.kind, ChannelKind::Voice);
        assert_eq!(channel.parent_id, Some(500));
        assert_eq!(channel.user_limit, Some(4));
    }

    /// Expected: defaults fill in faction, duration and an unlimited channel
    #[tokio::test]
    async fn applies_defaults() {
        let discord = Arc::new(FakeDiscordApi::new());

        let response = run(discord.clone(), json!([])).await;

        let content = response.content().unwrap();
        assert!(content.contains("**Faction:** Any\n**Activity:** Any\n**Difficulty:** Any"));
        assert!(content.contains("**Max Players:** Unlimited\n**Duration:** 3 hours"));
        assert!(!content.contains("Friend Code"));

        let DiscordCall::CreateChannel { channel, .. } = &discord.calls()[0] else {
            panic!("expected channel creation");
        };
        assert_eq!(channel.name, "lfg-3h-any");
        assert_eq!(lfg_cleanup::lifetime_hours(&channel.name), Some(3));
        assert_eq!(channel.user_limit, Some(0));
    }

    /// Expected: malformed friend code rejected before any channel is created
    #[tokio::test]
    async fn rejects_invalid_friend_code() {
        let discord = Arc::new(FakeDiscordApi::new());

        let response = run(
            discord.clone(),
            json!([{ "name": "friendcode", "type": 3, "value": "#1234-5678" }]),
        )
        .await;

        assert!(response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some("Invalid friend code format. Please use `1234-5678` (without #).")
        );
        assert!(discord.calls().is_empty());
    }

    /// Expected: ephemeral retry message when Discord rejects the channel
    #[tokio::test]
    async fn reports_channel_failure() {
        let response = run(Arc::new(FakeDiscordApi::failing()), json!([])).await;

        assert!(response.is_ephemeral());
        assert_eq!(
            response.content(),
            Some("Failed to create a squad channel. Please try again.")
        );
    }
}
