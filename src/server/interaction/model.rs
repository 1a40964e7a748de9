use serde::Deserialize;
use serde_json::Value;

use crate::server::error::interaction::InteractionError;

/// Discriminant of an inbound interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u64")]
pub enum InteractionKind {
    /// Protocol liveness check sent by Discord when the endpoint is configured.
    Ping,
    /// A slash command invocation.
    ApplicationCommand,
    /// Components, autocomplete, modals: not handled by this bot.
    Other(u64),
}

impl From<u64> for InteractionKind {
    fn from(value: u64) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Other(other),
        }
    }
}

impl InteractionKind {
    pub fn code(self) -> u64 {
        match self {
            Self::Ping => 1,
            Self::ApplicationCommand => 2,
            Self::Other(code) => code,
        }
    }
}

/// One decoded interaction. Lives only for the duration of its request.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(default)]
    pub data: Option<CommandData>,
    /// Present for invocations inside a guild.
    #[serde(default)]
    pub member: Option<Member>,
    /// Present for invocations in direct messages.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl Interaction {
    /// Decodes an authenticated request body.
    ///
    /// # Arguments
    /// - `raw_body` - Request body exactly as received
    ///
    /// # Returns
    /// - `Ok(Interaction)` - Valid JSON with a numeric `type` field
    /// - `Err(InteractionError::MalformedPayload)` - Invalid JSON, missing `type`, or an
    ///   application command without `data`
    pub fn parse(raw_body: &[u8]) -> Result<Self, InteractionError> {
        let interaction: Interaction = serde_json::from_slice(raw_body)
            .map_err(|e| InteractionError::MalformedPayload(e.to_string()))?;

        if interaction.kind == InteractionKind::ApplicationCommand && interaction.data.is_none() {
            return Err(InteractionError::MalformedPayload(
                "application command without data".to_string(),
            ));
        }

        Ok(interaction)
    }

    /// Name of the invoked command, if this is a command invocation.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.name.as_str())
    }

    /// Returns the raw value of an option, treating JSON `null` as absent.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
            .filter(|value| !value.is_null())
    }

    /// Returns a non-empty string option.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.option(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns an integer option. Numeric strings are accepted as well.
    pub fn option_i64(&self, name: &str) -> Option<i64> {
        match self.option(name)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// All options with a non-null value, in the order Discord sent them.
    pub fn provided_options(&self) -> impl Iterator<Item = &CommandOption> {
        self.data
            .iter()
            .flat_map(|data| data.options.iter())
            .filter(|option| !option.value.is_null())
    }

    /// The invoking user, taken from `member.user` in guilds and `user` in DMs.
    pub fn invoker(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }

    pub fn invoker_id(&self) -> Option<&str> {
        self.invoker().map(|user| user.id.as_str())
    }

    pub fn invoker_name(&self) -> Option<&str> {
        self.invoker()
            .and_then(|user| user.username.as_deref())
            .filter(|name| !name.is_empty())
    }
}
