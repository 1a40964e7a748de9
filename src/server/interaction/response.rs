use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Message flag that hides a reply from everyone but the invoking user.
pub const EPHEMERAL: u64 = 1 << 6;

const PONG: u8 = 1;
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Outbound interaction payload.
///
/// Serialises to `{"type":1}` for a pong and `{"type":4,"data":{...}}` for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResponse {
    Pong,
    ChannelMessage(MessageData),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
}

/// Restricts which mentions in a message actually ping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowedMentions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parse: Vec<MentionKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    Users,
    Roles,
}

impl AllowedMentions {
    /// Only the listed users are pinged.
    pub fn users(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            parse: Vec::new(),
            users: ids.into_iter().collect(),
        }
    }
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self::Pong
    }

    /// Public channel message.
    pub fn message(content: impl Into<String>) -> Self {
        Self::ChannelMessage(MessageData {
            content: content.into(),
            flags: None,
            allowed_mentions: None,
        })
    }

    /// Message only the invoking user can see.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::ChannelMessage(MessageData {
            content: content.into(),
            flags: Some(EPHEMERAL),
            allowed_mentions: None,
        })
    }

    pub fn with_allowed_mentions(self, mentions: AllowedMentions) -> Self {
        match self {
            Self::ChannelMessage(data) => Self::ChannelMessage(MessageData {
                allowed_mentions: Some(mentions),
                ..data
            }),
            Self::Pong => Self::Pong,
        }
    }

    /// Message text, if this is a message.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::ChannelMessage(data) => Some(data.content.as_str()),
            Self::Pong => None,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::ChannelMessage(MessageData { flags: Some(flags), .. }) if flags & EPHEMERAL != 0)
    }
}

impl Serialize for InteractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pong => {
                let mut state = serializer.serialize_struct("InteractionResponse", 1)?;
                state.serialize_field("type", &PONG)?;
                state.end()
            }
            Self::ChannelMessage(data) => {
                let mut state = serializer.serialize_struct("InteractionResponse", 2)?;
                state.serialize_field("type", &CHANNEL_MESSAGE_WITH_SOURCE)?;
                state.serialize_field("data", data)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_serializes_to_type_only() {
        let json = serde_json::to_string(&InteractionResponse::pong()).unwrap();

        assert_eq!(json, r#"{"type":1}"#);
    }

    #[test]
    fn message_omits_unset_fields() {
        let json = serde_json::to_string(&InteractionResponse::message("Command not found.")).unwrap();

        assert_eq!(json, r#"{"type":4,"data":{"content":"Command not found."}}"#);
    }

    #[test]
    fn ephemeral_sets_flag() {
        let response = InteractionResponse::ephemeral("hidden");

        assert!(response.is_ephemeral());
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"type":4,"data":{"content":"hidden","flags":64}}"#
        );
    }

    #[test]
    fn allowed_mentions_restricts_users() {
        let response = InteractionResponse::message("<@1> hi")
            .with_allowed_mentions(AllowedMentions::users(["1".to_string()]));

        assert!(!response.is_ephemeral());
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"type":4,"data":{"content":"<@1> hi","allowed_mentions":{"users":["1"]}}}"#
        );
    }
}
