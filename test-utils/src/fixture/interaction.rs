//! Interaction payload fixtures.

use serde_json::{json, Value};

/// Discord id of the invoking member in every fixture.
pub const TEST_USER_ID: &str = "1";
/// Username of the invoking member in every fixture.
pub const TEST_USERNAME: &str = "Tester";
/// Channel the fixture interactions are invoked from.
pub const TEST_CHANNEL_ID: &str = "2";

/// A protocol liveness check (`type = 1`).
pub fn ping() -> Value {
    json!({ "type": 1 })
}

/// A slash command invocation without options.
pub fn command(name: &str) -> Value {
    command_with_options(name, json!([]))
}

/// A slash command invocation carrying the given option list.
///
/// # Arguments
/// - `name` - Command name
/// - `options` - JSON array of `{name, type, value}` objects
pub fn command_with_options(name: &str, options: Value) -> Value {
    json!({
        "id": "100",
        "application_id": "200",
        "type": 2,
        "token": "interaction-token",
        "guild_id": "300",
        "channel_id": TEST_CHANNEL_ID,
        "member": {
            "user": {
                "id": TEST_USER_ID,
                "username": TEST_USERNAME,
            },
            "roles": [],
        },
        "data": {
            "id": "400",
            "name": name,
            "type": 1,
            "options": options,
        },
    })
}

/// A slash command invocation from a direct message, where `user` replaces `member`.
pub fn direct_message_command(name: &str) -> Value {
    json!({
        "type": 2,
        "channel_id": TEST_CHANNEL_ID,
        "user": {
            "id": TEST_USER_ID,
            "username": TEST_USERNAME,
        },
        "data": {
            "name": name,
        },
    })
}

/// Serializes a fixture into the raw request body.
pub fn to_body(value: &Value) -> Vec<u8> {
    value.to_string().into_bytes()
}
