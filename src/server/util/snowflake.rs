use chrono::{DateTime, Utc};

/// Milliseconds between the Unix epoch and the first second of 2015, Discord's epoch.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Extracts the creation time embedded in a Discord snowflake.
///
/// The upper 42 bits of a snowflake hold milliseconds since the Discord epoch.
///
/// # Arguments
/// - `snowflake` - Any Discord ID (channel, user, message, ...)
///
/// # Returns
/// - Unix timestamp in milliseconds
pub fn timestamp_ms(snowflake: u64) -> u64 {
    (snowflake >> 22) + DISCORD_EPOCH_MS
}

/// Same as [`timestamp_ms`] but as a `DateTime<Utc>`.
///
/// Falls back to the Unix epoch only if the timestamp is unrepresentable, which cannot
/// happen for 64-bit snowflakes.
pub fn created_at(snowflake: u64) -> DateTime<Utc> {
    let millis = i64::try_from(timestamp_ms(snowflake)).unwrap_or_default();
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
