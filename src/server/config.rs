use chrono::{DateTime, Utc};
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8787";
const DEFAULT_EVENT_KEY: &str = "hpp25";

/// Runtime configuration loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub register_commands: bool,

    /// Hex-encoded Ed25519 application public key used to authenticate interactions.
    pub discord_public_key: String,
    pub discord_token: String,
    pub discord_application_id: u64,
    pub discord_guild_id: u64,
    pub discord_support_category_id: u64,
    pub discord_lfg_category_id: u64,
    pub discord_mods_role_id: u64,
    pub discord_main_channel_id: u64,

    pub code_of_conduct_url: Url,
    pub quotes_all_url: Url,
    pub quotes_daily_url: Url,
    pub stats_url: Url,

    pub current_event_key: String,
    /// End of the running community event, if one is configured.
    pub current_event_end: Option<DateTime<Utc>>,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// `.env` files are read by `main` before this is called.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - First missing or malformed variable
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for a variable name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(AppError::ConfigErr)` - Missing or invalid variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        Ok(Self {
            database_url: env.required("DATABASE_URL")?,
            bind_address: env
                .optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            register_commands: env.flag("REGISTER_COMMANDS")?,

            discord_public_key: env.public_key("DISCORD_PUBLIC_KEY")?,
            discord_token: env.required("DISCORD_TOKEN")?,
            discord_application_id: env.snowflake("DISCORD_APPLICATION_ID")?,
            discord_guild_id: env.snowflake("DISCORD_GUILD_ID")?,
            discord_support_category_id: env.snowflake("DISCORD_SUPPORT_CATEGORY_ID")?,
            discord_lfg_category_id: env.snowflake("DISCORD_LFG_CATEGORY_ID")?,
            discord_mods_role_id: env.snowflake("DISCORD_MODS_ROLE_ID")?,
            discord_main_channel_id: env.snowflake("DISCORD_MAIN_CHANNEL_ID")?,

            code_of_conduct_url: env.url("HELLDADS_CODE_OF_CONDUCT")?,
            quotes_all_url: env.url("HELLDADS_QUOTES_ALL_URL")?,
            quotes_daily_url: env.url("HELLDADS_QUOTES_DAILY_URL")?,
            stats_url: env.url("HELLDADS_STATS_URL")?,

            current_event_key: env
                .optional("HELLDADS_CURRENT_EVENT_KEY")
                .unwrap_or_else(|| DEFAULT_EVENT_KEY.to_string()),
            current_event_end: env.timestamp("HELLDADS_CURRENT_EVENT_END")?,
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn snowflake(&self, key: &str) -> Result<u64, ConfigError> {
        let value = self.required(key)?;
        value
            .parse::<u64>()
            .map_err(|e| invalid(key, format!("'{}' is not a snowflake ID: {}", value, e)))
    }

    fn url(&self, key: &str) -> Result<Url, ConfigError> {
        let value = self.required(key)?;
        Url::parse(&value).map_err(|e| invalid(key, format!("'{}' is not a URL: {}", value, e)))
    }

    fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        match self.optional(key).as_deref() {
            None => Ok(false),
            Some("1") | Some("true") | Some("yes") => Ok(true),
            Some("0") | Some("false") | Some("no") => Ok(false),
            Some(other) => Err(invalid(key, format!("'{}' is not a boolean", other))),
        }
    }

    fn timestamp(&self, key: &str) -> Result<Option<DateTime<Utc>>, ConfigError> {
        self.optional(key)
            .map(|value| {
                DateTime::parse_from_rfc3339(&value)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| invalid(key, format!("'{}' is not RFC 3339: {}", value, e)))
            })
            .transpose()
    }

    fn public_key(&self, key: &str) -> Result<String, ConfigError> {
        let value = self.required(key)?.to_ascii_lowercase();
        if value.len() != 64 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(key, "expected 64 hexadecimal characters".to_string()));
        }
        Ok(value)
    }
}

fn invalid(key: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        key: key.to_string(),
        reason,
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with fixed IDs and the shared test signing key.
    pub fn for_tests() -> Self {
        let vars = test_vars();
        Self::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
            .expect("test configuration is valid")
    }
}

#[cfg(test)]
fn test_vars() -> std::collections::HashMap<&'static str, String> {
    use std::collections::HashMap;

    HashMap::from([
        ("DATABASE_URL", "sqlite::memory:".to_string()),
        ("DISCORD_PUBLIC_KEY", test_utils::signing::public_key_hex()),
        ("DISCORD_TOKEN", "token".to_string()),
        ("DISCORD_APPLICATION_ID", "100".to_string()),
        ("DISCORD_GUILD_ID", "300".to_string()),
        ("DISCORD_SUPPORT_CATEGORY_ID", "400".to_string()),
        ("DISCORD_LFG_CATEGORY_ID", "500".to_string()),
        ("DISCORD_MODS_ROLE_ID", "600".to_string()),
        ("DISCORD_MAIN_CHANNEL_ID", "700".to_string()),
        ("HELLDADS_CODE_OF_CONDUCT", "https://www.helldads.org/code-of-conduct".to_string()),
        ("HELLDADS_QUOTES_ALL_URL", "http://127.0.0.1:9/quotes".to_string()),
        ("HELLDADS_QUOTES_DAILY_URL", "http://127.0.0.1:9/daily".to_string()),
        ("HELLDADS_STATS_URL", "http://127.0.0.1:9/stats".to_string()),
    ])
}
