use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    ///
    /// Raised for malformed snowflake IDs, URLs, timestamps, booleans or keys.
    #[error("Invalid value for environment variable {key}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}
