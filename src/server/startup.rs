use serenity::{all::ApplicationId, http::Http};
use std::sync::Arc;

use crate::server::{
    command::registry::CommandRegistry, config::Config, error::AppError,
    service::discord::DiscordApi,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// `submission` and `highscore` tables are up-to-date. This function must complete
/// successfully before commands can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for the JSON feeds.
///
/// Redirects are not followed; feed URLs are configured explicitly.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready for use
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("dadbot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates the Discord REST client authenticated with the bot token.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    let http = Http::new(&config.discord_token);
    http.set_application_id(ApplicationId::new(config.discord_application_id));

    Arc::new(http)
}

/// Replaces the global slash commands with the registry's descriptors.
///
/// Logs the commands currently known to Discord first so a deployment shows what
/// changed.
///
/// # Arguments
/// - `discord` - Outbound Discord capability
/// - `registry` - Populated command registry
///
/// # Returns
/// - `Ok(())` - Commands registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the listing or the registration
pub async fn register_commands(
    discord: &dyn DiscordApi,
    registry: &CommandRegistry,
) -> Result<(), AppError> {
    let existing = discord.list_commands().await?;
    tracing::info!("Currently registered commands: {}", existing.join(", "));

    discord.register_commands(&registry.descriptors()).await?;

    Ok(())
}
