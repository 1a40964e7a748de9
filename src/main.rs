mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    command::{registry::build_registry, CommandContext},
    config::Config,
    error::AppError,
    scheduler,
    service::{discord::SerenityDiscordApi, feed::FeedClient, format::Formatter},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let discord_http = startup::setup_discord_http(&config);
    let discord = Arc::new(SerenityDiscordApi::new(discord_http));

    let registry = build_registry()?;
    if config.register_commands {
        startup::register_commands(discord.as_ref(), &registry).await?;
    }

    let context = CommandContext::new(db, discord, FeedClient::new(http_client), Formatter::new());
    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, context, registry);

    // Start cron jobs in a separate task
    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::start_scheduler(scheduler_state).await {
            tracing::error!("Scheduler error: {}", e);
        }
    });

    let app = server::router::router().with_state(state);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    tracing::info!("Listening for interactions on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
