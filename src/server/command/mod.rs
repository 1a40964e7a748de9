//! Slash commands and their registry.
//!
//! Each command implements `Command`: a static descriptor plus an async handler. The
//! handler never fails; internal errors are logged and turned into a short ephemeral
//! reply so the dispatcher only has to route.

pub mod descriptor;
pub mod event;
pub mod help;
pub mod highscores;
pub mod lfg;
pub mod modhelp;
pub mod quote;
pub mod registry;
pub mod stats;
pub mod submit;
pub mod update;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::async_trait;
use std::sync::Arc;

use crate::server::{
    command::descriptor::CommandDescriptor,
    config::Config,
    interaction::{model::Interaction, response::InteractionResponse},
    service::{discord::DiscordApi, feed::FeedClient, format::Formatter},
};

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// A slash command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Static declaration used for lookup and registration.
    fn descriptor(&self) -> CommandDescriptor;

    /// Handles one invocation.
    ///
    /// # Arguments
    /// - `interaction` - The verified command invocation
    /// - `config` - Validated runtime configuration
    /// - `ctx` - Shared services
    ///
    /// # Returns
    /// - The reply sent back to Discord, unmodified by the dispatcher
    async fn handle(
        &self,
        interaction: &Interaction,
        config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse;
}

/// Services available to command handlers and scheduled jobs.
///
/// Cheap to clone; every field is a handle to shared state.
#[derive(Clone)]
pub struct CommandContext {
    pub db: DatabaseConnection,
    pub discord: Arc<dyn DiscordApi>,
    pub feeds: FeedClient,
    pub format: Formatter,
    clock: Clock,
}

impl CommandContext {
    /// Creates a context using the system clock.
    pub fn new(
        db: DatabaseConnection,
        discord: Arc<dyn DiscordApi>,
        feeds: FeedClient,
        format: Formatter,
    ) -> Self {
        Self {
            db,
            discord,
            feeds,
            format,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the clock, e.g. with a fixed instant.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
