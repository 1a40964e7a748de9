//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request through
//! Axum's state extraction. Every field is reference counted or a cheap handle, so
//! clones share the same configuration, services and command registry.

use std::sync::Arc;

use crate::server::{
    command::{registry::CommandRegistry, CommandContext},
    config::Config,
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Validated configuration, read-only after startup.
    pub config: Arc<Config>,

    /// Services handed to command handlers and scheduled jobs.
    pub context: CommandContext,

    /// Commands by name. Built once and never mutated while serving.
    pub registry: Arc<CommandRegistry>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Validated configuration
    /// - `context` - Database, Discord, feed and formatting services
    /// - `registry` - Fully populated command registry
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: Config, context: CommandContext, registry: CommandRegistry) -> Self {
        Self {
            config: Arc::new(config),
            context,
            registry: Arc::new(registry),
        }
    }
}
