use std::{collections::HashMap, sync::Arc};

use crate::server::{
    command::{
        descriptor::CommandDescriptor, event::EventCommand, help::HelpCommand,
        highscores::HighscoresCommand, lfg::LfgCommand, modhelp::ModhelpCommand,
        quote::QuoteCommand, stats::StatsCommand, submit::SubmitCommand, update::UpdateCommand,
        Command,
    },
    error::{internal::InternalError, AppError},
};

struct Entry {
    descriptor: CommandDescriptor,
    command: Arc<dyn Command>,
}

/// Ordered, name-indexed set of commands built once at startup.
///
/// Lookups are case-sensitive and never mutate the registry.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command under the name of its descriptor.
    ///
    /// # Returns
    /// - `Ok(())` - Command registered
    /// - `Err(AppError::InternalErr(DuplicateCommand))` - Name already taken
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), AppError> {
        let descriptor = command.descriptor();
        if self.index.contains_key(descriptor.name) {
            return Err(InternalError::DuplicateCommand(descriptor.name.to_string()).into());
        }

        self.index.insert(descriptor.name, self.entries.len());
        self.entries.push(Entry {
            descriptor,
            command,
        });

        Ok(())
    }

    /// Returns the command registered under `name`, or `None` if there is none.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.index
            .get(name)
            .map(|&position| Arc::clone(&self.entries[position].command))
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.entries
            .iter()
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the registry with every command the bot offers.
///
/// # Returns
/// - `Ok(CommandRegistry)` - All commands registered
/// - `Err(AppError)` - Two commands share a name
pub fn build_registry() -> Result<CommandRegistry, AppError> {
    let mut registry = CommandRegistry::new();

    registry.register(Arc::new(HelpCommand))?;
    registry.register(Arc::new(QuoteCommand))?;
    registry.register(Arc::new(StatsCommand))?;
    registry.register(Arc::new(ModhelpCommand))?;
    registry.register(Arc::new(LfgCommand))?;
    registry.register(Arc::new(SubmitCommand))?;
    registry.register(Arc::new(UpdateCommand))?;
    registry.register(Arc::new(HighscoresCommand))?;
    registry.register(Arc::new(EventCommand))?;

    Ok(registry)
}
