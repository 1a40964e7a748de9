//! Static declarations of slash commands.
//!
//! Descriptors serialise to the JSON shape of Discord's application command API so the
//! same values drive both dispatch and registration.

use serde::{Serialize, Serializer};

/// Application command option types used by this bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
}

impl OptionKind {
    pub fn code(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
        }
    }
}

impl Serialize for OptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub name: &'static str,
    pub value: &'static str,
}

/// Builds a choice list from `(display name, value)` pairs.
pub fn choices(pairs: &[(&'static str, &'static str)]) -> Vec<Choice> {
    pairs
        .iter()
        .map(|&(name, value)| Choice { name, value })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

impl OptionDescriptor {
    fn new(name: &'static str, description: &'static str, kind: OptionKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            choices: Vec::new(),
            min_value: None,
            max_value: None,
        }
    }

    /// Optional free-text option.
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, OptionKind::String)
    }

    /// Optional integer option.
    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, OptionKind::Integer)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    pub fn bounds(mut self, min: i64, max: i64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }
}

/// Declaration of one slash command. Never mutated after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDescriptor>,
}

impl CommandDescriptor {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    /// Display name of a choice value of the given option.
    pub fn choice_name(&self, option: &str, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.name == option)?
            .choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.name)
    }
}
