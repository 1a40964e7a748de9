//! Personal player statistics submitted through `/update`.
//!
//! A single canonical field set is shared by the append-only submission log, the
//! highscore table and the command option list.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::fmt;

use crate::server::{error::statistics::StatisticsError, interaction::model::Interaction};

const MAX_COUNTER: i64 = 10_000_000;

/// Helldivers 2 release date. Earlier enlist dates are impossible.
pub fn release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 8).unwrap_or_default()
}

/// A single statistics column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Name,
    Level,
    EnlistDate,
    MissionsWon,
    Kills,
    Deaths,
    FriendlyKills,
    SamplesCollected,
}

/// Value domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int { min: i64, max: i64 },
    Date,
}

impl StatField {
    /// Every field in display order.
    pub const ALL: [StatField; 8] = [
        StatField::Name,
        StatField::Level,
        StatField::EnlistDate,
        StatField::MissionsWon,
        StatField::Kills,
        StatField::Deaths,
        StatField::FriendlyKills,
        StatField::SamplesCollected,
    ];

    /// Option and column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Level => "level",
            Self::EnlistDate => "enlist_date",
            Self::MissionsWon => "missions_won",
            Self::Kills => "kills",
            Self::Deaths => "deaths",
            Self::FriendlyKills => "friendly_kills",
            Self::SamplesCollected => "samples_collected",
        }
    }

    /// Human readable label used in replies and validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Level => "Level",
            Self::EnlistDate => "Enlist Date",
            Self::MissionsWon => "Missions Won",
            Self::Kills => "Kills",
            Self::Deaths => "Deaths",
            Self::FriendlyKills => "Friendly Kills",
            Self::SamplesCollected => "Samples Collected",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Name => "Your Helldiver name",
            Self::Level => "Your current level",
            Self::EnlistDate => "Date you enlisted (yyyy-mm-dd)",
            Self::MissionsWon => "Total missions won",
            Self::Kills => "Total kills",
            Self::Deaths => "Total deaths",
            Self::FriendlyKills => "Total friendly kills",
            Self::SamplesCollected => "Total samples collected",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Text,
            Self::EnlistDate => FieldKind::Date,
            Self::Level => FieldKind::Int { min: 1, max: 150 },
            Self::MissionsWon
            | Self::Kills
            | Self::Deaths
            | Self::FriendlyKills
            | Self::SamplesCollected => FieldKind::Int {
                min: 0,
                max: MAX_COUNTER,
            },
        }
    }

    /// Whether a smaller value is the better score. Only the enlist date ranks ascending.
    pub fn lower_is_better(self) -> bool {
        self == Self::EnlistDate
    }

    /// Fields that take part in the highscore leaderboard.
    pub fn ranked() -> impl Iterator<Item = StatField> {
        Self::ALL.into_iter().filter(|field| *field != Self::Name)
    }
}

/// A single typed statistics value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Int(value) => write!(f, "{}", value),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// A set of statistics where every field is optional.
///
/// Used both for a validated `/update` request and for a stored highscore row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub enlist_date: Option<NaiveDate>,
    pub missions_won: Option<i32>,
    pub kills: Option<i32>,
    pub deaths: Option<i32>,
    pub friendly_kills: Option<i32>,
    pub samples_collected: Option<i32>,
}

impl Statistics {
    /// Validates the statistics options of an `/update` invocation.
    ///
    /// Empty strings count as not provided. Validation stops at the first bad field,
    /// in display order.
    ///
    /// # Arguments
    /// - `interaction` - The command invocation
    ///
    /// # Returns
    /// - `Ok(Statistics)` - Only the provided fields are set
    /// - `Err(StatisticsError)` - First invalid field
    pub fn from_interaction(interaction: &Interaction) -> Result<Self, StatisticsError> {
        let mut stats = Self::default();

        for field in StatField::ALL {
            let Some(raw) = interaction.option(field.name()) else {
                continue;
            };
            if raw.as_str() == Some("") {
                continue;
            }

            stats.set(field, parse_value(field, raw)?);
        }

        Ok(stats)
    }

    /// Assigns a value to its field. Values of the wrong shape for the field are ignored.
    pub fn set(&mut self, field: StatField, value: StatValue) {
        match (field, value) {
            (StatField::Name, StatValue::Text(text)) => self.name = Some(text),
            (StatField::EnlistDate, StatValue::Date(date)) => self.enlist_date = Some(date),
            (field, StatValue::Int(value)) => {
                let Ok(value) = i32::try_from(value) else {
                    return;
                };
                match field {
                    StatField::Level => self.level = Some(value),
                    StatField::MissionsWon => self.missions_won = Some(value),
                    StatField::Kills => self.kills = Some(value),
                    StatField::Deaths => self.deaths = Some(value),
                    StatField::FriendlyKills => self.friendly_kills = Some(value),
                    StatField::SamplesCollected => self.samples_collected = Some(value),
                    StatField::Name | StatField::EnlistDate => {}
                }
            }
            _ => {}
        }
    }

    pub fn get(&self, field: StatField) -> Option<StatValue> {
        match field {
            StatField::Name => self.name.clone().map(StatValue::Text),
            StatField::Level => self.level.map(|v| StatValue::Int(v.into())),
            StatField::EnlistDate => self.enlist_date.map(StatValue::Date),
            StatField::MissionsWon => self.missions_won.map(|v| StatValue::Int(v.into())),
            StatField::Kills => self.kills.map(|v| StatValue::Int(v.into())),
            StatField::Deaths => self.deaths.map(|v| StatValue::Int(v.into())),
            StatField::FriendlyKills => self.friendly_kills.map(|v| StatValue::Int(v.into())),
            StatField::SamplesCollected => {
                self.samples_collected.map(|v| StatValue::Int(v.into()))
            }
        }
    }

    /// Provided values in display order.
    pub fn values(&self) -> Vec<(StatField, StatValue)> {
        StatField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

fn parse_value(field: StatField, raw: &Value) -> Result<StatValue, StatisticsError> {
    let label = field.label();

    match field.kind() {
        FieldKind::Text => Ok(StatValue::Text(match raw {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })),
        FieldKind::Int { min, max } => {
            let value = match raw {
                Value::Number(number) => number.as_i64(),
                Value::String(text) => text.trim().parse::<i64>().ok(),
                _ => None,
            }
            .ok_or(StatisticsError::NotInteger { label })?;

            if value < min {
                return Err(StatisticsError::TooSmall { label, min });
            }
            if value > max {
                return Err(StatisticsError::TooLarge { label, max });
            }
            Ok(StatValue::Int(value))
        }
        FieldKind::Date => {
            let text = raw.as_str().ok_or(StatisticsError::DateFormat { label })?;
            if !is_iso_date_shape(text) {
                return Err(StatisticsError::DateFormat { label });
            }
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| StatisticsError::InvalidDate { label })?;
            if date < release_date() {
                return Err(StatisticsError::BeforeRelease { label });
            }
            Ok(StatValue::Date(date))
        }
    }
}

fn is_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Stored highscore row of one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Highscore {
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub verified: bool,
    pub statistics: Statistics,
}

impl Highscore {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::highscore::Model) -> Self {
        Self {
            user_id: entity.user_id,
            date: entity.date,
            verified: entity.verified,
            statistics: Statistics {
                name: entity.name,
                level: entity.level,
                enlist_date: entity.enlist_date,
                missions_won: entity.missions_won,
                kills: entity.kills,
                deaths: entity.deaths,
                friendly_kills: entity.friendly_kills,
                samples_collected: entity.samples_collected,
            },
        }
    }
}

/// Best value of one field across all users, with its holder.
#[derive(Debug, Clone, PartialEq)]
pub struct HighscoreEntry {
    pub field: StatField,
    pub user_id: String,
    pub name: Option<String>,
    pub value: StatValue,
}

/// Validated `/update` request ready to be stored.
#[derive(Debug, Clone)]
pub struct RecordStatisticsParam {
    pub user_id: String,
    pub statistics: Statistics,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_utils::fixture::interaction;

    fn parse(options: Value) -> Result<Statistics, StatisticsError> {
        let body = interaction::to_body(&interaction::command_with_options("update", options));
        let parsed = Interaction::parse(&body).unwrap();
        Statistics::from_interaction(&parsed)
    }

    /// Expected: only provided fields are set, in display order
    #[test]
    fn parses_provided_fields() {
        let stats = parse(json!([
            { "name": "kills", "value": 1200 },
            { "name": "name", "value": "Dad" },
            { "name": "enlist_date", "value": "2024-03-01" },
            { "name": "deaths", "value": "" },
        ]))
        .unwrap();

        assert_eq!(stats.name.as_deref(), Some("Dad"));
        assert_eq!(stats.kills, Some(1200));
        assert_eq!(stats.deaths, None);
        assert_eq!(
            stats.values().iter().map(|(f, _)| *f).collect::<Vec<_>>(),
            vec![StatField::Name, StatField::EnlistDate, StatField::Kills]
        );
    }

    /// Expected: no options yields an empty update
    #[test]
    fn empty_without_options() {
        assert!(parse(json!([])).unwrap().is_empty());
    }

    /// Expected: level bounds are enforced with the field label in the message
    #[test]
    fn enforces_integer_bounds() {
        let too_small = parse(json!([{ "name": "level", "value": 0 }])).unwrap_err();
        let too_large = parse(json!([{ "name": "level", "value": 151 }])).unwrap_err();
        let not_int = parse(json!([{ "name": "kills", "value": "many" }])).unwrap_err();

        assert_eq!(too_small.to_string(), "Level must be at least 1.");
        assert_eq!(too_large.to_string(), "Level must be at most 150.");
        assert_eq!(not_int.to_string(), "Kills must be an integer.");
    }

    /// Expected: shape, validity and release date are checked in that order
    #[test]
    fn validates_enlist_date() {
        let shape = parse(json!([{ "name": "enlist_date", "value": "1.3.2024" }])).unwrap_err();
        let invalid = parse(json!([{ "name": "enlist_date", "value": "2024-02-30" }])).unwrap_err();
        let early = parse(json!([{ "name": "enlist_date", "value": "2024-02-07" }])).unwrap_err();

        assert_eq!(shape, StatisticsError::DateFormat { label: "Enlist Date" });
        assert_eq!(invalid, StatisticsError::InvalidDate { label: "Enlist Date" });
        assert_eq!(
            early.to_string(),
            "Enlist Date cannot be before Helldivers 2 release date on 2024-02-08."
        );
        assert!(parse(json!([{ "name": "enlist_date", "value": "2024-02-08" }])).is_ok());
    }
}
