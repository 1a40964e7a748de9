//! Community event domain models.
//!
//! Events are tracked in the submission log by an event key. Each submission carries a
//! stratagem count for exactly one division.

use chrono::{DateTime, Utc};

/// A community sub-faction competing in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Science,
    Baldzerkers,
    Diaper,
    Crayon,
    Snack,
}

impl Division {
    pub const ALL: [Division; 5] = [
        Division::Science,
        Division::Baldzerkers,
        Division::Diaper,
        Division::Crayon,
        Division::Snack,
    ];

    /// Option name used by `/submit`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Science => "science",
            Self::Baldzerkers => "baldzerkers",
            Self::Diaper => "diaper",
            Self::Crayon => "crayon",
            Self::Snack => "snack",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Science => "Science Team",
            Self::Baldzerkers => "Baldzerkers",
            Self::Diaper => "Diaper Division",
            Self::Crayon => "Crayon Commandos",
            Self::Snack => "S.N.A.C.K. Division",
        }
    }

    /// Help text of the division's `/submit` option.
    pub fn option_description(self) -> &'static str {
        match self {
            Self::Science => "Stratagems used by the Science Team division",
            Self::Baldzerkers => "Stratagems used by the Baldzerkers division",
            Self::Diaper => "Stratagems used by the Diaper Division",
            Self::Crayon => "Stratagems used by the Crayon Commandos division",
            Self::Snack => "Stratagems used by the S.N.A.C.K. Division",
        }
    }

    /// Custom guild emoji of the division.
    pub fn logo(self) -> &'static str {
        match self {
            Self::Science => "<:st_logo:1345027109944299562>",
            Self::Baldzerkers => "<:bz_logo:1345027059327438848>",
            Self::Diaper => "<:dd_logo:1345027087446052914>",
            Self::Crayon => "<:cc_logo:1345027134862655549>",
            Self::Snack => "<:sd_logo:1395099109203116083>",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|division| division.key() == key)
    }
}

/// One logged division count of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSubmission {
    pub user_id: String,
    pub name: Option<String>,
    pub date: DateTime<Utc>,
    pub division: Division,
    pub count: i64,
}

impl EventSubmission {
    /// Expands a submission row into its non-null division counts.
    ///
    /// A row written by `/submit` carries exactly one count, but older rows may hold
    /// several.
    ///
    /// # Arguments
    /// - `entity` - Submission row
    ///
    /// # Returns
    /// - One entry per non-null division column, in division order
    pub fn from_entity(entity: &entity::submission::Model) -> Vec<Self> {
        let counts = [
            (Division::Science, entity.event_science_count),
            (Division::Baldzerkers, entity.event_baldzerkers_count),
            (Division::Diaper, entity.event_diaper_count),
            (Division::Crayon, entity.event_crayon_count),
            (Division::Snack, entity.event_snack_count),
        ];

        counts
            .into_iter()
            .filter_map(|(division, count)| {
                count.map(|count| Self {
                    user_id: entity.user_id.clone(),
                    name: entity.name.clone(),
                    date: entity.date,
                    division,
                    count: count.into(),
                })
            })
            .collect()
    }
}

/// Parameters for logging one `/submit` invocation.
#[derive(Debug, Clone)]
pub struct CreateEventSubmissionParam {
    pub user_id: String,
    pub name: Option<String>,
    pub event_key: String,
    pub division: Division,
    pub count: i32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionTotal {
    pub division: Division,
    pub total: i64,
}

/// Aggregated counters of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTotals {
    /// One entry per division, in division order.
    pub divisions: Vec<DivisionTotal>,
    /// Number of submission rows logged for the event.
    pub submissions: i64,
}

impl EventTotals {
    pub fn total(&self) -> i64 {
        self.divisions.iter().map(|division| division.total).sum()
    }

    /// Integer average count per submission, zero without submissions.
    pub fn average(&self) -> i64 {
        if self.submissions > 0 {
            self.total() / self.submissions
        } else {
            0
        }
    }

    /// Divisions sorted by total, best first. Ties keep division order.
    pub fn ranking(&self) -> Vec<DivisionTotal> {
        let mut ranking = self.divisions.clone();
        ranking.sort_by(|a, b| b.total.cmp(&a.total));
        ranking
    }
}
