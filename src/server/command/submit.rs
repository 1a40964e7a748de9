use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::server::{
    command::{
        descriptor::{CommandDescriptor, OptionDescriptor},
        Command, CommandContext,
    },
    config::Config,
    data::submission::SubmissionRepository,
    interaction::{model::Interaction, response::InteractionResponse},
    model::event::{CreateEventSubmissionParam, Division, EventSubmission},
    service::format::{Formatter, TimestampStyle},
};

/// Counts at or above this need manual verification by the mods.
pub const SCREENSHOT_THRESHOLD: i64 = 1000;

/// `/submit [division]`: logs stratagems used in one mission for a division, or lists
/// the caller's own submissions when no division is given.
pub struct SubmitCommand;

/// Whether submissions are accepted at `now`.
///
/// The event runs until its configured end, inclusive. Without an end or key nothing
/// is accepted.
pub fn event_active(config: &Config, now: DateTime<Utc>) -> bool {
    !config.current_event_key.is_empty()
        && config.current_event_end.is_some_and(|end| now <= end)
}

/// Validated `/submit` options.
#[derive(Debug, PartialEq, Eq)]
enum Submission {
    /// No division given.
    Overview,
    Count { division: Division, count: i32 },
}

impl Submission {
    fn from_interaction(interaction: &Interaction) -> Result<Self, &'static str> {
        let mut provided = interaction.provided_options();
        let Some(option) = provided.next() else {
            return Ok(Self::Overview);
        };
        if provided.next().is_some() {
            return Err("Only one division can be submitted at a time. Please submit separately.");
        }

        let division = Division::from_key(&option.name).ok_or("Unknown division selected.")?;
        let count = interaction
            .option_i64(&option.name)
            .filter(|count| *count >= 1)
            .ok_or("Please submit a whole number of stratagems of at least 1.")?;

        if count >= SCREENSHOT_THRESHOLD {
            return Err("Submission count exceptionally high, congratulations! Please submit a screenshot to the mods first, so they can verify your results and add them manually.");
        }

        Ok(Self::Count {
            division,
            // bounded by SCREENSHOT_THRESHOLD above
            count: count as i32,
        })
    }
}

/// Lists each submission followed by per-division totals and the overall sum.
fn overview(format: &Formatter, submissions: &[EventSubmission]) -> String {
    if submissions.is_empty() {
        return "You have no submissions for this event yet.".to_string();
    }

    let mut lines = vec!["Here are your submissions for this event:".to_string()];
    lines.extend(submissions.iter().map(|submission| {
        format!(
            "{} {}: {} ({})",
            format.timestamp(submission.date, TimestampStyle::ShortDate),
            format.timestamp(submission.date, TimestampStyle::ShortTime),
            format.number(submission.count),
            submission.division.display_name()
        )
    }));

    lines.push(String::new());
    lines.push("Totals:".to_string());
    let mut overall = 0;
    for division in Division::ALL {
        let mut counts = submissions
            .iter()
            .filter(|submission| submission.division == division)
            .map(|submission| submission.count)
            .peekable();
        if counts.peek().is_none() {
            continue;
        }
        let total: i64 = counts.sum();
        overall += total;
        lines.push(format!(
            "• {}: {}",
            division.display_name(),
            format.number(total)
        ));
    }
    lines.push(format!("Overall: {}", format.number(overall)));

    lines.join("\n")
}

#[async_trait]
impl Command for SubmitCommand {
    fn descriptor(&self) -> CommandDescriptor {
        let mut descriptor = CommandDescriptor::new(
            "submit",
            "Submit all stratagems used per mission for your faction, or without options for your stats.",
        );

        let mut divisions = Division::ALL;
        divisions.sort_by_key(|division| division.key());
        for division in divisions {
            descriptor = descriptor.option(
                OptionDescriptor::integer(division.key(), division.option_description())
                    .bounds(1, SCREENSHOT_THRESHOLD),
            );
        }

        descriptor
    }

    async fn handle(
        &self,
        interaction: &Interaction,
        config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let now = ctx.now();
        if !event_active(config, now) {
            return InteractionResponse::ephemeral("No event is currently active.");
        }

        let Some(user_id) = interaction.invoker_id() else {
            tracing::warn!("submit invoked without a user");
            return InteractionResponse::ephemeral("Failed to store data.");
        };
        let event_key = config.current_event_key.as_str();
        let repo = SubmissionRepository::new(&ctx.db);

        let (division, count) = match Submission::from_interaction(interaction) {
            Ok(Submission::Count { division, count }) => (division, count),
            Ok(Submission::Overview) => {
                return match repo.get_user_event_submissions(event_key, user_id).await {
                    Ok(submissions) => {
                        InteractionResponse::ephemeral(overview(&ctx.format, &submissions))
                    }
                    Err(e) => {
                        tracing::error!("Failed to read submissions of {}: {}", user_id, e);
                        InteractionResponse::ephemeral("Failed to read your submissions.")
                    }
                };
            }
            Err(message) => return InteractionResponse::ephemeral(message),
        };

        let param = CreateEventSubmissionParam {
            user_id: user_id.to_string(),
            name: interaction.invoker_name().map(str::to_string),
            event_key: event_key.to_string(),
            division,
            count,
            date: now,
        };
        if let Err(e) = repo.create_event_submission(param).await {
            tracing::error!("Failed to store submission of {}: {}", user_id, e);
            return InteractionResponse::ephemeral("Failed to store data.");
        }

        let total = repo
            .get_user_division_total(event_key, user_id, division)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to read total of {}: {}", user_id, e);
                0
            });

        InteractionResponse::message(format!(
            "<@{}> reported **{} stratagems used** for **{}**. Thank you for your support!\nTotal contribution: {}",
            user_id,
            ctx.format.number(count.into()),
            division.display_name(),
            ctx.format.number(total)
        ))
    }
}
