use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::server::{
    command::{descriptor::CommandDescriptor, Command, CommandContext},
    config::Config,
    data::submission::SubmissionRepository,
    interaction::{model::Interaction, response::InteractionResponse},
    model::event::{Division, DivisionTotal, EventSubmission, EventTotals},
    service::format::Formatter,
};

const RANK_ICONS: [&str; 5] = [
    ":first_place:",
    ":second_place:",
    ":third_place:",
    "<:helldad:1316506358211805244>",
    "<:helldads_baby:1316435213559136316>",
];

const FOOTER: &str = "-# Use `/submit` to report the number of stratagems used by your division after each mission! If you beat the highest result per mission, you must attach a screenshot as proof. Learn more about our divisions in <#1345040640949489674>.";

/// `/event`: leaderboard and progress of the running community event.
pub struct EventCommand;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn end_date(end: DateTime<Utc>) -> String {
    end.format("%A, %B %-d, %-I:%M %p").to_string()
}

/// Remaining time until `end`, or when the event ended.
fn time_left(end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(end) = end else {
        return "Time left: Unknown".to_string();
    };

    let remaining = end - now;
    if remaining <= chrono::Duration::zero() {
        return format!("Event ended on {}", end_date(end));
    }

    let minutes = remaining.num_minutes();
    let days = minutes / (60 * 24);
    let mut segments = Vec::with_capacity(3);
    if days > 0 {
        segments.push(plural(days, "day"));
    }
    segments.push(plural(minutes % (60 * 24) / 60, "hour"));
    segments.push(plural(minutes % 60, "minute"));

    format!(
        ":clock7: **Time left**: {} ({} GMT)",
        segments.join(" "),
        end_date(end)
    )
}

fn leaderboard(
    format: &Formatter,
    totals: &EventTotals,
    highest: Option<&EventSubmission>,
    time_left: String,
) -> String {
    let mut lines = vec![
        "# Holiday Payload Program 2025".to_string(),
        String::new(),
        "## Leaderboard".to_string(),
    ];

    lines.extend(totals.ranking().iter().zip(RANK_ICONS).map(
        |(DivisionTotal { division, total }, icon)| {
            format!(
                "{} — {} **{}**: {} stratagems",
                icon,
                division.logo(),
                division.display_name(),
                format.number(*total)
            )
        },
    ));

    lines.push(String::new());
    lines.push(format!(":trophy: Total: {}", format.number(totals.total())));
    lines.push(format!(
        ":chart_with_upwards_trend: Total submissions: {}",
        format.number(totals.submissions)
    ));
    lines.push(format!(
        ":bar_chart: Average per submissions: {}",
        format.number(totals.average())
    ));
    lines.push(match highest {
        Some(submission) => format!(
            "<:xdad:1419602524545093692> Highest result per submission: <@{}> with {}",
            submission.user_id,
            format.number(submission.count)
        ),
        None => "Highest result per submission: N/A".to_string(),
    });
    lines.push(String::new());
    lines.push(time_left);
    lines.push(String::new());
    lines.push(FOOTER.to_string());

    lines.join("\n")
}

#[async_trait]
impl Command for EventCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new(
            "event",
            "Display summary of the Holiday Payload Program 2025 event.",
        )
    }

    async fn handle(
        &self,
        _interaction: &Interaction,
        config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let event_key = config.current_event_key.as_str();
        let repo = SubmissionRepository::new(&ctx.db);

        let totals = repo.get_event_totals(event_key).await.unwrap_or_else(|e| {
            tracing::error!("Failed to read totals of event {}: {}", event_key, e);
            EventTotals {
                divisions: Division::ALL
                    .into_iter()
                    .map(|division| DivisionTotal { division, total: 0 })
                    .collect(),
                submissions: 0,
            }
        });
        let highest = repo
            .get_highest_event_submission(event_key)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to read highest submission of {}: {}", event_key, e);
                None
            });

        InteractionResponse::message(leaderboard(
            &ctx.format,
            &totals,
            highest.as_ref(),
            time_left(config.current_event_end, ctx.now()),
        ))
    }
}
