//! Cron driven jobs.
//!
//! Every job maps to a fixed 6-field cron expression (seconds first). Jobs run detached
//! from the scheduler loop and log their own failures, so a failing job never takes the
//! scheduler down.

pub mod daily_quote;
pub mod lfg_cleanup;
pub mod weekly_stats;

use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, state::AppState};

/// A recurring background job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledJob {
    /// Quote of the day, every afternoon.
    DailyQuote,
    /// Community stats, Tuesday mornings.
    WeeklyStats,
    /// Expired LFG voice channels, every 15 minutes.
    LfgCleanup,
}

impl ScheduledJob {
    pub const ALL: [ScheduledJob; 3] = [
        ScheduledJob::DailyQuote,
        ScheduledJob::WeeklyStats,
        ScheduledJob::LfgCleanup,
    ];

    pub fn cron(self) -> &'static str {
        match self {
            Self::DailyQuote => "0 0 17 * * *",
            Self::WeeklyStats => "0 0 6 * * Tue",
            Self::LfgCleanup => "0 */15 * * * *",
        }
    }

    /// Resolves a cron expression to its job by exact match.
    pub fn from_cron(cron: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|job| job.cron() == cron)
    }

    fn name(self) -> &'static str {
        match self {
            Self::DailyQuote => "daily quote",
            Self::WeeklyStats => "weekly stats",
            Self::LfgCleanup => "LFG cleanup",
        }
    }

    async fn run(self, state: &AppState) -> Result<(), AppError> {
        let config = &state.config;
        let ctx = &state.context;

        match self {
            Self::DailyQuote => daily_quote::post_daily_quote(config, ctx).await,
            Self::WeeklyStats => weekly_stats::post_weekly_stats(config, ctx).await,
            Self::LfgCleanup => lfg_cleanup::cleanup_lfg_channels(config, ctx)
                .await
                .map(|deleted| {
                    if deleted > 0 {
                        tracing::info!("Deleted {} expired LFG channels", deleted);
                    }
                }),
        }
    }
}

/// Spawns the job registered for `cron` as a detached task.
///
/// The task logs and swallows job errors. Unknown expressions are logged and nothing
/// is spawned.
///
/// # Arguments
/// - `cron` - Cron expression that fired
/// - `state` - Shared application state
///
/// # Returns
/// - `Some(JoinHandle)` - Handle of the spawned task, safe to drop
/// - `None` - No job is registered for the expression
pub fn scheduled(cron: &str, state: AppState) -> Option<JoinHandle<()>> {
    let Some(job) = ScheduledJob::from_cron(cron) else {
        tracing::warn!("No scheduled job registered for cron {:?}", cron);
        return None;
    };

    Some(tokio::spawn(async move {
        if let Err(e) = job.run(&state).await {
            tracing::error!("Scheduled {} job failed: {}", job.name(), e);
        }
    }))
}

/// Starts the cron scheduler with every job.
///
/// # Arguments
/// - `state` - Shared application state cloned into each firing
///
/// # Returns
/// - `Ok(())` - Scheduler running in the background
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    for job in ScheduledJob::ALL {
        let job_state = state.clone();

        let cron_job = Job::new_async(job.cron(), move |_uuid, _lock| {
            let state = job_state.clone();

            Box::pin(async move {
                scheduled(job.cron(), state);
            })
        })?;

        scheduler.add(cron_job).await?;
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started with {} jobs", ScheduledJob::ALL.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        command::{registry::CommandRegistry, test_support},
        config::Config,
        model::channel::OutgoingMessage,
        service::{
            discord::fake::{DiscordCall, FakeDiscordApi},
            feed::test_server,
        },
    };
    use chrono::Utc;
    use std::sync::Arc;
    use test_utils::builder::TestBuilder;

    async fn state(config: Config, discord: Arc<FakeDiscordApi>) -> AppState {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        AppState::new(
            config,
            test_support::context(db, discord, Utc::now()),
            CommandRegistry::new(),
        )
    }

    /// Expected: every cron expression resolves to its own job
    #[test]
    fn resolves_cron_expressions() {
        for job in ScheduledJob::ALL {
            assert_eq!(ScheduledJob::from_cron(job.cron()), Some(job));
        }
        assert_eq!(ScheduledJob::from_cron("0 17 * * *"), None);
    }

    /// Expected: unknown expression spawns nothing and touches no service
    #[tokio::test]
    async fn ignores_unknown_cron() {
        let discord = Arc::new(FakeDiscordApi::new());
        let state = state(Config::for_tests(), discord.clone()).await;

        assert!(scheduled("* * * * * *", state).is_none());
        assert!(discord.calls().is_empty());
    }

    /// Expected: detached daily quote job posts to the main channel
    #[tokio::test]
    async fn runs_job_detached() {
        let base = test_server::spawn().await;
        let mut config = Config::for_tests();
        config.quotes_daily_url = base.join("daily").unwrap();
        let discord = Arc::new(FakeDiscordApi::new());
        let state = state(config, discord.clone()).await;

        scheduled(ScheduledJob::DailyQuote.cron(), state)
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            discord.calls(),
            vec![DiscordCall::PostMessage {
                channel_id: 700,
                message: OutgoingMessage::text(
                    "🗨️ *\"Freedom never sleeps.\"*\n\n— **Democracy Officer**"
                ),
            }]
        );
    }

    /// Expected: job failure is swallowed and the task still completes
    #[tokio::test]
    async fn swallows_job_failure() {
        let discord = Arc::new(FakeDiscordApi::failing());
        let state = state(Config::for_tests(), discord.clone()).await;

        let handle = scheduled(ScheduledJob::LfgCleanup.cron(), state).unwrap();

        assert!(handle.await.is_ok());
        assert_eq!(discord.calls(), vec![DiscordCall::GuildChannels { guild_id: 300 }]);
    }
}
