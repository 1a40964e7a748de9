//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level
//! error type that wraps domain-specific errors raised during startup, by repositories,
//! by outbound HTTP calls and by scheduled jobs. Transport-level failures of the
//! interaction endpoint are modelled separately by `InteractionError`, which maps
//! itself onto HTTP status codes.

pub mod config;
pub mod feed;
pub mod interaction;
pub mod internal;
pub mod statistics;

use thiserror::Error;

use crate::server::error::{config::ConfigError, feed::FeedError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so that `?` works across layers.
/// Command handlers never surface these to Discord; they log them and reply with a
/// short user-facing message instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// JSON feed could not be fetched or decoded.
    #[error(transparent)]
    FeedErr(#[from] FeedError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket binding or serving error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal state, usually malformed identifiers.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
