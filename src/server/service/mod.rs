//! Services shared by command handlers and scheduled jobs.
//!
//! - **Discord**: outbound REST capability behind the `DiscordApi` trait
//! - **Feed**: JSON feeds for quotes and community statistics, with a request timeout
//! - **Format**: number, quote, timestamp and statistics rendering, constructed once

pub mod discord;
pub mod feed;
pub mod format;
