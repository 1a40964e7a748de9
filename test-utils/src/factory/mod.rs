//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating statistics rows with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let submission = factory::create_submission(&db).await?;
//!
//!     // Customize
//!     let submission = factory::submission::SubmissionFactory::new(&db)
//!         .user_id("42")
//!         .event_key("hpp25")
//!         .science(120)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `submission` - Create submission log entries
//! - `highscore` - Create per-user highscore rows
//! - `helpers` - Unique id generation

pub mod helpers;
pub mod highscore;
pub mod submission;

pub use highscore::create_highscore;
pub use submission::create_submission;
