//! Dadbot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dadbot
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for statistics rows, fixtures for interaction payloads and a
//! deterministic Ed25519 key for signing requests the way Discord does.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert `submission` and `highscore` rows with sensible defaults
//! - **fixture**: Interaction JSON payloads, no database involved
//! - **signing**: Sign `timestamp || body` with a fixed test key
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Submission;
//!
//! #[tokio::test]
//! async fn test_submission_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Submission)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod signing;
