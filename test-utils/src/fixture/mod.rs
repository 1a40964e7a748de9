//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build the JSON bodies Discord posts to the interaction endpoint. Unlike
//! factories, fixtures do NOT touch the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let body = fixture::interaction::command_with_options(
//!     "submit",
//!     serde_json::json!([{ "name": "science", "type": 4, "value": 12 }]),
//! );
//! ```

pub mod interaction;
