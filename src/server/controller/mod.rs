//! HTTP request handlers.
//!
//! Discord delivers every slash command to a single webhook. `interaction` verifies and
//! routes those requests; `health` answers platform liveness probes.

pub mod health;
pub mod interaction;
