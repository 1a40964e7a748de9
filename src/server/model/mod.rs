//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are
//! what command handlers work with. Parameter types describe a single operation, such as
//! logging a submission or creating a Discord channel.

pub mod channel;
pub mod event;
pub mod feed;
pub mod statistics;
