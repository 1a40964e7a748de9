//! Interaction webhook, commands and background jobs.
//!
//! Discord posts every slash command to a single HTTP endpoint. Requests are verified
//! against the application's Ed25519 public key, decoded, and routed to a command by
//! name. A cron scheduler runs the recurring jobs alongside the web server.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - Verification and routing of interaction requests
//! - **Interaction** (`interaction/`) - Signature check, payload model and reply types
//! - **Commands** (`command/`) - Slash command handlers and the command registry
//! - **Service Layer** (`service/`) - Discord REST, JSON feeds and text formatting
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared configuration, services and registry
//! - **Startup** (`startup`) - Database, HTTP clients and command registration
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron jobs (daily quote, weekly stats, LFG cleanup)
//!
//! # Request Flow
//!
//! 1. **Router** hands every request on `/` to the interaction controller
//! 2. **Controller** rejects non-POST requests, verifies the signature, parses the body
//! 3. Pings are answered directly; commands are looked up in the **registry**
//! 4. The **command** uses services and repositories and returns its reply
//! 5. **Controller** serialises the reply unmodified

pub mod command;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod interaction;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
