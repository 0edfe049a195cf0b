//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Crate internals produce diagnostics via `tracing` macros:
//!     → sink write failures, config warnings, CLI progress
//!     → logging.rs (subscriber: env filter + JSON to stderr)
//! ```
//!
//! # Design Decisions
//! - Diagnostics never go through the enriched logger they describe
//! - Quiet by default (`warn`); raise with `LAMBDALOG_LOG`

pub mod logging;

pub use logging::init_subscriber;
