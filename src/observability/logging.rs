//! Diagnostic logging for the crate itself.
//!
//! # Responsibilities
//! - Install a `tracing` subscriber for internal events
//! - Read the filter from `LAMBDALOG_LOG`
//!
//! # Design Decisions
//! - JSON output, so CloudWatch keeps diagnostics machine-readable
//! - Writes to stderr; stdout stays free for function output
//! - `try_init`: a subscriber installed by the host wins

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the diagnostic filter directives.
pub const FILTER_ENV: &str = "LAMBDALOG_LOG";

/// Filter used when `LAMBDALOG_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "lambdalog=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the diagnostic subscriber.
///
/// Returns `false` when another global subscriber was already set.
pub fn init_subscriber() -> bool {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}
