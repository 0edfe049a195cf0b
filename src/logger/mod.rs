//! Context-enriched logger factory.
//!
//! # Data Flow
//! ```text
//! (service_name, ExecutionContext)
//!     → fields.rs   (six enrichment fields, captured once)
//!     → bound.rs    (typed view: message + Field slice)
//!     → sugared.rs  (positional values joined into the message)
//!     → facade.rs   (Logger: both views, sync, leveled calls, log)
//!     → sink::Sink
//! ```
//!
//! # Design Decisions
//! - One emission path (`BoundLogger::emit`); the sugared view only formats
//! - Enrichment lives in an `Arc<[Field]>` shared by both views and all clones
//! - Construction and `sync` are the only calls that return errors
//! - `#[track_caller]` on every public log method keeps caller attribution
//!   on user code

pub mod bound;
pub mod facade;
pub mod fields;
pub mod sugared;

pub use bound::BoundLogger;
pub use facade::Logger;
pub use fields::{
    EnrichmentFields, AWS_FUNCTION_NAME, AWS_FUNCTION_VERSION, AWS_LOG_GROUP_NAME,
    AWS_LOG_STREAM_NAME, AWS_REQUEST_ID, ENRICHMENT_KEYS, SERVICE_NAME_KEY,
};
pub use sugared::SugaredLogger;

/// Log positional values at debug level.
///
/// ```ignore
/// log_debug!(logger, "cache miss for", key);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log positional values at info level.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log positional values at warn level.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log positional values at error level.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::context::ExecutionContext;
    use crate::sink::{Level, MemorySink};
    use crate::Logger;
    use std::sync::Arc;

    #[test]
    fn test_macros_route_to_levels() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::with_sink("svc", &ExecutionContext::default(), sink.clone());
        let attempt = 2;

        crate::log_debug!(logger, "debugging");
        crate::log_info!(logger, "attempt", attempt);
        crate::log_warn!(logger, "slow", 1.5, "s",);
        crate::log_error!(logger.sugared(), "failed", attempt);

        let records = sink.records();
        let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
        assert_eq!(levels, [Level::Debug, Level::Info, Level::Warn, Level::Error]);
        assert_eq!(records[1].message, "attempt 2");
        assert_eq!(records[2].message, "slow 1.5 s");
    }
}
