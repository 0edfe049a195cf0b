//! Log sinks.
//!
//! # Data Flow
//! ```text
//! logger::BoundLogger::emit
//!     → Record (level, message, bound fields, call-site fields, caller)
//!     → Sink::enabled (preset level check)
//!     → Sink::emit:
//!         - json.rs    (newline-delimited JSON to stdout/stderr/file)
//!         - memory.rs  (kept in memory for inspection)
//!         - forward.rs (re-emitted as `tracing` events)
//!     → Sink::flush on Logger::sync
//! ```
//!
//! # Design Decisions
//! - `emit` cannot fail; a sink drops what it cannot write
//! - Only `flush` reports errors
//! - Sinks are `Send + Sync` and shared through `Arc`

pub mod forward;
pub mod json;
pub mod memory;
pub mod record;

use std::io;

use serde::{Deserialize, Serialize};

pub use forward::TracingSink;
pub use json::JsonSink;
pub use memory::MemorySink;
pub use record::{is_reserved, Field, Level, Record, Value, RESERVED_KEYS};

/// Destination for log records.
pub trait Sink: Send + Sync {
    /// Whether records at `level` are written at all.
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    /// Write one record. Failures are absorbed by the sink.
    fn emit(&self, record: &Record);

    /// Push buffered records to their destination.
    fn flush(&self) -> io::Result<()>;
}

/// Fixed sink behaviour bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Info and above.
    #[default]
    Production,
    /// Everything, including debug.
    Development,
}

impl Preset {
    pub fn min_level(&self) -> Level {
        match self {
            Preset::Production => Level::Info,
            Preset::Development => Level::Debug,
        }
    }
}

/// Settings used to open a [`JsonSink`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SinkConfig {
    /// `stdout`, `stderr`, or a file path opened for append.
    pub output: String,

    pub preset: Preset,

    /// Record the `file:line` of each log call.
    pub add_caller: bool,
}

impl SinkConfig {
    pub fn production() -> Self {
        Self::default()
    }

    pub fn development() -> Self {
        Self {
            preset: Preset::Development,
            ..Self::default()
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            output: "stderr".to_string(),
            preset: Preset::Production,
            add_caller: true,
        }
    }
}
