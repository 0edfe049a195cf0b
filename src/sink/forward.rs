//! Sink that re-emits records as `tracing` events.
//!
//! Useful when the function already installs a `tracing-subscriber` pipeline
//! (for example the JSON formatter the Lambda runtime crates set up) and the
//! enriched records should flow through it.

use std::io;

use serde_json::{Map, Value as JsonValue};

use super::{Level, Record, Sink};

/// Target used for forwarded events.
pub const FORWARD_TARGET: &str = "lambdalog::record";

/// Hands every record to the current `tracing` dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

fn fields_json(record: &Record) -> String {
    let map: Map<String, JsonValue> = record
        .emitted_fields()
        .into_iter()
        .map(|f| (f.key.to_string(), JsonValue::from(&f.value)))
        .collect();
    JsonValue::Object(map).to_string()
}

impl Sink for TracingSink {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => tracing::enabled!(target: FORWARD_TARGET, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: FORWARD_TARGET, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: FORWARD_TARGET, tracing::Level::WARN),
            Level::Error => tracing::enabled!(target: FORWARD_TARGET, tracing::Level::ERROR),
        }
    }

    fn emit(&self, record: &Record) {
        let fields = fields_json(record);
        let caller = record.caller_string().unwrap_or_default();
        let message = record.message.as_str();

        // `tracing` needs the level at compile time.
        match record.level {
            Level::Debug => tracing::debug!(target: FORWARD_TARGET, caller = %caller, fields = %fields, "{}", message),
            Level::Info => tracing::info!(target: FORWARD_TARGET, caller = %caller, fields = %fields, "{}", message),
            Level::Warn => tracing::warn!(target: FORWARD_TARGET, caller = %caller, fields = %fields, "{}", message),
            Level::Error => tracing::error!(target: FORWARD_TARGET, caller = %caller, fields = %fields, "{}", message),
        }
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
