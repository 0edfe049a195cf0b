//! Newline-delimited JSON sink.
//!
//! Each record becomes one flat JSON object:
//! `level`, `ts`, `caller` (optional), `msg`, then bound fields, then
//! call-site fields, in that order. Fields never replace `level`, `ts`,
//! `caller`, `msg` or a key written before them.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::UNIX_EPOCH;

use serde_json::{Map, Value as JsonValue};

use super::{Level, Record, Sink, SinkConfig};
use crate::error::LoggerError;

/// Writes records as JSON lines to a single output.
pub struct JsonSink {
    writer: Mutex<Box<dyn Write + Send>>,
    min_level: Level,
    add_caller: bool,
    dropped: AtomicU64,
}

impl JsonSink {
    /// Open the output named by `config`.
    pub fn open(config: &SinkConfig) -> Result<Self, LoggerError> {
        let writer: Box<dyn Write + Send> = match config.output.as_str() {
            "stdout" => Box::new(io::stdout()),
            "stderr" => Box::new(io::stderr()),
            path => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LoggerError::SinkInitialization {
                        output: path.to_string(),
                        source,
                    })?;
                Box::new(file)
            }
        };

        tracing::debug!(output = %config.output, preset = ?config.preset, "JSON sink opened");
        Ok(Self::from_writer(writer, config))
    }

    /// Wrap an already-open writer.
    pub fn from_writer(writer: Box<dyn Write + Send>, config: &SinkConfig) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level: config.preset.min_level(),
            add_caller: config.add_caller,
            dropped: AtomicU64::new(0),
        }
    }

    /// Number of records lost to write errors.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn encode(&self, record: &Record) -> serde_json::Result<Vec<u8>> {
        let mut map = Map::new();
        map.insert("level".into(), record.level.as_str().into());

        let ts = record
            .timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        map.insert("ts".into(), ts.into());

        if self.add_caller {
            if let Some(caller) = record.caller_string() {
                map.insert("caller".into(), caller.into());
            }
        }
        map.insert("msg".into(), record.message.clone().into());

        for field in record.emitted_fields() {
            map.insert(field.key.to_string(), JsonValue::from(&field.value));
        }

        let mut line = serde_json::to_vec(&map)?;
        line.push(b'\n');
        Ok(line)
    }
}

impl Sink for JsonSink {
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn emit(&self, record: &Record) {
        let line = match self.encode(record) {
            Ok(line) => line,
            Err(e) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(error = %e, "Dropped log record: encoding failed");
                return;
            }
        };

        // A poisoned lock still guards whole lines; keep writing.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writer.write_all(&line) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, "Dropped log record: write failed");
        }
    }

    fn flush(&self) -> io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
