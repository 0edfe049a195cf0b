//! Typed view: message plus explicit key/value fields.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;
use std::time::SystemTime;

use crate::sink::{is_reserved, Field, Level, Record, Sink};

/// A sink handle with fields bound onto every record.
///
/// All emission in the crate goes through [`BoundLogger::emit`].
#[derive(Clone)]
pub struct BoundLogger {
    sink: Arc<dyn Sink>,
    context: Arc<[Field]>,
}

impl BoundLogger {
    pub fn new(sink: Arc<dyn Sink>, context: Arc<[Field]>) -> Self {
        Self { sink, context }
    }

    /// Derive a logger that also carries `fields`.
    ///
    /// Fields under a reserved key or a key already bound are ignored.
    pub fn with(&self, fields: &[Field]) -> Self {
        let mut context: Vec<Field> = self.context.to_vec();
        for field in fields {
            if is_reserved(&field.key) || context.iter().any(|f| f.key == field.key) {
                continue;
            }
            context.push(field.clone());
        }
        Self {
            sink: Arc::clone(&self.sink),
            context: context.into(),
        }
    }

    /// Fields bound on this logger.
    pub fn fields(&self) -> &[Field] {
        &self.context
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.sink.enabled(level)
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, fields: &[Field]) {
        self.emit(Level::Debug, message.into(), fields.to_vec(), Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>, fields: &[Field]) {
        self.emit(Level::Info, message.into(), fields.to_vec(), Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, fields: &[Field]) {
        self.emit(Level::Warn, message.into(), fields.to_vec(), Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>, fields: &[Field]) {
        self.emit(Level::Error, message.into(), fields.to_vec(), Location::caller());
    }

    /// Build a record and hand it to the sink. Never fails.
    pub fn emit(
        &self,
        level: Level,
        message: String,
        fields: Vec<Field>,
        caller: &'static Location<'static>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let record = Record {
            level,
            message,
            context: Arc::clone(&self.context),
            fields,
            caller: Some(caller),
            timestamp: SystemTime::now(),
        };
        self.sink.emit(&record);
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for BoundLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundLogger")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
