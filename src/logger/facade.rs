//! The context-enriched logger handed to function code.

use std::fmt::Display;
use std::sync::Arc;

use super::bound::BoundLogger;
use super::fields::EnrichmentFields;
use super::sugared::SugaredLogger;
use crate::config::LoggerConfig;
use crate::context::ExecutionContext;
use crate::error::LoggerError;
use crate::sink::{JsonSink, Level, Sink, SinkConfig};

/// Logger pre-bound with the service and execution-context fields.
///
/// Exposes the same sink through two views: [`Logger::typed`] takes a message
/// plus typed fields, [`Logger::sugared`] (and the leveled methods on
/// `Logger` itself) take positional values. Cloning is cheap and clones share
/// the sink. Call [`Logger::sync`] before the invocation ends.
#[derive(Debug, Clone)]
pub struct Logger {
    sugared: SugaredLogger,
    typed: BoundLogger,
    enrichment: EnrichmentFields,
}

impl Logger {
    /// Build a logger writing JSON lines to stderr with the production preset.
    pub fn new(service_name: &str, ctx: &ExecutionContext) -> Result<Self, LoggerError> {
        Self::with_sink_config(service_name, ctx, &SinkConfig::production())
    }

    /// Build a logger over a JSON sink opened from `config`.
    pub fn with_sink_config(
        service_name: &str,
        ctx: &ExecutionContext,
        config: &SinkConfig,
    ) -> Result<Self, LoggerError> {
        let sink = JsonSink::open(config)?;
        Ok(Self::with_sink(service_name, ctx, Arc::new(sink)))
    }

    /// Build a logger from a loaded configuration file.
    pub fn from_config(config: &LoggerConfig, ctx: &ExecutionContext) -> Result<Self, LoggerError> {
        Self::with_sink_config(&config.service_name, ctx, &config.sink)
    }

    /// Build a logger over an existing sink. Cannot fail.
    pub fn with_sink(service_name: &str, ctx: &ExecutionContext, sink: Arc<dyn Sink>) -> Self {
        let enrichment = EnrichmentFields::new(service_name, ctx);
        let typed = BoundLogger::new(Arc::clone(&sink), enrichment.shared());
        let sugared = SugaredLogger::new(BoundLogger::new(sink, enrichment.shared()));

        tracing::debug!(
            service = service_name,
            request_id = %ctx.request_id,
            "Logger constructed"
        );

        Self {
            sugared,
            typed,
            enrichment,
        }
    }

    /// Typed view: message plus explicit key/value fields.
    pub fn typed(&self) -> &BoundLogger {
        &self.typed
    }

    /// Positional-value view.
    pub fn sugared(&self) -> &SugaredLogger {
        &self.sugared
    }

    /// Fields attached to every record.
    pub fn enrichment(&self) -> &EnrichmentFields {
        &self.enrichment
    }

    /// Flush buffered records. Safe to call more than once.
    pub fn sync(&self) -> Result<(), LoggerError> {
        self.sugared.sync().map_err(LoggerError::Flush)
    }

    #[track_caller]
    pub fn debug(&self, args: &[&dyn Display]) {
        self.sugared.log_at(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: &[&dyn Display]) {
        self.sugared.log_at(Level::Info, args);
    }

    #[track_caller]
    pub fn warn(&self, args: &[&dyn Display]) {
        self.sugared.log_at(Level::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, args: &[&dyn Display]) {
        self.sugared.log_at(Level::Error, args);
    }

    /// Same as [`Logger::info`], for callers that expect a fallible log call.
    ///
    /// Always returns `Ok(())`, even when the sink drops the record.
    #[track_caller]
    pub fn log(&self, args: &[&dyn Display]) -> Result<(), LoggerError> {
        self.sugared.log_at(Level::Info, args);
        Ok(())
    }
}
