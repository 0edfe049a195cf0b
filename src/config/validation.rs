//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the sink output names something writable in principle
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - An empty service name is allowed; it is logged as-is

use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sink.output must not be empty")]
    EmptyOutput,

    #[error("sink.output `{0}` is a directory")]
    OutputIsDirectory(String),

    #[error("{field} contains a line break")]
    LineBreak { field: &'static str },
}

/// Check a parsed configuration.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let output = config.sink.output.trim();
    if output.is_empty() {
        errors.push(ValidationError::EmptyOutput);
    } else if output != "stdout" && output != "stderr" && Path::new(output).is_dir() {
        errors.push(ValidationError::OutputIsDirectory(output.to_string()));
    }

    if config.service_name.contains(['\n', '\r']) {
        errors.push(ValidationError::LineBreak {
            field: "service_name",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
