//! Error types surfaced by logger construction and flushing.
//!
//! Only two points can fail: opening the sink and flushing it. Individual
//! log calls never return an error.

use std::io;

use thiserror::Error;

/// Errors returned by [`crate::Logger`].
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The underlying sink could not be created.
    #[error("failed to initialize log sink `{output}`: {source}")]
    SinkInitialization {
        output: String,
        #[source]
        source: io::Error,
    },

    /// The sink reported a failure while flushing buffered records.
    #[error("failed to flush log sink: {0}")]
    Flush(#[source] io::Error),
}
