//! Context-enriched structured logging for serverless functions.
//!
//! Every record emitted through a [`Logger`] carries the service name and the
//! invocation's execution context (`aws.request_id`, `aws.function_name`,
//! `aws.function_version`, `aws.log_group_name`, `aws.log_stream_name`), so
//! records from many invocations can be correlated in a central backend.
//!
//! ```no_run
//! use lambdalog::{ExecutionContext, Field, Logger};
//!
//! # fn main() -> Result<(), lambdalog::LoggerError> {
//! let ctx = ExecutionContext::from_env("abc-123");
//! let logger = Logger::new("checkout-service", &ctx)?;
//!
//! logger.info(&[&"order placed", &42]);
//! logger.typed().info("charged", &[Field::u64("amount_cents", 1299)]);
//!
//! logger.sync()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod observability;
pub mod sink;

pub use config::LoggerConfig;
pub use context::{ExecutionContext, FunctionMetadata};
pub use error::LoggerError;
pub use logger::{
    BoundLogger, EnrichmentFields, Logger, SugaredLogger, AWS_FUNCTION_NAME, AWS_FUNCTION_VERSION,
    AWS_LOG_GROUP_NAME, AWS_LOG_STREAM_NAME, AWS_REQUEST_ID, SERVICE_NAME_KEY,
};
pub use sink::{Field, Level, Sink, SinkConfig, Value};
