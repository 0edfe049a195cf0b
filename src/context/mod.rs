//! Execution context supplied by the hosting runtime.
//!
//! # Data Flow
//! ```text
//! Lambda runtime
//!     → environment (function name/version, log group/stream)   [process-wide]
//!     → invocation   (request id)                               [per call]
//!     → ExecutionContext
//!     → logger::fields::EnrichmentFields
//! ```
//!
//! # Design Decisions
//! - Process-wide values are an explicit struct, never read from globals
//!   inside the logger factory
//! - Missing environment variables become empty strings, not errors
//! - Nothing here is validated; the runtime is trusted

use serde::{Deserialize, Serialize};

/// Environment variable holding the function name.
pub const ENV_FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";
/// Environment variable holding the function version.
pub const ENV_FUNCTION_VERSION: &str = "AWS_LAMBDA_FUNCTION_VERSION";
/// Environment variable holding the CloudWatch log group.
pub const ENV_LOG_GROUP_NAME: &str = "AWS_LAMBDA_LOG_GROUP_NAME";
/// Environment variable holding the CloudWatch log stream.
pub const ENV_LOG_STREAM_NAME: &str = "AWS_LAMBDA_LOG_STREAM_NAME";

/// Values that stay fixed for the lifetime of a function process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FunctionMetadata {
    pub function_name: String,
    pub function_version: String,
    pub log_group_name: String,
    pub log_stream_name: String,
}

impl FunctionMetadata {
    /// Read the metadata the Lambda runtime exports into the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the metadata through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            function_name: get(ENV_FUNCTION_NAME),
            function_version: get(ENV_FUNCTION_VERSION),
            log_group_name: get(ENV_LOG_GROUP_NAME),
            log_stream_name: get(ENV_LOG_STREAM_NAME),
        }
    }
}

/// Snapshot of one invocation's identifying values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    pub request_id: String,
    pub function: FunctionMetadata,
}

impl ExecutionContext {
    pub fn new(request_id: impl Into<String>, function: FunctionMetadata) -> Self {
        Self {
            request_id: request_id.into(),
            function,
        }
    }

    /// Context for `request_id` with function metadata taken from the environment.
    pub fn from_env(request_id: impl Into<String>) -> Self {
        Self::new(request_id, FunctionMetadata::from_env())
    }
}
