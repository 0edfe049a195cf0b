//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files, and
//! every section has defaults so a minimal file only names the service.

use serde::{Deserialize, Serialize};

use crate::context::FunctionMetadata;
use crate::sink::SinkConfig;

/// Root configuration for a logger.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Value of the `service.name` field.
    pub service_name: String,

    /// Where and how records are written.
    pub sink: SinkConfig,

    /// Function metadata overrides, for running outside the Lambda runtime.
    /// When absent the values are read from the environment.
    pub function: Option<FunctionMetadata>,
}

impl LoggerConfig {
    /// Configured function metadata, or the runtime environment's.
    pub fn function_metadata(&self) -> FunctionMetadata {
        self.function
            .clone()
            .unwrap_or_else(FunctionMetadata::from_env)
    }
}
