//! Enrichment field keys and the fields bound onto every logger.

use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::sink::Field;

pub const SERVICE_NAME_KEY: &str = "service.name";
pub const AWS_REQUEST_ID: &str = "aws.request_id";
pub const AWS_FUNCTION_NAME: &str = "aws.function_name";
pub const AWS_FUNCTION_VERSION: &str = "aws.function_version";
pub const AWS_LOG_GROUP_NAME: &str = "aws.log_group_name";
pub const AWS_LOG_STREAM_NAME: &str = "aws.log_stream_name";

/// Every enrichment key, in emission order.
pub const ENRICHMENT_KEYS: [&str; 6] = [
    SERVICE_NAME_KEY,
    AWS_REQUEST_ID,
    AWS_FUNCTION_NAME,
    AWS_FUNCTION_VERSION,
    AWS_LOG_GROUP_NAME,
    AWS_LOG_STREAM_NAME,
];

/// The six context fields captured when a logger is built.
///
/// Values are copied out of the context once and never refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentFields {
    fields: Arc<[Field]>,
}

impl EnrichmentFields {
    pub fn new(service_name: &str, ctx: &ExecutionContext) -> Self {
        let fields = vec![
            Field::string(SERVICE_NAME_KEY, service_name),
            Field::string(AWS_REQUEST_ID, ctx.request_id.as_str()),
            Field::string(AWS_FUNCTION_NAME, ctx.function.function_name.as_str()),
            Field::string(AWS_FUNCTION_VERSION, ctx.function.function_version.as_str()),
            Field::string(AWS_LOG_GROUP_NAME, ctx.function.log_group_name.as_str()),
            Field::string(AWS_LOG_STREAM_NAME, ctx.function.log_stream_name.as_str()),
        ];
        Self {
            fields: fields.into(),
        }
    }

    /// Value bound under `key`, if it is one of the enrichment keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.value.as_str())
    }

    /// `(key, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (&*f.key, f.value.as_str().unwrap_or_default()))
    }

    pub fn as_fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn shared(&self) -> Arc<[Field]> {
        Arc::clone(&self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FunctionMetadata;

    fn ctx() -> ExecutionContext {
        ExecutionContext::new(
            "abc-123",
            FunctionMetadata {
                function_name: "checkout".into(),
                function_version: "3".into(),
                log_group_name: "/aws/lambda/checkout".into(),
                log_stream_name: "2024/01/01/[$LATEST]xyz".into(),
            },
        )
    }

    #[test]
    fn test_keys_are_fixed_and_ordered() {
        let fields = EnrichmentFields::new("checkout-service", &ctx());
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ENRICHMENT_KEYS);
    }

    #[test]
    fn test_values_come_from_context() {
        let fields = EnrichmentFields::new("checkout-service", &ctx());
        assert_eq!(fields.get(SERVICE_NAME_KEY), Some("checkout-service"));
        assert_eq!(fields.get(AWS_REQUEST_ID), Some("abc-123"));
        assert_eq!(fields.get(AWS_FUNCTION_NAME), Some("checkout"));
        assert_eq!(fields.get(AWS_FUNCTION_VERSION), Some("3"));
        assert_eq!(fields.get(AWS_LOG_GROUP_NAME), Some("/aws/lambda/checkout"));
        assert_eq!(fields.get(AWS_LOG_STREAM_NAME), Some("2024/01/01/[$LATEST]xyz"));
        assert_eq!(fields.get("aws.region"), None);
    }

    #[test]
    fn test_empty_inputs_are_kept() {
        let fields = EnrichmentFields::new("", &ExecutionContext::default());
        assert_eq!(fields.as_fields().len(), 6);
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_values_are_snapshots() {
        let mut context = ctx();
        let fields = EnrichmentFields::new("svc", &context);
        context.request_id = "changed".into();
        assert_eq!(fields.get(AWS_REQUEST_ID), Some("abc-123"));
    }
}
