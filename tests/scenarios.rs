//! End-to-end behaviour of the enriched logger over the JSON sink.

use std::sync::Arc;

use lambdalog::sink::{MemorySink, SinkConfig};
use lambdalog::{
    Field, Level, Logger, Value, AWS_FUNCTION_NAME, AWS_FUNCTION_VERSION, AWS_LOG_GROUP_NAME,
    AWS_LOG_STREAM_NAME, AWS_REQUEST_ID, SERVICE_NAME_KEY,
};

mod common;

#[test]
fn test_checkout_info_record() {
    let (logger, buffer) = common::json_logger("checkout-service", &SinkConfig::production());

    logger.info(&[&"order placed", &42]);
    logger.sync().unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1, "exactly one record");
    let record = &lines[0];

    assert_eq!(record["level"], "info");
    assert_eq!(record["msg"], "order placed 42");
    assert_eq!(record[SERVICE_NAME_KEY], "checkout-service");
    assert_eq!(record[AWS_REQUEST_ID], "abc-123");
    assert_eq!(record[AWS_FUNCTION_NAME], "checkout");
    assert_eq!(record[AWS_FUNCTION_VERSION], "3");
    assert_eq!(record[AWS_LOG_GROUP_NAME], "/aws/lambda/checkout");
    assert_eq!(record[AWS_LOG_STREAM_NAME], "2024/01/01/[$LATEST]xyz");
    assert!(record["caller"].as_str().unwrap().contains("scenarios.rs"));
}

#[test]
fn test_enrichment_keys_follow_message_in_order() {
    let (logger, buffer) = common::json_logger("svc", &SinkConfig::production());
    logger.typed().warn("typed", &[Field::i64("attempt", 2)]);

    let keys: Vec<String> = buffer.lines()[0].keys().cloned().collect();
    assert_eq!(
        keys,
        [
            "level",
            "ts",
            "caller",
            "msg",
            SERVICE_NAME_KEY,
            AWS_REQUEST_ID,
            AWS_FUNCTION_NAME,
            AWS_FUNCTION_VERSION,
            AWS_LOG_GROUP_NAME,
            AWS_LOG_STREAM_NAME,
            "attempt",
        ]
    );
}

#[test]
fn test_log_and_info_are_equivalent() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink("svc", &common::checkout_context(), sink.clone());

    logger.log(&[&"x"]).unwrap();
    logger.info(&[&"x"]);

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].level, records[1].level);
    assert_eq!(records[0].message, records[1].message);
    assert_eq!(records[0].context, records[1].context);
}

#[test]
fn test_typed_and_sugared_views_carry_same_fields() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink("svc", &common::checkout_context(), sink.clone());

    logger.sugared().info(&[&"loose"]);
    logger.typed().info("typed", &[]);

    let records = sink.records();
    for key in lambdalog::logger::ENRICHMENT_KEYS {
        assert_eq!(records[0].field(key), records[1].field(key), "key {}", key);
        assert!(matches!(records[0].field(key), Some(Value::Str(_))));
    }
}

#[test]
fn test_production_drops_debug() {
    let (logger, buffer) = common::json_logger("svc", &SinkConfig::production());
    logger.debug(&[&"hidden"]);
    logger.error(&[&"shown"]);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["level"], "error");

    let (logger, buffer) = common::json_logger("svc", &SinkConfig::development());
    logger.debug(&[&"visible"]);
    assert_eq!(buffer.lines()[0]["level"], "debug");
}

#[test]
fn test_clones_share_the_sink() {
    let (logger, buffer) = common::json_logger("svc", &SinkConfig::production());
    let clone = logger.clone();

    logger.info(&[&"one"]);
    clone.info(&[&"two"]);

    assert_eq!(buffer.lines().len(), 2);
}

#[test]
fn test_file_output_appends() {
    let path = std::env::temp_dir().join("lambdalog_scenario_file_output.log");
    std::fs::remove_file(&path).unwrap_or_default();

    let config = SinkConfig {
        output: path.to_string_lossy().into_owned(),
        ..SinkConfig::production()
    };
    for request in ["r-1", "r-2"] {
        let ctx = lambdalog::ExecutionContext::new(request, common::checkout_context().function);
        let logger = Logger::with_sink_config("svc", &ctx, &config).unwrap();
        logger.info(&[&"handled"]);
        logger.sync().unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = content
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v[AWS_REQUEST_ID].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ids, ["r-1", "r-2"]);

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_call_site_fields_cannot_override_record() {
    let (logger, buffer) = common::json_logger("checkout-service", &SinkConfig::production());

    logger.typed().error(
        "disk full",
        &[
            Field::string("level", "debug"),
            Field::string("msg", "ok"),
            Field::string(AWS_REQUEST_ID, "spoofed"),
            Field::u64("free_bytes", 0),
        ],
    );
    logger
        .typed()
        .with(&[Field::string(SERVICE_NAME_KEY, "other"), Field::string("ts", "0")])
        .warn("rebound", &[]);

    let lines = buffer.lines();
    assert_eq!(lines[0]["level"], "error");
    assert_eq!(lines[0]["msg"], "disk full");
    assert_eq!(lines[0][AWS_REQUEST_ID], "abc-123");
    assert_eq!(lines[0]["free_bytes"], 0);

    assert_eq!(lines[1][SERVICE_NAME_KEY], "checkout-service");
    assert!(lines[1]["ts"].is_f64());
}

#[test]
fn test_new_builds_production_logger() {
    let ctx = common::checkout_context();
    let logger = Logger::new("checkout-service", &ctx).expect("stderr sink opens");

    let enrichment = logger.enrichment();
    assert_eq!(enrichment.get(SERVICE_NAME_KEY), Some("checkout-service"));
    assert_eq!(enrichment.get(AWS_REQUEST_ID), Some("abc-123"));
    assert_eq!(enrichment.get(AWS_FUNCTION_NAME), Some("checkout"));
    assert_eq!(enrichment.get(AWS_FUNCTION_VERSION), Some("3"));
    assert_eq!(enrichment.get(AWS_LOG_GROUP_NAME), Some("/aws/lambda/checkout"));
    assert_eq!(enrichment.get(AWS_LOG_STREAM_NAME), Some("2024/01/01/[$LATEST]xyz"));

    // Production preset: debug is gated, info goes out.
    assert!(!logger.typed().enabled(Level::Debug));
    assert!(logger.typed().enabled(Level::Info));

    logger.info(&[&"cold start"]);
    logger.sync().unwrap();
    logger.sync().unwrap();
}
