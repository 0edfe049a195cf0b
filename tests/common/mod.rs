//! Shared fixtures for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use lambdalog::sink::SinkConfig;
use lambdalog::{ExecutionContext, FunctionMetadata, Logger};

/// The checkout invocation used throughout the scenarios.
pub fn checkout_context() -> ExecutionContext {
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

/// In-memory writer whose contents can be read back after logging.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    #[allow(dead_code)]
    pub fn lines(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger writing JSON lines into a [`SharedBuffer`].
#[allow(dead_code)]
pub fn json_logger(service: &str, config: &SinkConfig) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let sink = lambdalog::sink::JsonSink::from_writer(Box::new(buffer.clone()), config);
    let logger = Logger::with_sink(service, &checkout_context(), Arc::new(sink));
    (logger, buffer)
}
