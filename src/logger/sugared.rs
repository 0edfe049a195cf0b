//! Loosely-typed view: positional values rendered into one message.

use std::fmt::{self, Display, Write};
use std::io;
use std::panic::Location;

use super::bound::BoundLogger;
use crate::sink::Level;

/// Join positional values with single spaces.
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(message, "{}", arg);
    }
    message
}

/// Positional-argument front end over a [`BoundLogger`].
///
/// Every method is `#[track_caller]`, so the recorded caller is the user's
/// call site and not a frame inside this crate.
#[derive(Clone)]
pub struct SugaredLogger {
    inner: BoundLogger,
}

impl SugaredLogger {
    pub fn new(inner: BoundLogger) -> Self {
        Self { inner }
    }

    /// The typed logger this view delegates to.
    pub fn desugar(&self) -> &BoundLogger {
        &self.inner
    }

    #[track_caller]
    pub fn debug(&self, args: &[&dyn Display]) {
        self.log_at(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: &[&dyn Display]) {
        self.log_at(Level::Info, args);
    }

    #[track_caller]
    pub fn warn(&self, args: &[&dyn Display]) {
        self.log_at(Level::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, args: &[&dyn Display]) {
        self.log_at(Level::Error, args);
    }

    #[track_caller]
    pub fn log_at(&self, level: Level, args: &[&dyn Display]) {
        let caller = Location::caller();
        // Skip formatting entirely when the sink would drop the record.
        if !self.inner.enabled(level) {
            return;
        }
        self.inner.emit(level, join_args(args), Vec::new(), caller);
    }

    pub fn sync(&self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl fmt::Debug for SugaredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SugaredLogger").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Field, MemorySink};
    use std::sync::Arc;

    #[test]
    fn test_join_args() {
        assert_eq!(join_args(&[&"order placed", &42]), "order placed 42");
        assert_eq!(join_args(&[&1.5, &true, &'c']), "1.5 true c");
        assert_eq!(join_args(&[]), "");
    }

    #[test]
    fn test_positional_values_become_message() {
        let sink = Arc::new(MemorySink::new());
        let bound = BoundLogger::new(sink.clone(), vec![Field::string("k", "v")].into());
        let sugar = SugaredLogger::new(bound);

        sugar.warn(&[&"retrying in", &3, &"seconds"]);

        let records = sink.records();
        assert_eq!(records[0].level, Level::Warn);
        assert_eq!(records[0].message, "retrying in 3 seconds");
        assert!(records[0].fields.is_empty());
        assert_eq!(records[0].context.len(), 1);
        assert!(records[0].caller_string().unwrap().contains("sugared.rs"));
    }

    #[test]
    fn test_sync_flushes_sink() {
        let sink = Arc::new(MemorySink::new());
        let sugar = SugaredLogger::new(BoundLogger::new(sink.clone(), Vec::new().into()));
        sugar.sync().unwrap();
        assert_eq!(sink.flush_count(), 1);
    }
}
