//! Log record model shared by every sink.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::sync::Arc;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(format!("unknown log level `{}`", other)),
        }
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

/// A typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::I64(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::I64(v) => (*v).into(),
            Value::U64(v) => (*v).into(),
            // Non-finite floats have no JSON form; keep them readable as strings.
            Value::F64(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(v.to_string())),
            Value::Bool(v) => serde_json::Value::Bool(*v),
        }
    }
}

/// A key paired with a typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn string(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::new(key, Value::Str(value.into()))
    }

    pub fn i64(key: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Self::new(key, Value::I64(value))
    }

    pub fn u64(key: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self::new(key, Value::U64(value))
    }

    pub fn f64(key: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Self::new(key, Value::F64(value))
    }

    pub fn bool(key: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    /// Store the `Display` rendering of `value`.
    pub fn display(key: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        Self::string(key, value.to_string())
    }

    /// Store the `Debug` rendering of `value`.
    pub fn debug(key: impl Into<Cow<'static, str>>, value: impl fmt::Debug) -> Self {
        Self::string(key, format!("{:?}", value))
    }
}

/// Keys the JSON line itself uses; fields may never take them.
pub const RESERVED_KEYS: [&str; 4] = ["level", "ts", "caller", "msg"];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// One log event as handed to a [`super::Sink`].
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub message: String,
    /// Fields bound on the logger, shared between records.
    pub context: Arc<[Field]>,
    /// Fields passed at the call site.
    pub fields: Vec<Field>,
    pub caller: Option<&'static Location<'static>>,
    pub timestamp: SystemTime,
}

impl Record {
    /// Bound fields followed by call-site fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.context.iter().chain(self.fields.iter())
    }

    /// Fields a sink should write: bound fields first, then call-site fields.
    /// Reserved keys are dropped and the first field under a key wins, so a
    /// call site can never replace the level, the message or a bound value.
    pub fn emitted_fields(&self) -> Vec<&Field> {
        let mut out: Vec<&Field> = Vec::with_capacity(self.context.len() + self.fields.len());
        for field in self.all_fields() {
            if is_reserved(&field.key) || out.iter().any(|f| f.key == field.key) {
                continue;
            }
            out.push(field);
        }
        out
    }

    /// First field stored under `key`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.all_fields().find(|f| f.key == key).map(|f| &f.value)
    }

    /// `file:line` of the call site, if recorded.
    pub fn caller_string(&self) -> Option<String> {
        self.caller.map(|loc| format!("{}:{}", loc.file(), loc.line()))
    }
}
