//! Log entry types - the unit of record for the bracket-encoded format

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel rendered in place of an absent optional field.
///
/// Keeping the field count fixed (never an empty or omitted bracket) is what
/// makes positional decoding sound.
pub const NA: &str = "N/A";

/// A structured log entry (persisted as one bracket-encoded line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Correlation id binding the entry to one logical unit of work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// Timestamp (ISO 8601, millisecond precision)
    pub timestamp: DateTime<Utc>,

    /// Log level
    pub level: LogLevel,

    /// Logical source component (stored upper-cased, as encoded)
    pub component: String,

    /// Free-text message
    pub message: String,

    /// Optional structured payload (at most one per entry)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,

    /// Optional name of a timed execution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_name: Option<String>,

    /// Optional measured execution time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<f64>,
}

impl LogEntry {
    /// Create a new entry stamped with the current instant.
    ///
    /// The component is upper-cased on construction so an entry always holds
    /// exactly what its encoded line will carry.
    pub fn new(level: LogLevel, component: impl AsRef<str>, message: impl Into<String>) -> Self {
        Self {
            correlation_id: None,
            timestamp: Utc::now(),
            level,
            component: component.as_ref().to_uppercase(),
            message: message.into(),
            payload: None,
            execution_name: None,
            execution_time_ms: None,
        }
    }

    /// Attach a correlation id
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Override the timestamp (fixture construction, replay)
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach a structured payload
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach a named execution measurement
    pub fn with_execution(mut self, name: impl Into<String>, time_ms: f64) -> Self {
        self.execution_name = Some(name.into());
        self.execution_time_ms = Some(time_ms);
        self
    }

    /// Render the canonical timestamp token (`2024-01-15T10:30:00.000Z`)
    pub fn timestamp_token(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Render the canonical execution-time token (`12.340 ms`), if any
    pub fn execution_time_token(&self) -> Option<String> {
        self.execution_time_ms.map(format_execution_time)
    }
}

/// Render a measured duration as the canonical wire token.
///
/// Three decimal places everywhere; the query engine's execution-time filter
/// does exact string matching against this rendering.
pub fn format_execution_time(time_ms: f64) -> String {
    format!("{time_ms:.3} ms")
}

/// Log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Upper-cased form used in encoded lines
    pub fn as_upper_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}
