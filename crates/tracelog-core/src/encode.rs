//! Bracket-format line encoder.
//!
//! Every entry renders to exactly eight bracketed fields with no separator
//! between them:
//!
//! ```text
//! [timestamp][LEVEL][COMPONENT][correlationId][message][payload][execName][execTime]
//! ```
//!
//! Absent optional fields render the literal `N/A`, never an empty bracket,
//! so the decoder can always parse positionally.

use crate::context;
use crate::domain::{format_execution_time, LogEntry, LogLevel, NA};
use chrono::{SecondsFormat, Utc};

/// Optional execution measurement handed down by the facade
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Execution {
    pub name: Option<String>,
    pub time_ms: Option<f64>,
}

impl Execution {
    pub fn new(name: impl Into<String>, time_ms: f64) -> Self {
        Self {
            name: Some(name.into()),
            time_ms: Some(time_ms),
        }
    }
}

/// Strip characters that would corrupt the fixed-bracket grammar.
///
/// Brackets inside messages or component names are replaced with parentheses
/// at encode time, so a persisted line always has exactly eight well-formed
/// fields.
fn sanitize(text: &str) -> String {
    if text.contains(['[', ']']) {
        text.replace('[', "(").replace(']', ")")
    } else {
        text.to_string()
    }
}

/// Render one log line from the facade's arguments.
///
/// Reads the ambient correlation id from [`context::current`]. Of the variadic
/// `args`, the first JSON object becomes the payload; every other argument is
/// ignored. That only-the-first-object policy is intentional and covered by
/// tests.
pub fn format_log_line(
    level: LogLevel,
    component: &str,
    message: &str,
    execution: Option<&Execution>,
    args: &[serde_json::Value],
) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let correlation_id = context::current().unwrap_or_else(|| NA.to_string());

    let payload = args
        .iter()
        .find(|value| value.is_object())
        .map(|value| value.to_string());

    let execution_name = execution.and_then(|e| e.name.as_deref().map(sanitize));
    let execution_time = execution.and_then(|e| e.time_ms.map(format_execution_time));

    compose(
        &timestamp,
        level,
        &sanitize(component).to_uppercase(),
        &sanitize(&correlation_id),
        &sanitize(message),
        payload.as_deref(),
        execution_name.as_deref(),
        execution_time.as_deref(),
    )
}

impl LogEntry {
    /// Render this entry as its persisted line.
    ///
    /// Exact inverse of the query engine's decoder for entries free of the
    /// reserved bracket characters.
    pub fn encode(&self) -> String {
        compose(
            &self.timestamp_token(),
            self.level,
            &sanitize(&self.component),
            &sanitize(self.correlation_id.as_deref().unwrap_or(NA)),
            &sanitize(&self.message),
            self.payload.as_ref().map(|p| p.to_string()).as_deref(),
            self.execution_name.as_deref().map(sanitize).as_deref(),
            self.execution_time_token().as_deref(),
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn compose(
    timestamp: &str,
    level: LogLevel,
    component: &str,
    correlation_id: &str,
    message: &str,
    payload: Option<&str>,
    execution_name: Option<&str>,
    execution_time: Option<&str>,
) -> String {
    format!(
        "[{timestamp}][{level}][{component}][{correlation_id}][{message}][{payload}][{execution_name}][{execution_time}]",
        level = level.as_upper_str(),
        payload = payload.unwrap_or(NA),
        execution_name = execution_name.unwrap_or(NA),
        execution_time = execution_time.unwrap_or(NA),
    )
}
