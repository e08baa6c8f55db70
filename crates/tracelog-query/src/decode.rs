//! Line decoder - the exact inverse of the bracket-format encoder.
//!
//! A well-formed line is eight lazily matched bracketed groups with no
//! separator between them. Anything else on a line (startup banners, stack
//! traces, truncated writes) is not an error; the caller skips it.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use tracelog_core::{LogEntry, LogLevel, NA};

lazy_static! {
    static ref LINE_REGEX: Regex = Regex::new(
        r"^\[(.*?)\]\[(.*?)\]\[(.*?)\]\[(.*?)\]\[(.*?)\]\[(.*?)\]\[(.*?)\]\[(.*?)\]$"
    )
    .expect("log line regex is valid");
}

/// Decode one persisted line into a [`LogEntry`].
///
/// Returns `None` when the line does not match the grammar, its timestamp or
/// level token is unrecognizable, or a non-sentinel payload or execution-time
/// token fails to parse. A `None` means skip, never abort.
pub fn decode_line(line: &str) -> Option<LogEntry> {
    let captures = LINE_REGEX.captures(line)?;

    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&captures[1])
        .ok()?
        .with_timezone(&Utc);
    let level = LogLevel::parse(&captures[2])?;
    let component = captures[3].to_string();
    let correlation_id = optional(&captures[4]).map(str::to_string);
    let message = captures[5].to_string();

    let payload = match optional(&captures[6]) {
        // Malformed JSON in the payload slot disqualifies the whole line.
        Some(raw) => Some(serde_json::from_str(raw).ok()?),
        None => None,
    };

    let execution_name = optional(&captures[7]).map(str::to_string);
    let execution_time_ms = match optional(&captures[8]) {
        Some(raw) => Some(raw.strip_suffix(" ms")?.parse::<f64>().ok()?),
        None => None,
    };

    Some(LogEntry {
        correlation_id,
        timestamp,
        level,
        component,
        message,
        payload,
        execution_name,
        execution_time_ms,
    })
}

fn optional(token: &str) -> Option<&str> {
    if token == NA {
        None
    } else {
        Some(token)
    }
}
