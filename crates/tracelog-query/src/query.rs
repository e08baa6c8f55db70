//! Streaming query engine over persisted log files.
//!
//! One pass, line by line, bounded memory: only the entries landing in the
//! requested page are ever materialized. The file handle lives for exactly
//! one pass; concurrent queries over the same file are fine.

use crate::decode::decode_line;
use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracelog_core::{format_execution_time, LogEntry};
use tracing::debug;

/// Filter predicates applied to each decoded entry, in declaration order,
/// short-circuiting on the first mismatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogFilter {
    /// Level, case-insensitive exact match
    pub level: Option<String>,
    /// Correlation id, exact match
    pub correlation_id: Option<String>,
    /// Component name, case-insensitive exact match
    pub component: Option<String>,
    /// Case-insensitive substring of the message
    pub message: Option<String>,
    /// Exact match against the rendered execution-time token (`12.340 ms`)
    pub execution_time: Option<String>,
    /// Case-insensitive substring of the serialized payload JSON; entries
    /// without a payload never match
    pub payload: Option<String>,
}

impl LogFilter {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(level) = &self.level {
            if !entry.level.as_str().eq_ignore_ascii_case(level) {
                return false;
            }
        }
        if let Some(correlation_id) = &self.correlation_id {
            if entry.correlation_id.as_deref() != Some(correlation_id.as_str()) {
                return false;
            }
        }
        if let Some(component) = &self.component {
            if !entry.component.eq_ignore_ascii_case(component) {
                return false;
            }
        }
        if let Some(message) = &self.message {
            if !entry
                .message
                .to_lowercase()
                .contains(&message.to_lowercase())
            {
                return false;
            }
        }
        if let Some(execution_time) = &self.execution_time {
            let rendered = entry.execution_time_ms.map(format_execution_time);
            if rendered.as_deref() != Some(execution_time.as_str()) {
                return false;
            }
        }
        if let Some(payload) = &self.payload {
            match &entry.payload {
                Some(value) => {
                    if !value
                        .to_string()
                        .to_lowercase()
                        .contains(&payload.to_lowercase())
                    {
                        return false;
                    }
                }
                // Sentinel payloads never match a payload filter.
                None => return false,
            }
        }
        true
    }
}

/// Pagination window plus filters for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// 1-based page number
    pub page: usize,
    /// Entries per page
    pub limit: usize,
    #[serde(default)]
    pub filter: LogFilter,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 50,
            filter: LogFilter::default(),
        }
    }
}

impl QueryParams {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            filter: LogFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Result of one query pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// Count of all filter-matching entries in the file, independent of the
    /// pagination window
    pub total: usize,
    /// The requested page, sorted by timestamp descending
    pub entries: Vec<LogEntry>,
}

/// Stream `path`, decode each line, filter, and window the filtered stream.
///
/// Pagination counts filter-passing entries only: an entry is materialized
/// when its 0-based passing rank falls inside
/// `[(page-1)*limit, (page-1)*limit + limit)`.
///
/// The materialized page is then sorted by timestamp descending. The sort is
/// page-local by design: callers get within-page reordering, not a global
/// ordering across pages.
pub async fn query(path: impl AsRef<Path>, params: QueryParams) -> Result<QueryResult, QueryError> {
    let path = path.as_ref();

    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(QueryError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    // A directory opens fine on some platforms; treat it the same as missing.
    if !file.metadata().await?.is_file() {
        return Err(QueryError::FileNotFound(path.to_path_buf()));
    }

    let page = params.page.max(1);
    let start = (page - 1) * params.limit;
    let end = start + params.limit;

    let mut entries = Vec::new();
    let mut total = 0usize;

    let mut lines = BufReader::new(file).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(entry) = decode_line(&line) else {
            debug!("Skipping non-log line: {line:.60}");
            continue;
        };

        if !params.filter.matches(&entry) {
            continue;
        }

        if total >= start && total < end {
            entries.push(entry);
        }
        total += 1;
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok(QueryResult { total, entries })
}
