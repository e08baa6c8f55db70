//! Query error types.
//!
//! Only whole-query failures surface here. A line that fails to decode is
//! skipped silently; it is treated as non-log noise in the file, never as an
//! error and never counted.

use std::path::PathBuf;

/// Errors that can occur while running a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The query target does not resolve to a readable file.
    #[error("Log file not found: {0}")]
    FileNotFound(PathBuf),

    /// The stream failed mid-read.
    #[error("Failed to read log file: {0}")]
    Io(#[from] std::io::Error),
}
