//! # Tracelog Query
//!
//! Streaming decode and query over persisted bracket-format log files.
//!
//! The engine re-parses files written by `tracelog-core`, applies filter
//! predicates, windows the filtered stream into pages, and sorts each page
//! by timestamp descending. Memory stays bounded regardless of file size.
//!
//! ## Example
//!
//! ```no_run
//! use tracelog_query::{query, LogFilter, QueryParams};
//!
//! # async fn demo() -> Result<(), tracelog_query::QueryError> {
//! let result = query(
//!     "logs/app.log",
//!     QueryParams::new(1, 20).with_filter(LogFilter {
//!         level: Some("error".to_string()),
//!         ..Default::default()
//!     }),
//! )
//! .await?;
//!
//! println!("{} matching entries", result.total);
//! # Ok(())
//! # }
//! ```

mod decode;
mod error;
mod query;

pub use decode::decode_line;
pub use error::QueryError;
pub use query::{query, LogFilter, QueryParams, QueryResult};

// The entry type queries return lives in the core crate.
pub use tracelog_core::{LogEntry, LogLevel};
