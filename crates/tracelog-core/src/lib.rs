//! # Tracelog Core
//!
//! Correlation-aware structured logging for async service pipelines.
//!
//! Every line produced while handling one logical unit of work (a request, a
//! queued message, a background job) carries the same correlation id, even
//! when the work suspends and resumes across async continuations.
//!
//! ## Modules
//!
//! - `context` - Correlation-scope propagation (task-local, await-safe)
//! - `domain` - Log entries, levels, logger configuration
//! - `encode` - The deterministic bracket-format line encoder
//! - `logger` - The leveled facade applications call
//! - `sink` - Where rendered lines are written (console, file)
//!
//! ## Example
//!
//! ```no_run
//! use tracelog_core::{context, Logger, LoggerConfig};
//!
//! # async fn demo() -> Result<(), tracelog_core::ConfigError> {
//! let logger = Logger::new(LoggerConfig::new("checkout")).await?;
//!
//! context::scope("order-42", async {
//!     // Every line in here carries correlation id "order-42".
//!     logger.info("charge accepted", &[]).await;
//! })
//! .await;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod domain;
pub mod encode;
pub mod error;
pub mod logger;
pub mod sink;

// Re-export commonly used types
pub use domain::{format_execution_time, LogEntry, LogLevel, LoggerConfig, SinkConfig, NA};
pub use encode::{format_log_line, Execution};
pub use error::ConfigError;
pub use logger::{ExecutionTimer, Logger};
pub use sink::{build_sink, ConsoleSink, FileSink, Sink};
