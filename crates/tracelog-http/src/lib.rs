//! # Tracelog HTTP
//!
//! Axum middleware adapters around the tracelog core:
//!
//! - [`trace_middleware`] opens a correlation scope around each request,
//!   taking the id from the configured inbound header or generating one.
//! - [`log_requests`] emits one structured line per request with method,
//!   path, status, and response time.
//!
//! ## Example
//!
//! ```no_run
//! use axum::{middleware, routing::get, Router};
//! use std::sync::Arc;
//! use tracelog_core::{Logger, LoggerConfig};
//! use tracelog_http::{log_requests, trace_middleware};
//!
//! # async fn demo() -> Result<(), tracelog_core::ConfigError> {
//! let logger = Arc::new(Logger::new(LoggerConfig::new("http")).await?);
//!
//! let app: Router = Router::new()
//!     .route("/health", get(|| async { "ok" }))
//!     .layer(middleware::from_fn_with_state(logger.clone(), log_requests))
//!     .layer(middleware::from_fn(trace_middleware));
//! # Ok(())
//! # }
//! ```

mod request_log;
mod trace;

pub use request_log::log_requests;
pub use trace::trace_middleware;
