//! Error types for logger construction.
//!
//! Configuration errors are fatal and surfaced synchronously to whoever built
//! the logger; they are never retried internally. Per-line write failures are
//! handled inside the facade and never reach callers.

/// Errors that can occur while building a logger.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured sink backend is not one this crate provides.
    #[error("Unsupported sink backend: {0}")]
    UnsupportedSink(String),

    /// The file sink could not be opened for appending.
    #[error("Failed to initialize sink: {0}")]
    SinkInit(#[from] std::io::Error),
}
