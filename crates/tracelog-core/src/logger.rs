//! Logger facade - the leveled surface applications call.
//!
//! One instance is safe to share across all concurrent callers: it holds only
//! the component name and a sink handle, and reads the per-call-chain
//! correlation scope at each call. Lines are handed to the sink in call
//! order, never buffered or reordered here.

use crate::domain::{LoggerConfig, LogLevel};
use crate::encode::{format_log_line, Execution};
use crate::error::ConfigError;
use crate::sink::{build_sink, Sink};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// A started measurement for the `*_with_execution_time` variants.
#[derive(Debug, Clone)]
pub struct ExecutionTimer {
    name: String,
    start: Instant,
}

impl ExecutionTimer {
    /// Start timing a named execution.
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed time since start, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Leveled logging facade
pub struct Logger {
    component: String,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Build a logger, resolving the configured sink once.
    ///
    /// Fails fast with [`ConfigError`] on an unusable sink selection; that is
    /// the only fallible moment in this type's lifetime.
    pub async fn new(config: LoggerConfig) -> Result<Self, ConfigError> {
        let sink = build_sink(&config.sink).await?;
        Ok(Self {
            component: config.component,
            sink,
        })
    }

    /// Build a logger around an already-constructed sink.
    pub fn with_sink(component: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            component: component.into(),
            sink,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub async fn info(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Info, message, None, args).await;
    }

    pub async fn warn(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Warn, message, None, args).await;
    }

    pub async fn error(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Error, message, None, args).await;
    }

    pub async fn debug(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Debug, message, None, args).await;
    }

    pub async fn info_with_execution_time(
        &self,
        message: &str,
        timer: &ExecutionTimer,
        args: &[Value],
    ) {
        self.log_with_execution_time(LogLevel::Info, message, timer, args)
            .await;
    }

    pub async fn warn_with_execution_time(
        &self,
        message: &str,
        timer: &ExecutionTimer,
        args: &[Value],
    ) {
        self.log_with_execution_time(LogLevel::Warn, message, timer, args)
            .await;
    }

    pub async fn error_with_execution_time(
        &self,
        message: &str,
        timer: &ExecutionTimer,
        args: &[Value],
    ) {
        self.log_with_execution_time(LogLevel::Error, message, timer, args)
            .await;
    }

    pub async fn debug_with_execution_time(
        &self,
        message: &str,
        timer: &ExecutionTimer,
        args: &[Value],
    ) {
        self.log_with_execution_time(LogLevel::Debug, message, timer, args)
            .await;
    }

    /// Run a future and emit one info line carrying its measured duration.
    ///
    /// The measurement is taken after the future resolves, whether it
    /// produced a success or an error value; the output is returned
    /// untouched. Call-site replacement for method-table instrumentation.
    pub async fn timed<F>(&self, name: &str, fut: F) -> F::Output
    where
        F: Future,
    {
        let timer = ExecutionTimer::start(name);
        let output = fut.await;
        self.info_with_execution_time(name, &timer, &[]).await;
        output
    }

    async fn log_with_execution_time(
        &self,
        level: LogLevel,
        message: &str,
        timer: &ExecutionTimer,
        args: &[Value],
    ) {
        let execution = Execution::new(timer.name(), timer.elapsed_ms());
        self.log(level, message, Some(&execution), args).await;
    }

    async fn log(&self, level: LogLevel, message: &str, execution: Option<&Execution>, args: &[Value]) {
        let line = format_log_line(level, &self.component, message, execution, args);

        // A broken sink must never fail the caller's own work.
        if let Err(e) = self.sink.write_line(&line).await {
            warn!("Failed to write log line: {e:#}");
        }
    }
}
