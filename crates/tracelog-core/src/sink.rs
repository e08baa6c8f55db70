//! Sink abstraction - where encoded lines go.
//!
//! A sink receives fully rendered lines, one at a time, in call order. It
//! must not buffer or reorder; interleaving across concurrent scopes is
//! expected and fine.

use crate::domain::SinkConfig;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Destination for encoded log lines
#[async_trait]
pub trait Sink: Send + Sync {
    async fn write_line(&self, line: &str) -> Result<()>;
}

/// Resolve a sink configuration into a live sink, once, at construction.
pub async fn build_sink(config: &SinkConfig) -> Result<Arc<dyn Sink>, ConfigError> {
    match config {
        SinkConfig::Console => Ok(Arc::new(ConsoleSink)),
        SinkConfig::File { path } => Ok(Arc::new(FileSink::open(path).await?)),
    }
}

/// Writes lines to stdout
pub struct ConsoleSink;

#[async_trait]
impl Sink for ConsoleSink {
    async fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Appends lines to a single log file, flushing after each line
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) the log file for appending.
    pub async fn open(path: &Path) -> Result<Self, std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path).await?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

#[async_trait]
impl Sink for FileSink {
    async fn write_line(&self, line: &str) -> Result<()> {
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes())
            .await
            .context("Failed to write log line")?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}
