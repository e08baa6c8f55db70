//! Domain types for tracelog:
//! - Log entries and levels (the unit of record)
//! - Logger and sink configuration

mod config;
mod entry;

pub use config::*;
pub use entry::*;
