//! Correlation context propagation.
//!
//! Binds a correlation id to the dynamic extent of one unit of work so that
//! any code it reaches, across every await point, can read the ambient id
//! without parameter threading. Built on `tokio::task_local!`, which carries
//! the binding through suspension and resumption and restores the outer
//! binding on every exit path, panics and cancellation included.
//!
//! Two concurrent tasks each running under their own [`scope`] never observe
//! each other's id; there is no global current-id variable anywhere.

use lazy_static::lazy_static;
use std::future::Future;
use std::sync::RwLock;

tokio::task_local! {
    static CORRELATION_ID: String;
}

/// Default name of the field adapters inspect for an inbound correlation id
/// (HTTP header, message attribute, query parameter).
pub const DEFAULT_TRACE_ID_FIELD: &str = "x-trace-id";

lazy_static! {
    static ref TRACE_ID_FIELD: RwLock<String> = RwLock::new(DEFAULT_TRACE_ID_FIELD.to_string());
}

/// Run `fut` with `correlation_id` as the ambient id for its whole dynamic
/// extent.
///
/// Nested calls shadow the outer id for their own extent and revert on exit.
/// The returned future can be awaited in place or handed to `tokio::spawn`;
/// the binding travels with it either way.
pub fn scope<F>(correlation_id: impl Into<String>, fut: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    CORRELATION_ID.scope(correlation_id.into(), fut)
}

/// Synchronous counterpart of [`scope`] for non-async call chains.
pub fn sync_scope<F, R>(correlation_id: impl Into<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    CORRELATION_ID.sync_scope(correlation_id.into(), f)
}

/// The innermost active correlation id, or `None` outside any scope.
pub fn current() -> Option<String> {
    CORRELATION_ID.try_with(|id| id.clone()).ok()
}

/// Generate a fresh collision-resistant correlation id.
///
/// Used by adapters when an inbound unit of work carries no id of its own.
pub fn generate_correlation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Name of the field adapters look up to find an inbound correlation id.
pub fn trace_id_field() -> String {
    TRACE_ID_FIELD
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Override the inbound correlation-id field name process-wide.
pub fn set_trace_id_field(field: impl Into<String>) {
    let mut guard = TRACE_ID_FIELD
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = field.into();
}
