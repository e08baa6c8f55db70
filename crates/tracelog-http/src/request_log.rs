//! Request logging middleware - one structured line per handled request.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracelog_core::Logger;

/// Log method, path, status, and response time for each request.
///
/// Emits after the response is produced, inside the request's correlation
/// scope when layered under [`crate::trace_middleware`]. The timing payload
/// uses the same `{:.3} ms` rendering as execution measurements.
pub async fn log_requests(
    State(logger): State<Arc<Logger>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    logger
        .info(
            "HTTP REQUEST",
            &[json!({
                "method": method,
                "url": path,
                "statusCode": response.status().as_u16(),
                "responseTime": format!("{elapsed_ms:.3} ms"),
            })],
        )
        .await;

    response
}
