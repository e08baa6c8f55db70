//! Trace middleware - opens a correlation scope around each request.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracelog_core::context;

/// Run the rest of the stack inside a correlation scope.
///
/// The id comes from the configured inbound header
/// ([`context::trace_id_field`], `x-trace-id` by default); when the request
/// carries none, a fresh uuid is generated. Either way the id is echoed back
/// on the response under the same header so callers can correlate.
pub async fn trace_middleware(req: Request, next: Next) -> Response {
    let field = context::trace_id_field();

    let correlation_id = req
        .headers()
        .get(&field)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(context::generate_correlation_id);

    let mut response = context::scope(correlation_id.clone(), next.run(req)).await;

    if let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(field.as_bytes()),
        HeaderValue::from_str(&correlation_id),
    ) {
        response.headers_mut().insert(name, value);
    }

    response
}
