//! # Correlation-ID Middleware
//!
//! Reads `X-Correlation-ID` from the inbound request or generates a UUID,
//! opens a per-request tracing span carrying the id (so every log line
//! emitted while handling the request is attributable: no ambient mutable
//! globals), and echoes the header on every response regardless of outcome.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the per-request correlation id, inbound and outbound.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Attach a correlation id to the request's tracing span and echo it back.
pub async fn correlation_id_middleware(request: Request, next: Next) -> Response {
    let correlation_id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", correlation_id = %correlation_id);
    let mut response = next.run(request).instrument(span).await;

    // The inbound value was validated as a header already; a generated
    // UUID always is. from_str can only fail for non-ASCII inbound values,
    // which were rejected by to_str above.
    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response
            .headers_mut()
            .insert(CORRELATION_ID_HEADER, value);
    }
    response
}
