//! Per-request tracing span with a correlation ID.
//!
//! Every request gets a UUID v4 and a span carrying it, so the startup
//! line, the handler logs, and the completion line for one request can
//! be tied together when requests interleave.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request correlation ID, readable from request extensions in handlers.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Wraps each request in a span with a fresh correlation ID.
///
/// Applied as the outermost layer. The response status is recorded on
/// the span once the handler returns; the completion log line carries
/// the elapsed time.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let start = Instant::now();
        let response = next.run(request).await;
        tracing::Span::current().record("status", response.status().as_u16());
        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
