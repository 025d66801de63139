//! Request identity: assignment, lifecycle logging and extraction.

use crate::domain::RequestContext;
use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};

/// Inbound header carrying a caller-chosen trace identifier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Response header echoing the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware assigning a [`RequestContext`] to every request.
///
/// The context is stored in the request extensions, the handler runs inside
/// a span tagged with both identifiers, and both are echoed back as response
/// headers.
pub async fn assign_request_context(mut request: Request, next: Next) -> Response {
    let inbound = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    let ctx = RequestContext::new(inbound);

    let span = info_span!(
        "request",
        trace_id = %ctx.trace_id(),
        request_id = %ctx.request_id(),
    );
    info!(
        parent: &span,
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
        "Request received"
    );

    request.extensions_mut().insert(ctx.clone());

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        warn!(parent: &span, status = status.as_u16(), latency_ms, "Request failed");
    } else {
        info!(parent: &span, status = status.as_u16(), latency_ms, "Request completed");
    }

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(ctx.trace_id()) {
        headers.insert(TRACE_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    response
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(ctx.clone());
        }

        // Router mounted without the middleware
        let inbound = parts
            .headers
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        Ok(RequestContext::new(inbound))
    }
}
