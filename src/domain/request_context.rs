//! Request-scoped identifiers.

use uuid::Uuid;

/// Identifiers for one inbound request.
///
/// Built once by the HTTP layer and passed by reference into every service
/// call. Services only log with it; repositories never see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    trace_id: String,
}

impl RequestContext {
    /// Create a context with a fresh request identifier.
    ///
    /// `inbound_trace_id` is reused when present and non-blank; otherwise a
    /// new trace identifier is generated.
    pub fn new(inbound_trace_id: Option<&str>) -> Self {
        let trace_id = inbound_trace_id
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            request_id: Uuid::new_v4(),
            trace_id,
        }
    }

    /// Context for work that does not originate from an HTTP request.
    pub fn detached() -> Self {
        Self::new(None)
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }
}
