use uuid::Uuid;

/// Per-request context inserted by the logging middleware.
///
/// Handlers read it through `Extension<RequestContext>` when they need to
/// correlate their own log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
}

impl RequestContext {
    /// Fresh context with a time-ordered (v7) request id.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::now_v7(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
