//! Error Types
//!
//! Client-side validation failures and failed REST requests.

/// Which REST operation a request error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOp {
    List,
    Create,
    Delete,
}

impl ApiOp {
    pub fn message(&self) -> &'static str {
        match self {
            ApiOp::List => "Failed to fetch items",
            ApiOp::Create => "Failed to create item",
            ApiOp::Delete => "Failed to delete item",
        }
    }
}

/// Why a request failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Non-2xx response
    Status(u16),
    /// fetch() rejected or could not be issued
    Network(String),
    /// Body was not the expected JSON
    Decode(String),
}

impl std::fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestFailure::Status(code) => write!(f, "HTTP {}", code),
            RequestFailure::Network(msg) => write!(f, "network error: {}", msg),
            RequestFailure::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

/// A failed call against the items backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub op: ApiOp,
    pub cause: RequestFailure,
}

impl RequestError {
    pub fn new(op: ApiOp, cause: RequestFailure) -> Self {
        Self { op, cause }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.op.message(), self.cause)
    }
}

impl std::error::Error for RequestError {}

/// Form input rejected before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
