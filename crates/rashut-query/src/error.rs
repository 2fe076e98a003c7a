//! Error types for record queries

/// Query failure
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Transport-level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("query service returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body is not well-formed XML
    #[error("malformed response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Server answered with a SOAP fault
    #[error("query fault: {0}")]
    Fault(String),

    /// Source-specific failure (in-memory and test sources)
    #[error("source error: {0}")]
    Source(String),
}

impl QueryError {
    /// Whether retrying the same request might succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status } => *status >= 500,
            Self::Xml(_) | Self::Fault(_) | Self::Source(_) => false,
        }
    }
}
