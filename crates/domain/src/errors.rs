use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Captured datagram too short: need {needed} bytes, got {actual}")]
    TruncatedDatagram { needed: usize, actual: usize },

    #[error("Invalid response mode '{0}'. Expected one of: NOERROR, FORMERR, SERVFAIL, NOTIMPL, ICMP_ERROR")]
    InvalidMode(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Failed to capture original datagram: {0}")]
    CaptureFailed(String),
}
