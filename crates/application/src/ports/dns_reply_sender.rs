use async_trait::async_trait;
use dnsfault_domain::DomainError;
use std::net::SocketAddr;

#[async_trait]
pub trait DnsReplySender: Send + Sync {
    /// Send a DNS message to the client's address and port.
    /// Returns the number of bytes written.
    async fn send_reply(&self, message: &[u8], to: SocketAddr) -> Result<usize, DomainError>;
}
