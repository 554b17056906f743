use async_trait::async_trait;
use dnsfault_domain::DomainError;

#[async_trait]
pub trait DatagramCapture: Send + Sync {
    /// Wait for the next datagram to quote in an ICMP error.
    async fn capture_next(&self) -> Result<Vec<u8>, DomainError>;
}
