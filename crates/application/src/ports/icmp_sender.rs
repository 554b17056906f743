use async_trait::async_trait;
use dnsfault_domain::DomainError;
use std::net::IpAddr;

/// Raw-protocol delivery of ICMP packets. Implementations need the host's
/// raw-socket capability; the caller never checks for it.
#[async_trait]
pub trait IcmpSender: Send + Sync {
    async fn send_icmp(&self, packet: &[u8], to: IpAddr) -> Result<usize, DomainError>;
}
