//! Raw ICMPv4 sender. Opening the socket needs CAP_NET_RAW (or root).

use async_trait::async_trait;
use dnsfault_application::ports::IcmpSender;
use dnsfault_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

/// Opens a fresh raw socket for every packet, so a missing privilege only
/// affects the ICMP mode and is reported per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawIcmpSender;

impl RawIcmpSender {
    pub fn new() -> Self {
        Self
    }

    fn send_blocking(packet: &[u8], to: IpAddr) -> Result<usize, DomainError> {
        let IpAddr::V4(_) = to else {
            return Err(DomainError::TransportError(format!(
                "ICMPv4 errors cannot be sent to IPv6 host {}",
                to
            )));
        };

        let socket = Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4)).map_err(|e| {
            DomainError::TransportError(format!(
                "Failed to open raw ICMP socket (requires CAP_NET_RAW): {}",
                e
            ))
        })?;

        // Raw sockets carry no port; 0 is ignored by the kernel.
        let dest = SocketAddr::new(to, 0);
        socket.send_to(packet, &dest.into()).map_err(|e| {
            DomainError::TransportError(format!("Failed to send ICMP packet to {}: {}", to, e))
        })
    }
}

#[async_trait]
impl IcmpSender for RawIcmpSender {
    async fn send_icmp(&self, packet: &[u8], to: IpAddr) -> Result<usize, DomainError> {
        let packet = packet.to_vec();
        let sent = tokio::task::spawn_blocking(move || Self::send_blocking(&packet, to))
            .await
            .map_err(|e| DomainError::TransportError(format!("ICMP send task failed: {}", e)))??;
        debug!(client = %to, bytes = sent, "Raw ICMP packet written");
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_ipv6_destination_rejected_by_blocking_send() {
        let result = RawIcmpSender::send_blocking(&[0u8; 36], IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert!(matches!(result, Err(DomainError::TransportError(_))));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_ipv6_destination_rejected_before_opening_socket() {
        let sender = RawIcmpSender::new();
        let result = sender
            .send_icmp(&[0u8; 36], IpAddr::V6(Ipv6Addr::LOCALHOST))
            .await;
        assert!(matches!(result, Err(DomainError::TransportError(_))));
    }
}
