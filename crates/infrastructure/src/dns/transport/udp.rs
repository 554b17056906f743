//! UDP listening socket (RFC 1035 §4.2.1).
//!
//! One socket serves three roles: receiving queries, sending DNS replies and
//! capturing the datagram quoted by ICMP errors.

use async_trait::async_trait;
use dnsfault_application::ports::{DatagramCapture, DnsReplySender};
use dnsfault_domain::{DomainError, InboundQuery};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, info};

pub struct UdpDnsSocket {
    socket: UdpSocket,
    recv_buffer_size: usize,
}

impl UdpDnsSocket {
    /// Binds a UDP socket on `bind_addr`. Datagrams longer than
    /// `recv_buffer_size` are truncated.
    pub fn bind(bind_addr: SocketAddr, recv_buffer_size: usize) -> Result<Self, DomainError> {
        let socket = create_udp_socket(bind_addr).map_err(|e| {
            DomainError::TransportError(format!("Failed to bind UDP socket on {}: {}", bind_addr, e))
        })?;

        info!(bind_address = %bind_addr, recv_buffer_size, "UDP socket bound");

        Ok(Self {
            socket,
            recv_buffer_size,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::TransportError(format!("Failed to read local address: {}", e)))
    }

    async fn recv_datagram(&self) -> std::io::Result<(Vec<u8>, SocketAddr)> {
        let mut buf = vec![0u8; self.recv_buffer_size];
        let (n, from) = self.socket.recv_from(&mut buf).await?;
        buf.truncate(n);
        Ok((buf, from))
    }

    /// Waits for the next query on the socket.
    pub async fn recv_query(&self) -> Result<InboundQuery, DomainError> {
        let (bytes, from) = self
            .recv_datagram()
            .await
            .map_err(|e| DomainError::TransportError(format!("Failed to receive query: {}", e)))?;

        debug!(client = %from, bytes = bytes.len(), "UDP query received");

        Ok(InboundQuery::new(bytes, from))
    }
}

#[async_trait]
impl DnsReplySender for UdpDnsSocket {
    async fn send_reply(&self, message: &[u8], to: SocketAddr) -> Result<usize, DomainError> {
        self.socket.send_to(message, to).await.map_err(|e| {
            DomainError::TransportError(format!("Failed to send UDP reply to {}: {}", to, e))
        })
    }
}

#[async_trait]
impl DatagramCapture for UdpDnsSocket {
    async fn capture_next(&self) -> Result<Vec<u8>, DomainError> {
        let (bytes, from) = self
            .recv_datagram()
            .await
            .map_err(|e| DomainError::CaptureFailed(e.to_string()))?;

        debug!(from = %from, bytes = bytes.len(), "Datagram captured for ICMP quote");

        Ok(bytes)
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> std::io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
