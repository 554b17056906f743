use std::net::SocketAddr;
use std::sync::Arc;

/// A datagram received on the listening socket together with its sender.
#[derive(Debug, Clone)]
pub struct InboundQuery {
    pub bytes: Arc<[u8]>,
    pub client: SocketAddr,
}

impl InboundQuery {
    pub fn new(bytes: impl Into<Arc<[u8]>>, client: SocketAddr) -> Self {
        Self {
            bytes: bytes.into(),
            client,
        }
    }
}
