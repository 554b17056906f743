use async_trait::async_trait;
use dnsfault_application::ports::{DatagramCapture, DnsReplySender, IcmpSender};
use dnsfault_domain::DomainError;
use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockDnsReplySender {
    sent: Arc<Mutex<Vec<(Vec<u8>, SocketAddr)>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockDnsReplySender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsReplySender for MockDnsReplySender {
    async fn send_reply(&self, message: &[u8], to: SocketAddr) -> Result<usize, DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::TransportError("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push((message.to_vec(), to));
        Ok(message.len())
    }
}

#[derive(Clone, Default)]
pub struct MockIcmpSender {
    sent: Arc<Mutex<Vec<(Vec<u8>, IpAddr)>>>,
}

impl MockIcmpSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, IpAddr)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl IcmpSender for MockIcmpSender {
    async fn send_icmp(&self, packet: &[u8], to: IpAddr) -> Result<usize, DomainError> {
        self.sent.lock().unwrap().push((packet.to_vec(), to));
        Ok(packet.len())
    }
}

/// Hands out queued datagrams in order; fails once the queue is empty.
#[derive(Clone, Default)]
pub struct MockDatagramCapture {
    queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
    captures: Arc<Mutex<usize>>,
}

impl MockDatagramCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, datagram: Vec<u8>) {
        self.queue.lock().unwrap().push_back(datagram);
    }

    pub fn capture_count(&self) -> usize {
        *self.captures.lock().unwrap()
    }
}

#[async_trait]
impl DatagramCapture for MockDatagramCapture {
    async fn capture_next(&self) -> Result<Vec<u8>, DomainError> {
        *self.captures.lock().unwrap() += 1;
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DomainError::CaptureFailed("no datagram queued".to_string()))
    }
}
