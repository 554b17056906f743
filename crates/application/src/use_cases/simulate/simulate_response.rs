use crate::ports::{DatagramCapture, DnsReplySender, IcmpSender};
use dnsfault_domain::{
    build_dns_response, build_error_packet, DomainError, EmbeddedFragment, IcmpErrorKind,
    InboundQuery, RawQuery, ResponseMode, ERROR_PACKET_LEN,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

/// What was sent back for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    DnsReply {
        query_id: u16,
        rcode: u8,
        destination: SocketAddr,
        response: Vec<u8>,
    },
    IcmpError {
        destination: IpAddr,
        packet: [u8; ERROR_PACKET_LEN],
    },
}

impl DispatchOutcome {
    pub fn bytes(&self) -> &[u8] {
        match self {
            DispatchOutcome::DnsReply { response, .. } => response,
            DispatchOutcome::IcmpError { packet, .. } => packet,
        }
    }
}

/// Answers every query with the failure selected at startup.
///
/// Each call is independent: nothing is retained between queries.
pub struct SimulateResponseUseCase {
    mode_token: Arc<str>,
    mode: Option<ResponseMode>,
    icmp_kind: IcmpErrorKind,
    replies: Arc<dyn DnsReplySender>,
    icmp: Arc<dyn IcmpSender>,
    capture: Arc<dyn DatagramCapture>,
}

impl SimulateResponseUseCase {
    /// `mode_token` is parsed once here; an unknown token makes every
    /// subsequent `execute` fail with `InvalidMode`.
    pub fn new(
        mode_token: &str,
        replies: Arc<dyn DnsReplySender>,
        icmp: Arc<dyn IcmpSender>,
        capture: Arc<dyn DatagramCapture>,
    ) -> Self {
        Self {
            mode_token: mode_token.into(),
            mode: mode_token.parse().ok(),
            icmp_kind: IcmpErrorKind::default(),
            replies,
            icmp,
            capture,
        }
    }

    pub fn with_icmp_kind(mut self, kind: IcmpErrorKind) -> Self {
        self.icmp_kind = kind;
        self
    }

    pub fn mode(&self) -> Option<ResponseMode> {
        self.mode
    }

    pub async fn execute(&self, query: &InboundQuery) -> Result<DispatchOutcome, DomainError> {
        let mode = self
            .mode
            .ok_or_else(|| DomainError::InvalidMode(self.mode_token.to_string()))?;

        match mode.rcode() {
            Some(rcode) => self.reply_with_rcode(query, rcode).await,
            None => self.reply_with_icmp_error(query.client.ip()).await,
        }
    }

    async fn reply_with_rcode(
        &self,
        query: &InboundQuery,
        rcode: u8,
    ) -> Result<DispatchOutcome, DomainError> {
        let raw = RawQuery::new(&query.bytes);
        let query_id = raw.transaction_id()?;
        let response = build_dns_response(&raw, rcode)?;

        let sent = self.replies.send_reply(&response, query.client).await?;
        debug!(client = %query.client, query_id, rcode, bytes = sent, "DNS reply sent");

        Ok(DispatchOutcome::DnsReply {
            query_id,
            rcode,
            destination: query.client,
            response,
        })
    }

    async fn reply_with_icmp_error(
        &self,
        destination: IpAddr,
    ) -> Result<DispatchOutcome, DomainError> {
        // The quoted packet is the next datagram on the wire, not the query.
        let datagram = self.capture.capture_next().await?;
        let fragment = EmbeddedFragment::from_datagram(&datagram)?;
        let packet = build_error_packet(&fragment, self.icmp_kind);

        let sent = self.icmp.send_icmp(&packet, destination).await?;
        debug!(
            client = %destination,
            icmp_type = self.icmp_kind.icmp_type,
            icmp_code = self.icmp_kind.code,
            bytes = sent,
            "ICMP error sent"
        );

        Ok(DispatchOutcome::IcmpError {
            destination,
            packet,
        })
    }
}
