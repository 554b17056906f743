//! ICMP error packets (RFC 792) that quote a fragment of the failed datagram.

use crate::checksum::internet_checksum;
use crate::DomainError;
use serde::{Deserialize, Serialize};

pub const ICMP_HEADER_LEN: usize = 8;
/// The quoted IP header is assumed to carry no options.
pub const EMBEDDED_HEADER_LEN: usize = 20;
pub const EMBEDDED_PAYLOAD_LEN: usize = 8;
pub const ERROR_PACKET_LEN: usize = ICMP_HEADER_LEN + EMBEDDED_HEADER_LEN + EMBEDDED_PAYLOAD_LEN;

pub const TYPE_DESTINATION_UNREACHABLE: u8 = 3;
pub const CODE_HOST_UNREACHABLE: u8 = 1;

/// ICMP type/code pair for the generated error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcmpErrorKind {
    pub icmp_type: u8,
    pub code: u8,
}

impl IcmpErrorKind {
    pub fn new(icmp_type: u8, code: u8) -> Self {
        Self { icmp_type, code }
    }
}

impl Default for IcmpErrorKind {
    fn default() -> Self {
        Self {
            icmp_type: TYPE_DESTINATION_UNREACHABLE,
            code: CODE_HOST_UNREACHABLE,
        }
    }
}

/// First 20 + 8 bytes of the datagram that could not be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedFragment {
    pub header: [u8; EMBEDDED_HEADER_LEN],
    pub payload: [u8; EMBEDDED_PAYLOAD_LEN],
}

impl EmbeddedFragment {
    /// Takes the first 20 bytes of `header` and the first 8 bytes of
    /// `payload`; extra bytes are ignored.
    pub fn new(header: &[u8], payload: &[u8]) -> Result<Self, DomainError> {
        let header: [u8; EMBEDDED_HEADER_LEN] = header
            .get(..EMBEDDED_HEADER_LEN)
            .and_then(|h| h.try_into().ok())
            .ok_or(DomainError::TruncatedDatagram {
                needed: EMBEDDED_HEADER_LEN,
                actual: header.len(),
            })?;
        let payload: [u8; EMBEDDED_PAYLOAD_LEN] = payload
            .get(..EMBEDDED_PAYLOAD_LEN)
            .and_then(|p| p.try_into().ok())
            .ok_or(DomainError::TruncatedDatagram {
                needed: EMBEDDED_PAYLOAD_LEN,
                actual: payload.len(),
            })?;
        Ok(Self { header, payload })
    }

    /// Splits a captured datagram into bytes 0..20 and 20..28.
    pub fn from_datagram(datagram: &[u8]) -> Result<Self, DomainError> {
        let needed = EMBEDDED_HEADER_LEN + EMBEDDED_PAYLOAD_LEN;
        if datagram.len() < needed {
            return Err(DomainError::TruncatedDatagram {
                needed,
                actual: datagram.len(),
            });
        }
        Self::new(
            &datagram[..EMBEDDED_HEADER_LEN],
            &datagram[EMBEDDED_HEADER_LEN..],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPacketHeader {
    pub kind: IcmpErrorKind,
    pub checksum: u16,
    pub unused: u16,
}

impl ErrorPacketHeader {
    pub fn to_bytes(&self) -> [u8; ICMP_HEADER_LEN] {
        let mut buf = [0u8; ICMP_HEADER_LEN];
        buf[0] = self.kind.icmp_type;
        buf[1] = self.kind.code;
        buf[2..4].copy_from_slice(&self.checksum.to_be_bytes());
        buf[4..6].copy_from_slice(&self.unused.to_be_bytes());
        buf
    }
}

fn assemble(header: &ErrorPacketHeader, fragment: &EmbeddedFragment) -> [u8; ERROR_PACKET_LEN] {
    let mut packet = [0u8; ERROR_PACKET_LEN];
    packet[..ICMP_HEADER_LEN].copy_from_slice(&header.to_bytes());
    packet[ICMP_HEADER_LEN..ICMP_HEADER_LEN + EMBEDDED_HEADER_LEN]
        .copy_from_slice(&fragment.header);
    packet[ICMP_HEADER_LEN + EMBEDDED_HEADER_LEN..].copy_from_slice(&fragment.payload);
    packet
}

/// Builds a 36-byte ICMP error packet. The checksum covers the whole packet
/// with the checksum field zeroed.
pub fn build_error_packet(
    fragment: &EmbeddedFragment,
    kind: IcmpErrorKind,
) -> [u8; ERROR_PACKET_LEN] {
    let mut header = ErrorPacketHeader {
        kind,
        checksum: 0,
        unused: 0,
    };
    let provisional = assemble(&header, fragment);
    header.checksum = internet_checksum(&provisional);
    assemble(&header, fragment)
}

/// Convenience wrapper over [`build_error_packet`] taking the original
/// network header and payload as separate slices.
pub fn build_error_packet_from_parts(
    original_header: &[u8],
    original_payload: &[u8],
    kind: IcmpErrorKind,
) -> Result<[u8; ERROR_PACKET_LEN], DomainError> {
    let fragment = EmbeddedFragment::new(original_header, original_payload)?;
    Ok(build_error_packet(&fragment, kind))
}
