//! Synthesis of DNS responses that echo a client's query (RFC 1035 §4.1).
//!
//! The question section is treated as an opaque byte span: it is located by
//! scanning for the root label terminator and copied verbatim.

use crate::DomainError;
use std::ops::Range;

pub const HEADER_LEN: usize = 12;

/// QR=1, OPCODE=0, RD=1, RA=1. The RCODE goes in the low 4 bits.
pub const RESPONSE_FLAGS: u16 = 0x8180;

/// Root label terminator followed by QTYPE (2) and QCLASS (2).
const QUESTION_TRAILER_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsResponseHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl DnsResponseHeader {
    /// Header for a single-question response with no records.
    pub fn new(id: u16, rcode: u8) -> Self {
        Self {
            id,
            flags: RESPONSE_FLAGS | u16::from(rcode & 0x0F),
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2..4].copy_from_slice(&self.flags.to_be_bytes());
        buf[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        buf[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        buf[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        buf[10..12].copy_from_slice(&self.arcount.to_be_bytes());
        buf
    }
}

/// A query datagram as received from the network.
#[derive(Debug, Clone, Copy)]
pub struct RawQuery<'a> {
    bytes: &'a [u8],
}

impl<'a> RawQuery<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn transaction_id(&self) -> Result<u16, DomainError> {
        match self.bytes {
            [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
            _ => Err(DomainError::MalformedQuery(format!(
                "{} bytes is too short for a transaction id",
                self.bytes.len()
            ))),
        }
    }

    /// Byte range of the question section: from the end of the header up to
    /// and including QTYPE/QCLASS after the first zero byte.
    pub fn question_span(&self) -> Result<Range<usize>, DomainError> {
        let len = self.bytes.len();
        if len < HEADER_LEN {
            return Err(DomainError::MalformedQuery(format!(
                "{} bytes is shorter than the {}-byte header",
                len, HEADER_LEN
            )));
        }

        let terminator = self.bytes[HEADER_LEN..]
            .iter()
            .position(|&b| b == 0)
            .map(|offset| HEADER_LEN + offset)
            .ok_or_else(|| {
                DomainError::MalformedQuery("question name has no root label terminator".into())
            })?;

        let end = terminator + QUESTION_TRAILER_LEN;
        if end > len {
            return Err(DomainError::MalformedQuery(format!(
                "question ends at byte {} but query is only {} bytes",
                end, len
            )));
        }

        Ok(HEADER_LEN..end)
    }

    pub fn question(&self) -> Result<&'a [u8], DomainError> {
        let span = self.question_span()?;
        let bytes = self.bytes;
        Ok(&bytes[span])
    }
}

/// Builds a response echoing the query's id and question with `rcode`.
///
/// The output is always `HEADER_LEN + question.len()` bytes.
pub fn build_dns_response(query: &RawQuery<'_>, rcode: u8) -> Result<Vec<u8>, DomainError> {
    let id = query.transaction_id()?;
    let question = query.question()?;

    let header = DnsResponseHeader::new(id, rcode);
    let mut buf = Vec::with_capacity(HEADER_LEN + question.len());
    buf.extend_from_slice(&header.to_bytes());
    buf.extend_from_slice(question);
    Ok(buf)
}
