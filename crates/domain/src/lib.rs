//! dnsfault domain layer: packet synthesis and configuration, no I/O.
pub mod checksum;
pub mod config;
pub mod dns_response;
pub mod errors;
pub mod icmp_error;
pub mod inbound_query;
pub mod response_mode;

pub use checksum::internet_checksum;
pub use config::{CliOverrides, Config};
pub use dns_response::{build_dns_response, DnsResponseHeader, RawQuery};
pub use errors::DomainError;
pub use icmp_error::{
    build_error_packet, build_error_packet_from_parts, EmbeddedFragment, ErrorPacketHeader,
    IcmpErrorKind, ERROR_PACKET_LEN,
};
pub use inbound_query::InboundQuery;
pub use response_mode::ResponseMode;
