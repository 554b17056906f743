pub mod transport;

pub use transport::{RawIcmpSender, UdpDnsSocket};
