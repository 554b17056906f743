pub mod raw_icmp;
pub mod udp;

pub use raw_icmp::RawIcmpSender;
pub use udp::UdpDnsSocket;
