mod datagram_capture;
mod dns_reply_sender;
mod icmp_sender;

pub use datagram_capture::DatagramCapture;
pub use dns_reply_sender::DnsReplySender;
pub use icmp_sender::IcmpSender;
