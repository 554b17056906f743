#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_transports;

pub use mock_transports::{MockDatagramCapture, MockDnsReplySender, MockIcmpSender};

pub fn query_bytes(id: u16, name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&question_bytes(name));
    buf
}

pub fn question_bytes(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in name.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01]);
    buf
}
