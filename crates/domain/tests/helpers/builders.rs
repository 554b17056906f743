#![allow(dead_code)]

/// Builds raw DNS query datagrams for tests.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    name: String,
    qtype: u16,
    qclass: u16,
    trailing: Vec<u8>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            name: "example.com".to_string(),
            qtype: 1,
            qclass: 1,
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    /// Extra bytes after the question, e.g. an EDNS OPT record.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing = bytes.to_vec();
        self
    }

    pub fn encoded_question(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for label in self.name.split('.').filter(|l| !l.is_empty()) {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        let arcount: u16 = if self.trailing.is_empty() { 0 } else { 1 };
        buf.extend_from_slice(&arcount.to_be_bytes());
        buf.extend_from_slice(&self.encoded_question());
        buf.extend_from_slice(&self.trailing);
        buf
    }
}

/// Builds a captured datagram whose bytes are `0, 1, 2, ...` so that slices
/// can be checked by position.
pub struct DatagramBuilder {
    len: usize,
}

impl DatagramBuilder {
    pub fn sequential(len: usize) -> Self {
        Self { len }
    }

    pub fn build(&self) -> Vec<u8> {
        (0..self.len).map(|i| i as u8).collect()
    }
}
