//! One's-complement Internet checksum (RFC 1071).

/// Computes the 16-bit one's-complement checksum of `data`.
///
/// Words are read big-endian. An odd trailing byte is treated as the high
/// byte of a word whose low byte is zero. An empty buffer yields `0xFFFF`.
pub fn internet_checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    let mut chunks = data.chunks_exact(2);
    for word in &mut chunks {
        sum += u32::from(u16::from_be_bytes([word[0], word[1]]));
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    if let [last] = chunks.remainder() {
        sum += u32::from(*last) << 8;
    }
    while sum >> 16 != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}
