//! Wire representations of header field encodings (RFC 7541 Section 6).
//!
//! Each representation kind owns its prefix pattern and width; the encoder
//! picks a variant and calls `encode` instead of branching on bit patterns
//! inline.

use crate::huffman;
use crate::integer;

/// The name half of a literal representation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Name<'a> {
    /// Reference to a table entry holding the name.
    Index(u64),
    /// Name spelled out as a string literal.
    Literal(&'a [u8]),
}

/// A single HPACK representation, ready to encode.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Representation<'a> {
    /// Indexed header field (Section 6.1): `1xxxxxxx`, 7-bit index.
    Indexed(u64),
    /// Literal with incremental indexing (Section 6.2.1): `01xxxxxx`, 6-bit
    /// name index.
    IncrementalIndexing { name: Name<'a>, value: &'a [u8] },
    /// Literal without indexing (Section 6.2.2): `0000xxxx`, 4-bit name index.
    WithoutIndexing { name: Name<'a>, value: &'a [u8] },
    /// Literal never indexed (Section 6.2.3): `0001xxxx`, 4-bit name index.
    NeverIndexed { name: Name<'a>, value: &'a [u8] },
    /// Dynamic table size update (Section 6.3): `001xxxxx`, 5-bit size.
    SizeUpdate(u64),
}

impl Representation<'_> {
    /// Append this representation's bytes to `dst`.
    pub(crate) fn encode(&self, dst: &mut Vec<u8>) {
        match *self {
            Self::Indexed(index) => integer::encode(index, 7, 0x80, dst),
            Self::IncrementalIndexing { name, value } => encode_literal(name, value, 6, 0x40, dst),
            Self::WithoutIndexing { name, value } => encode_literal(name, value, 4, 0x00, dst),
            Self::NeverIndexed { name, value } => encode_literal(name, value, 4, 0x10, dst),
            Self::SizeUpdate(max_size) => integer::encode(max_size, 5, 0x20, dst),
        }
    }
}

fn encode_literal(name: Name<'_>, value: &[u8], prefix_bits: u8, pattern: u8, dst: &mut Vec<u8>) {
    match name {
        Name::Index(index) => integer::encode(index, prefix_bits, pattern, dst),
        Name::Literal(name) => {
            // Name index 0 announces a literal name string.
            dst.push(pattern);
            encode_string(name, dst);
        }
    }
    encode_string(value, dst);
}

/// Encode a string literal: H flag bit, 7-bit prefixed length, then the
/// Huffman-coded or raw bytes. Huffman wins only when strictly shorter; a tie
/// goes to raw.
fn encode_string(data: &[u8], dst: &mut Vec<u8>) {
    let huffman_len = huffman::encoded_len(data);
    if huffman_len < data.len() {
        integer::encode(huffman_len as u64, 7, 0x80, dst);
        huffman::encode(data, dst);
    } else {
        integer::encode(data.len() as u64, 7, 0x00, dst);
        dst.extend_from_slice(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_is_single_byte_for_small_indices() {
        let mut buf = Vec::new();
        Representation::Indexed(2).encode(&mut buf);
        assert_eq!(buf, [0x82]);

        let mut buf = Vec::new();
        Representation::Indexed(62).encode(&mut buf);
        assert_eq!(buf, [0xbe]);
    }

    #[test]
    fn literal_prefix_patterns() {
        // Incremental indexing with an indexed name: 01xxxxxx.
        let mut buf = Vec::new();
        Representation::IncrementalIndexing {
            name: Name::Index(24),
            value: b"x",
        }
        .encode(&mut buf);
        assert_eq!(buf[0], 0x58);

        // Without indexing: 0000xxxx, 4-bit prefix saturates at 15.
        let mut buf = Vec::new();
        Representation::WithoutIndexing {
            name: Name::Index(24),
            value: b"x",
        }
        .encode(&mut buf);
        assert_eq!(&buf[..2], [0x0f, 0x09]);

        // Never indexed: 0001xxxx.
        let mut buf = Vec::new();
        Representation::NeverIndexed {
            name: Name::Index(1),
            value: b"x",
        }
        .encode(&mut buf);
        assert_eq!(buf[0], 0x11);
    }

    #[test]
    fn literal_name_uses_index_zero() {
        let mut buf = Vec::new();
        Representation::IncrementalIndexing {
            name: Name::Literal(b"zz"),
            value: b"y",
        }
        .encode(&mut buf);
        // Pattern byte with empty index, then a 2-byte raw name string
        // ("zz" huffman-encodes to 2 bytes as well, so raw wins the tie).
        assert_eq!(buf, [0x40, 0x02, b'z', b'z', 0x01, b'y']);
    }

    #[test]
    fn size_update_pattern() {
        let mut buf = Vec::new();
        Representation::SizeUpdate(0).encode(&mut buf);
        assert_eq!(buf, [0x20]);

        let mut buf = Vec::new();
        Representation::SizeUpdate(4096).encode(&mut buf);
        assert_eq!(buf, [0x3f, 0xe1, 0x1f]);
    }

    #[test]
    fn string_choice_is_strictly_shorter() {
        // "www.example.com" huffman-encodes to 12 < 15 bytes: H bit set.
        let mut buf = Vec::new();
        encode_string(b"www.example.com", &mut buf);
        assert_eq!(buf[0], 0x8c);
        assert_eq!(buf.len(), 13);

        // Digits encode to 5-6 bits each; "307" ties at 3 bytes and stays raw.
        let mut buf = Vec::new();
        encode_string(b"307", &mut buf);
        assert_eq!(buf, [0x03, b'3', b'0', b'7']);

        // Empty strings are legal and stay raw (0 is not strictly less than 0).
        let mut buf = Vec::new();
        encode_string(b"", &mut buf);
        assert_eq!(buf, [0x00]);
    }
}
