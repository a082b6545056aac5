//! Header pairs and the caller-facing indexing override.

/// How a header pair may interact with the encoder's dynamic table.
///
/// This is an explicit per-pair knob. The encoder never infers sensitivity
/// from header content; a caller that wants `authorization` or a session
/// cookie kept out of the shared table says so here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// Index the pair into the dynamic table unless an exact table match
    /// already covers it.
    #[default]
    Auto,
    /// Emit a literal and skip dynamic table insertion. Intermediaries may
    /// still re-encode the pair with indexing.
    NoIndex,
    /// Emit a literal marked never-indexed (RFC 7541 Section 6.2.3).
    /// Intermediaries must preserve this representation hop by hop.
    NeverIndex,
}

/// A single header name-value pair.
///
/// Names are compared byte-for-byte as stored; the encoder performs no case
/// normalization. HTTP/2 requires lower-case names on the wire, which is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
    pub index: IndexMode,
}

impl HeaderField {
    /// A header pair with the default indexing policy.
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            index: IndexMode::Auto,
        }
    }

    /// A header pair encoded as a literal without indexing.
    pub fn without_indexing(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            index: IndexMode::NoIndex,
            ..Self::new(name, value)
        }
    }

    /// A header pair encoded as a literal that must never be indexed.
    pub fn never_indexed(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            index: IndexMode::NeverIndex,
            ..Self::new(name, value)
        }
    }
}
