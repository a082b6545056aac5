//! HPACK static and dynamic header tables (RFC 7541 Section 2.3).
//!
//! The address space is shared: indices 1..=61 name the static table, 62 and
//! up count into the dynamic table from its most recent insertion. Dynamic
//! index numbers are relative to the current table state, not stable
//! identities — every insertion shifts the older entries up by one.

use std::collections::VecDeque;

use crate::error::HpackError;

/// Per-entry overhead added to the name and value lengths (RFC 7541 Section 4.1).
const ENTRY_OVERHEAD: usize = 32;

/// Static table entries, indices 1..=61 (RFC 7541 Appendix A).
const STATIC_TABLE: &[(&[u8], &[u8]); 61] = &[
    (b":authority", b""),                   // 1
    (b":method", b"GET"),                   // 2
    (b":method", b"POST"),                  // 3
    (b":path", b"/"),                       // 4
    (b":path", b"/index.html"),             // 5
    (b":scheme", b"http"),                  // 6
    (b":scheme", b"https"),                 // 7
    (b":status", b"200"),                   // 8
    (b":status", b"204"),                   // 9
    (b":status", b"206"),                   // 10
    (b":status", b"304"),                   // 11
    (b":status", b"400"),                   // 12
    (b":status", b"404"),                   // 13
    (b":status", b"500"),                   // 14
    (b"accept-charset", b""),               // 15
    (b"accept-encoding", b"gzip, deflate"), // 16
    (b"accept-language", b""),              // 17
    (b"accept-ranges", b""),                // 18
    (b"accept", b""),                       // 19
    (b"access-control-allow-origin", b""),  // 20
    (b"age", b""),                          // 21
    (b"allow", b""),                        // 22
    (b"authorization", b""),                // 23
    (b"cache-control", b""),                // 24
    (b"content-disposition", b""),          // 25
    (b"content-encoding", b""),             // 26
    (b"content-language", b""),             // 27
    (b"content-length", b""),               // 28
    (b"content-location", b""),             // 29
    (b"content-range", b""),                // 30
    (b"content-type", b""),                 // 31
    (b"cookie", b""),                       // 32
    (b"date", b""),                         // 33
    (b"etag", b""),                         // 34
    (b"expect", b""),                       // 35
    (b"expires", b""),                      // 36
    (b"from", b""),                         // 37
    (b"host", b""),                         // 38
    (b"if-match", b""),                     // 39
    (b"if-modified-since", b""),            // 40
    (b"if-none-match", b""),                // 41
    (b"if-range", b""),                     // 42
    (b"if-unmodified-since", b""),          // 43
    (b"last-modified", b""),                // 44
    (b"link", b""),                         // 45
    (b"location", b""),                     // 46
    (b"max-forwards", b""),                 // 47
    (b"proxy-authenticate", b""),           // 48
    (b"proxy-authorization", b""),          // 49
    (b"range", b""),                        // 50
    (b"referer", b""),                      // 51
    (b"refresh", b""),                      // 52
    (b"retry-after", b""),                  // 53
    (b"server", b""),                       // 54
    (b"set-cookie", b""),                   // 55
    (b"strict-transport-security", b""),    // 56
    (b"transfer-encoding", b""),            // 57
    (b"user-agent", b""),                   // 58
    (b"vary", b""),                         // 59
    (b"via", b""),                          // 60
    (b"www-authenticate", b""),             // 61
];

/// Result of a lookup across the static and dynamic tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// Exact (name, value) match; usable as an indexed header field.
    Full(u64),
    /// Name-only match; usable as an indexed name reference in a literal.
    Name(u64),
    /// Neither table knows the name.
    Miss,
}

/// Find the representation index for a header pair. Exact matches win over
/// name-only matches, and within each kind the static table is searched before
/// the dynamic one, so static indices are preferred when both tables hold the
/// same pair.
pub(crate) fn lookup(dynamic: &DynamicTable, name: &[u8], value: &[u8]) -> Lookup {
    if let Some(index) = find_static(name, value) {
        return Lookup::Full(index);
    }
    if let Some(index) = dynamic.find(name, value) {
        return Lookup::Full(index);
    }
    if let Some(index) = find_static_name(name) {
        return Lookup::Name(index);
    }
    if let Some(index) = dynamic.find_name(name) {
        return Lookup::Name(index);
    }
    Lookup::Miss
}

fn find_static(name: &[u8], value: &[u8]) -> Option<u64> {
    STATIC_TABLE
        .iter()
        .position(|&(n, v)| n == name && v == value)
        .map(|i| i as u64 + 1)
}

fn find_static_name(name: &[u8]) -> Option<u64> {
    STATIC_TABLE
        .iter()
        .position(|&(n, _)| n == name)
        .map(|i| i as u64 + 1)
}

struct Entry {
    name: Vec<u8>,
    value: Vec<u8>,
}

impl Entry {
    fn size(&self) -> usize {
        self.name.len() + self.value.len() + ENTRY_OVERHEAD
    }
}

/// The encoder's dynamic table (RFC 7541 Section 2.3.2).
///
/// Entries are stored newest-first; front of the deque is HPACK index 62.
/// Invariant: `size` equals the sum of entry sizes and never exceeds
/// `max_size` once a mutation completes.
pub(crate) struct DynamicTable {
    entries: VecDeque<Entry>,
    size: usize,
    max_size: usize,
}

impl DynamicTable {
    pub(crate) fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            size: 0,
            max_size,
        }
    }

    /// Insert a pair at the front, evicting oldest entries to make room.
    ///
    /// A pair larger than the whole table cannot be stored; per RFC 7541
    /// Section 4.4 the attempt still empties the table.
    pub(crate) fn insert(&mut self, name: Vec<u8>, value: Vec<u8>) -> Result<(), HpackError> {
        let entry = Entry { name, value };
        let entry_size = entry.size();
        if entry_size > self.max_size {
            self.entries.clear();
            self.size = 0;
            return Ok(());
        }
        while self.size + entry_size > self.max_size {
            self.evict_oldest()?;
        }
        self.entries.push_front(entry);
        self.size += entry_size;
        Ok(())
    }

    /// Apply a new maximum size, evicting oldest entries until it holds.
    pub(crate) fn set_max_size(&mut self, max_size: usize) -> Result<(), HpackError> {
        self.max_size = max_size;
        while self.size > self.max_size {
            self.evict_oldest()?;
        }
        Ok(())
    }

    fn evict_oldest(&mut self) -> Result<(), HpackError> {
        // Running out of entries while size still reads non-zero means the
        // bookkeeping diverged from the entries; same for a subtraction
        // underflow. Both poison the encoder.
        let evicted = self.entries.pop_back().ok_or(HpackError::SizeAccounting)?;
        self.size = self
            .size
            .checked_sub(evicted.size())
            .ok_or(HpackError::SizeAccounting)?;
        Ok(())
    }

    fn find(&self, name: &[u8], value: &[u8]) -> Option<u64> {
        self.entries
            .iter()
            .position(|e| e.name == name && e.value == value)
            .map(|i| i as u64 + STATIC_TABLE.len() as u64 + 1)
    }

    fn find_name(&self, name: &[u8]) -> Option<u64> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| i as u64 + STATIC_TABLE.len() as u64 + 1)
    }

    /// Sum of entry sizes currently held.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn max_size(&self) -> usize {
        self.max_size
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
