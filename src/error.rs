/// Errors produced by the HPACK encoder.
///
/// Configuration errors are rejected at the call that supplies the bad value,
/// never mid-encode. `SizeAccounting` poisons the instance: the header block
/// under construction and the dynamic table state are no longer trustworthy,
/// so every later call fails with `Poisoned` until the instance is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HpackError {
    /// Requested dynamic table size exceeds the SETTINGS value range.
    #[error("table size {0} exceeds the maximum SETTINGS value")]
    InvalidTableSize(usize),

    /// Dynamic table size bookkeeping no longer matches its entries.
    #[error("dynamic table size accounting mismatch")]
    SizeAccounting,

    /// The instance hit an internal fault earlier and must be discarded.
    #[error("encoder poisoned by a prior internal fault")]
    Poisoned,
}
