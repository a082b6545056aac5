//! Stateful HPACK encoder.
//!
//! One `Encoder` per connection side: compression state is directional, so a
//! request encoder and a response encoder never share an instance. Every
//! mutating operation takes `&mut self`; the indexing decisions of one call
//! depend on the exact sequence of prior insertions and evictions, which is
//! why the type offers no interior mutability.

use crate::error::HpackError;
use crate::field::{HeaderField, IndexMode};
use crate::repr::{Name, Representation};
use crate::table::{self, DynamicTable, Lookup};

/// SETTINGS_HEADER_TABLE_SIZE default (RFC 7540 Section 6.5.2).
pub const DEFAULT_TABLE_SIZE: usize = 4096;

/// SETTINGS values are 32-bit; a larger table size can never be negotiated.
const MAX_SETTINGS_TABLE_SIZE: u64 = u32::MAX as u64;

/// Encoder configuration, validated when the encoder is built.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Maximum dynamic table size in bytes, as negotiated via
    /// SETTINGS_HEADER_TABLE_SIZE. Default 4096.
    pub max_table_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

/// HPACK encoder with dynamic table.
///
/// `encode` is atomic with respect to table state: either the whole header
/// set is applied in order, or the instance is poisoned and must be replaced.
/// There is no rollback and no retry; re-encoding after a fault would replay
/// table mutations against a table the peer never saw.
pub struct Encoder {
    table: DynamicTable,
    /// Table size the peer last heard about. When `table.max_size()` moves
    /// away from this, the next `encode` call opens with a size update.
    advertised_size: usize,
    poisoned: bool,
}

impl Encoder {
    /// Build an encoder from a validated configuration.
    pub fn new(config: EncoderConfig) -> Result<Self, HpackError> {
        if config.max_table_size as u64 > MAX_SETTINGS_TABLE_SIZE {
            return Err(HpackError::InvalidTableSize(config.max_table_size));
        }
        Ok(Self {
            table: DynamicTable::new(config.max_table_size),
            // The configured size came from SETTINGS, so the peer already
            // knows it; no in-band update is owed for it.
            advertised_size: config.max_table_size,
            poisoned: false,
        })
    }

    /// Encode an ordered header set, appending the header block to `dst`.
    ///
    /// Pair order matters: it shapes both the output bytes and the dynamic
    /// table state every later call builds on.
    pub fn encode(&mut self, fields: &[HeaderField], dst: &mut Vec<u8>) -> Result<(), HpackError> {
        if self.poisoned {
            return Err(HpackError::Poisoned);
        }
        if self.table.max_size() != self.advertised_size {
            Representation::SizeUpdate(self.table.max_size() as u64).encode(dst);
            self.advertised_size = self.table.max_size();
        }
        for field in fields {
            if let Err(err) = self.encode_field(field, dst) {
                self.poisoned = true;
                return Err(err);
            }
        }
        Ok(())
    }

    fn encode_field(&mut self, field: &HeaderField, dst: &mut Vec<u8>) -> Result<(), HpackError> {
        let found = table::lookup(&self.table, &field.name, &field.value);
        if let Lookup::Full(index) = found {
            Representation::Indexed(index).encode(dst);
            return Ok(());
        }
        let name = match found {
            Lookup::Name(index) => Name::Index(index),
            _ => Name::Literal(&field.name),
        };
        let value = field.value.as_slice();
        match field.index {
            IndexMode::Auto => {
                Representation::IncrementalIndexing { name, value }.encode(dst);
                self.table.insert(field.name.clone(), field.value.clone())?;
            }
            IndexMode::NoIndex => Representation::WithoutIndexing { name, value }.encode(dst),
            IndexMode::NeverIndex => Representation::NeverIndexed { name, value }.encode(dst),
        }
        Ok(())
    }

    /// Apply a new maximum dynamic table size.
    ///
    /// Eviction happens immediately; the wire signal is deferred to the start
    /// of the next `encode` call, at most one update per call.
    pub fn set_max_table_size(&mut self, size: usize) -> Result<(), HpackError> {
        if self.poisoned {
            return Err(HpackError::Poisoned);
        }
        if size as u64 > MAX_SETTINGS_TABLE_SIZE {
            return Err(HpackError::InvalidTableSize(size));
        }
        if let Err(err) = self.table.set_max_size(size) {
            self.poisoned = true;
            return Err(err);
        }
        Ok(())
    }

    /// Sum of dynamic table entry sizes, including per-entry overhead.
    pub fn table_size(&self) -> usize {
        self.table.size()
    }

    /// Current maximum dynamic table size.
    pub fn max_table_size(&self) -> usize {
        self.table.max_size()
    }

    /// Number of entries in the dynamic table.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }
}
