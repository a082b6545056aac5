//! Sans-IO HPACK (RFC 7541) header compression encoder.
//!
//! This crate implements the compression side of HPACK: the shared
//! static/dynamic index tables, the representation decision per header pair,
//! prefix integer coding, and Huffman string coding. It produces opaque
//! header blocks for a framing layer to carry; no I/O, no framing, no HTTP
//! semantics.
//!
//! Compression state is directional and persists across messages, so a
//! connection holds one [`Encoder`] per side (request and response), each
//! driven only by the task owning that connection. Independent encoders share
//! nothing and run in parallel freely.
//!
//! # Example
//!
//! ```
//! use protocol_hpack::{Encoder, EncoderConfig, HeaderField};
//!
//! let mut encoder = Encoder::new(EncoderConfig::default())?;
//!
//! let mut block = Vec::new();
//! encoder.encode(
//!     &[
//!         HeaderField::new(b":method", b"GET"),
//!         HeaderField::new(b":scheme", b"https"),
//!         HeaderField::new(b":path", b"/"),
//!         HeaderField::new(b":authority", b"example.com"),
//!         // Keep credentials out of the shared compression context.
//!         HeaderField::never_indexed(b"authorization", b"Bearer t0ps3cret"),
//!     ],
//!     &mut block,
//! )?;
//!
//! // `block` is ready to be framed; a second call on the same encoder
//! // reuses the dynamic table built by this one.
//! # Ok::<(), protocol_hpack::HpackError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod field;
mod huffman;
mod integer;
mod repr;
mod table;

pub use encoder::{Encoder, EncoderConfig, DEFAULT_TABLE_SIZE};
pub use error::HpackError;
pub use field::{HeaderField, IndexMode};
