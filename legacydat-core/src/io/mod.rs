//! Little-endian unaligned reads/writes over byte slices and a minimal
//! cursor-style reader, matching the on-disk layout of every packed
//! container/image/animation struct.
//!
//! Note: not native struct layout - every header is read field-by-field
//! with explicit little-endian accessors, since the on-disk structs were
//! originally `#pragma pack(1)` and must not be assumed to match any
//! particular Rust type's layout.

mod reader;
mod writer;

pub use reader::ByteReader;
pub use writer::ByteWriter;
