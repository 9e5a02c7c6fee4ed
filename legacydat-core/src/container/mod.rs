//! Container (archive) layer: v1 flat-footer and v2 typed-footer parsing,
//! entry lookup, and checksum-checked entry reads.

pub mod header;
mod open;
mod types;

pub use open::Container;
pub use types::{Entry, EntryFlags, EntryList, TypeTag};
