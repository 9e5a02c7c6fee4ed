//! Packed on-disk header structs for the container format.
//!
//! Note: not packed reprs - we use explicit byte serialization, since the
//! original structs are `#pragma pack(1)` and must not be assumed to match
//! any particular Rust layout.

/// The 6-byte container header: `{ footer_offset: u32_le, footer_size: u16_le }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatHeader {
    pub footer_offset: u32,
    pub footer_size: u16,
}

impl DatHeader {
    pub const SIZE: usize = 6;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.footer_offset.to_le_bytes());
        out[4..6].copy_from_slice(&self.footer_size.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            footer_offset: u32::from_le_bytes(bytes[0..4].try_into().ok()?),
            footer_size: u16::from_le_bytes(bytes[4..6].try_into().ok()?),
        })
    }
}

/// The v1/v2 footer count prefix: `{ entry_count: u16_le }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatFooter {
    pub entry_count: u16,
}

impl DatFooter {
    pub const SIZE: usize = 2;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.entry_count.to_le_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            entry_count: u16::from_le_bytes(bytes[0..2].try_into().ok()?),
        })
    }
}

/// A v1 footer entry record: `{ id: u16, offset: u32, size: u16 }` (8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatFooterEntry {
    pub id: u16,
    pub offset: u32,
    pub size: u16,
}

impl DatFooterEntry {
    pub const SIZE: usize = 8;

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            id: u16::from_le_bytes(bytes[0..2].try_into().ok()?),
            offset: u32::from_le_bytes(bytes[2..6].try_into().ok()?),
            size: u16::from_le_bytes(bytes[6..8].try_into().ok()?),
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.id.to_le_bytes());
        out[2..6].copy_from_slice(&self.offset.to_le_bytes());
        out[6..8].copy_from_slice(&self.size.to_le_bytes());
        out
    }
}

/// A v2 footer entry record: `{ id: u16, offset: u32, size: u16, flags: [u8;3] }` (11 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatFooterEntryV2 {
    pub id: u16,
    pub offset: u32,
    pub size: u16,
    pub flags: [u8; 3],
}

impl DatFooterEntryV2 {
    pub const SIZE: usize = 11;

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            id: u16::from_le_bytes(bytes[0..2].try_into().ok()?),
            offset: u32::from_le_bytes(bytes[2..6].try_into().ok()?),
            size: u16::from_le_bytes(bytes[6..8].try_into().ok()?),
            flags: [bytes[8], bytes[9], bytes[10]],
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.id.to_le_bytes());
        out[2..6].copy_from_slice(&self.offset.to_le_bytes());
        out[6..8].copy_from_slice(&self.size.to_le_bytes());
        out[8..11].copy_from_slice(&self.flags);
        out
    }
}

/// The v2 master index prefix: `{ footer_count: u16 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatMasterIndex {
    pub footer_count: u16,
}

impl DatMasterIndex {
    pub const SIZE: usize = 2;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.footer_count.to_le_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            footer_count: u16::from_le_bytes(bytes[0..2].try_into().ok()?),
        })
    }
}

/// A v2 master-index record naming one per-type footer and its offset,
/// relative to the master index's own position: `{ magic: [u8;4], footer_sub_offset: u16 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatFooterHeader {
    pub magic: [u8; 4],
    pub footer_sub_offset: u16,
}

impl DatFooterHeader {
    pub const SIZE: usize = 6;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.magic);
        out[4..6].copy_from_slice(&self.footer_sub_offset.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            magic: bytes[0..4].try_into().ok()?,
            footer_sub_offset: u16::from_le_bytes(bytes[4..6].try_into().ok()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dat_header_round_trips() {
        let h = DatHeader {
            footer_offset: 0x1234_5678,
            footer_size: 0xABCD,
        };
        assert_eq!(DatHeader::from_bytes(&h.to_bytes()), Some(h));
    }

    #[test]
    fn footer_entry_v2_round_trips() {
        let e = DatFooterEntryV2 {
            id: 9,
            offset: 1000,
            size: 50,
            flags: [64, 0, 0],
        };
        assert_eq!(DatFooterEntryV2::from_bytes(&e.to_bytes()), Some(e));
    }

    #[test]
    fn from_bytes_rejects_short_input() {
        assert_eq!(DatHeader::from_bytes(&[0u8; 5]), None);
        assert_eq!(DatFooterEntryV2::from_bytes(&[0u8; 10]), None);
    }
}
