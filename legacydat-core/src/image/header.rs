use crate::error::{CoreError, Result};

const MAX_DIMENSION: u16 = 2048;

/// The 6-byte image header prefixing every palette/image-shaped entry
/// payload: `{ height: u16_le, width: u16_le, info: [u8;2] }`.
///
/// Note: not packed repr - explicit byte serialization, matching every
/// other on-disk struct in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub height: u16,
    pub width: u16,
    pub info: [u8; 2],
}

impl ImageHeader {
    pub const SIZE: usize = 6;

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            height: u16::from_le_bytes(bytes[0..2].try_into().ok()?),
            width: u16::from_le_bytes(bytes[2..4].try_into().ok()?),
            info: [bytes[4], bytes[5]],
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.height.to_le_bytes());
        out[2..4].copy_from_slice(&self.width.to_le_bytes());
        out[4..6].copy_from_slice(&self.info);
        out
    }

    /// `true` when `info[0] == 1`: the 8-bpp two-layer codec applies.
    pub fn is_two_layer(&self) -> bool {
        self.info[0] == 1
    }

    /// Bits per pixel for the single-layer case: `((info[1] >> 4) & 7) + 1`.
    pub fn depth(&self) -> u8 {
        ((self.info[1] >> 4) & 7) + 1
    }

    /// The single-layer compression method code: `info[1] & 0x0F`.
    pub fn compress_method_code(&self) -> u8 {
        self.info[1] & 0x0F
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(CoreError::ImageDecode(format!(
                "image header has invalid dimensions {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let h = ImageHeader {
            height: 1,
            width: 4,
            info: [0, 0x00],
        };
        assert_eq!(ImageHeader::from_bytes(&h.to_bytes()), Some(h));
    }

    #[test]
    fn extracts_depth_and_method_from_info_byte() {
        // depth=4 ((3<<4)), method=1
        let h = ImageHeader { height: 1, width: 1, info: [0, 0x31] };
        assert_eq!(h.depth(), 4);
        assert_eq!(h.compress_method_code(), 1);
    }

    #[test]
    fn rejects_zero_or_oversized_dimensions() {
        assert!(ImageHeader { height: 0, width: 4, info: [0, 0] }.validate().is_err());
        assert!(ImageHeader { height: 1, width: 4096, info: [0, 0] }.validate().is_err());
    }
}
