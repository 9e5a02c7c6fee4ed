//! The v1-only format heuristic that classifies an entry payload as a
//! palette, an image, or an opaque blob.

use crate::image::{ImageHeader, PaletteV1};

/// The v1 format-detector's verdict for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Pal,
    Img,
    Bin,
}

/// Classifies `payload` as `Pal`, `Img`, or `Bin`.
///
/// `have_palette` reflects whether a palette has already been seen earlier
/// in the same container (the `Img` candidacy check depends on it). When
/// both candidacies match, the tool logs a format-confusion warning and
/// prefers `Img`.
pub fn guess_format(payload: &[u8], have_palette: bool) -> DetectedFormat {
    let is_pal_candidate = payload.len() == PaletteV1::SIZE
        && PaletteV1::from_bytes(payload)
            .map(|p| p.vga_channels_in_range())
            .unwrap_or(false);

    let is_img_candidate = have_palette
        && payload.len() > 6
        && ImageHeader::from_bytes(payload)
            .map(|h| h.validate().is_ok() && h.info[0] == 0)
            .unwrap_or(false);

    if is_pal_candidate && is_img_candidate {
        tracing::warn!("format confusion: payload matches both PAL and IMG candidacy, preferring IMG");
        return DetectedFormat::Img;
    }
    if is_img_candidate {
        return DetectedFormat::Img;
    }
    if is_pal_candidate {
        return DetectedFormat::Pal;
    }
    DetectedFormat::Bin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_valid_v1_palette() {
        let mut bytes = [0u8; PaletteV1::SIZE];
        for b in bytes[4..52].iter_mut() {
            *b = 10;
        }
        assert_eq!(guess_format(&bytes, false), DetectedFormat::Pal);
    }

    #[test]
    fn classifies_s1_image_entry() {
        // S1: id=20, 8-byte payload h=1,w=4,info=[0,0x00], 4 index bytes
        let payload = [1, 0, 4, 0, 0, 0x00, 0xAA, 0xBB, 0xCC, 0xDD];
        assert_eq!(guess_format(&payload, true), DetectedFormat::Img);
    }

    #[test]
    fn requires_have_palette_for_image_candidacy() {
        let payload = [1, 0, 4, 0, 0, 0x00, 0xAA, 0xBB, 0xCC, 0xDD];
        assert_eq!(guess_format(&payload, false), DetectedFormat::Bin);
    }

    #[test]
    fn falls_back_to_bin() {
        let payload = [1, 2, 3];
        assert_eq!(guess_format(&payload, true), DetectedFormat::Bin);
    }
}
