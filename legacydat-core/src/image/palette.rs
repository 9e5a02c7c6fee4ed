/// Maximum number of colors a [`GenericPalette`] can hold.
pub const MAX_PALETTE_SIZE: usize = 576;

/// An RGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A v1 palette entry: 4 unknown bytes, 48 VGA bytes (16 RGB triples, each
/// channel 0-63), 16 CGA pattern bytes, 32 EGA pattern bytes. 100 bytes total.
#[derive(Debug, Clone, Copy)]
pub struct PaletteV1 {
    pub unknown: [u8; 4],
    pub vga: [u8; 48],
    pub cga: [u8; 16],
    pub ega: [u8; 32],
}

impl PaletteV1 {
    pub const SIZE: usize = 100;

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            unknown: bytes[0..4].try_into().ok()?,
            vga: bytes[4..52].try_into().ok()?,
            cga: bytes[52..68].try_into().ok()?,
            ega: bytes[68..100].try_into().ok()?,
        })
    }

    /// `true` iff every byte of the VGA range is a valid 6-bit (< 64) channel.
    pub fn vga_channels_in_range(&self) -> bool {
        self.vga.iter().all(|&b| b < 64)
    }
}

/// A v2 "shape" palette: 4 unknown, 3 unknown, 48 VGA bytes. 55 bytes total.
#[derive(Debug, Clone, Copy)]
pub struct PaletteV2Shape {
    pub unknown_a: [u8; 4],
    pub unknown_b: [u8; 3],
    pub vga: [u8; 48],
}

impl PaletteV2Shape {
    pub const SIZE: usize = 55;

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            unknown_a: bytes[0..4].try_into().ok()?,
            unknown_b: bytes[4..7].try_into().ok()?,
            vga: bytes[7..55].try_into().ok()?,
        })
    }
}

/// A v2 SVGA/TGA/MULTIPAL palette: raw RGB triples, each channel 0-63.
/// Count is `bytes.len() / 3`, bounded by [`MAX_PALETTE_SIZE`].
#[derive(Debug, Clone)]
pub struct PaletteV2Raw {
    pub triples: Vec<[u8; 3]>,
}

impl PaletteV2Raw {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let count = (bytes.len() / 3).min(MAX_PALETTE_SIZE);
        let triples = bytes[..count * 3]
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self { triples }
    }
}

/// A fully expanded color table of up to 576 RGB triples with channels
/// expanded to 8 bits (`raw << 2`). Every conversion path in this module
/// routes through here so the image pipeline only ever deals with one
/// palette representation.
#[derive(Debug, Clone)]
pub struct GenericPalette {
    pub colors: Vec<Rgb>,
}

impl GenericPalette {
    /// Builds a full-size (576-entry) generic palette from raw 6-bit
    /// triples, zero-filling past the source's length.
    pub fn from_raw_triples(triples: &[[u8; 3]]) -> Self {
        let mut colors = vec![Rgb::default(); MAX_PALETTE_SIZE];
        for (i, slot) in colors.iter_mut().enumerate() {
            if let Some(t) = triples.get(i) {
                *slot = Rgb {
                    r: t[0] << 2,
                    g: t[1] << 2,
                    b: t[2] << 2,
                };
            }
        }
        Self { colors }
    }

    pub fn from_v1(pal: &PaletteV1) -> Self {
        let triples: Vec<[u8; 3]> = pal.vga.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self::from_raw_triples(&triples)
    }

    pub fn from_v2_shape(pal: &PaletteV2Shape) -> Self {
        let triples: Vec<[u8; 3]> = pal.vga.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self::from_raw_triples(&triples)
    }

    pub fn from_v2_raw(pal: &PaletteV2Raw) -> Self {
        Self::from_raw_triples(&pal.triples)
    }

    /// Returns black (0,0,0) for indices beyond the palette's populated range.
    pub fn get(&self, index: usize) -> Rgb {
        self.colors.get(index).copied().unwrap_or_default()
    }
}
