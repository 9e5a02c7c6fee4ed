//! Image header/palette types and the decode pipeline from raw entry bytes
//! to an RGBA raster.

mod header;
mod palette;
mod pipeline;

pub use header::ImageHeader;
pub use palette::{GenericPalette, PaletteV1, PaletteV2Shape, PaletteV2Raw, Rgb, MAX_PALETTE_SIZE};
pub use pipeline::{decode_image, DecodedImage};
