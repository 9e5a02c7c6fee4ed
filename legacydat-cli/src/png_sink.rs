//! The PNG encoder is an external sink: the `image` crate is used purely to
//! write already-decoded RGBA pixels to disk, never in the decode path.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba};

/// Writes `rgba` (width*height*4 bytes, row-major, top-to-bottom) as a PNG.
pub fn encode_rgba(path: &Path, rgba: &[u8], width: u32, height: u32) -> Result<()> {
    let buffer: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(width, height, rgba.to_vec())
        .context("RGBA buffer length does not match width*height*4")?;
    buffer
        .save(path)
        .with_context(|| format!("failed to write PNG to {}", path.display()))
}
