//! The extraction orchestrator: walks a container list by list, routes
//! each entry's payload to the `.bin`/`.pal`/`.png`/`.mid` sink that
//! matches its recognized content type, and emits the side files
//! (`sequences.txt`, `FrameArray.txt`) that aggregate across entries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use legacydat_core::anim::disassemble_sequence;
use legacydat_core::container::{Container, TypeTag};
use legacydat_core::detect::{guess_format, DetectedFormat};
use legacydat_core::image::{decode_image, GenericPalette, PaletteV1, PaletteV2Raw, PaletteV2Shape};

use crate::frametable_cli;
use crate::midi;
use crate::paths;
use crate::png_sink;
use crate::Generation;

/// Dispatches to the v1 or v2 walker for a single container at `path`,
/// writing extracted output under `out`.
pub fn extract_one(path: &Path, out: &Path, generation: Generation) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("creating output directory {}", out.display()))?;
    match generation {
        Generation::Pop1 => extract_v1(path, out),
        Generation::Pop2 => extract_v2(path, out),
    }
}

/// v1: a single flat `BIN` list. The format detector classifies each entry
/// as it is encountered; a palette entry updates the active palette used
/// by every subsequent image entry, mirroring the original tool's
/// single-pass sequential scan.
fn extract_v1(path: &Path, out: &Path) -> Result<()> {
    let container = Container::open_v1(path).with_context(|| format!("opening v1 container {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = container.lists().first().map(|l| l.entries.len()).unwrap_or(0), "opened v1 container");

    let list = match container.lists().first() {
        Some(list) => list,
        None => return Ok(()),
    };

    let mut active_palette = GenericPalette::from_raw_triples(&[]);
    let mut have_palette = false;

    for idx in 0..list.entries.len() {
        let (payload, id, _flags) = container
            .load_entry(0, idx)
            .with_context(|| format!("reading v1 entry #{idx}"))?;

        match guess_format(&payload, have_palette) {
            DetectedFormat::Pal => {
                let bin_path = paths::v1_entry_path(out, id, "pal");
                write_file(&bin_path, &payload)?;
                if let Some(pal) = PaletteV1::from_bytes(&payload) {
                    active_palette = GenericPalette::from_v1(&pal);
                    have_palette = true;
                }
                tracing::debug!(id, "wrote v1 palette entry");
            }
            DetectedFormat::Img => {
                let bin_path = paths::v1_entry_path(out, id, "bin");
                write_file(&bin_path, &payload)?;
                match decode_image(&payload, &active_palette, false) {
                    Ok(img) => {
                        let png_path = bin_path.with_extension("png");
                        png_sink::encode_rgba(&png_path, &img.rgba, img.width as u32, img.height as u32)
                            .with_context(|| format!("writing PNG for v1 entry id={id}"))?;
                        tracing::debug!(id, "decoded v1 image entry");
                    }
                    Err(err) => {
                        tracing::warn!(id, error = %err, "skipping v1 image entry: decode failed");
                    }
                }
            }
            DetectedFormat::Bin => {
                let bin_path = paths::v1_entry_path(out, id, "bin");
                write_file(&bin_path, &payload)?;
            }
        }
    }

    Ok(())
}

/// The fixed per-type processing order the original tool's extraction
/// loop used. Order matters only insofar as it decides which palette list
/// is seen first (`SVGA_PAL`, then `TGA_PAL`, then `SHAPE_PAL` - whichever
/// is non-empty first wins, `CGA_PAL` is never used for image decoding).
const V2_TYPE_ORDER: &[TypeTag] = &[
    TypeTag::Unknown,
    TypeTag::CgaPal,
    TypeTag::SvgaPal,
    TypeTag::TgaPal,
    TypeTag::ShapePal,
    TypeTag::Custom,
    TypeTag::Font,
    TypeTag::Frame,
    TypeTag::Piece,
    TypeTag::Psl,
    TypeTag::Screen,
    TypeTag::Shape,
    TypeTag::Text,
    TypeTag::Sound,
    TypeTag::Sequence,
    TypeTag::TextAlt,
    TypeTag::Level,
];

fn extract_v2(path: &Path, out: &Path) -> Result<()> {
    let container = Container::open_v2(path).with_context(|| format!("opening v2 container {}", path.display()))?;
    tracing::info!(path = %path.display(), lists = container.lists().len(), "opened v2 container");

    let mut palette: Option<GenericPalette> = None;
    let mut sequences: Vec<(u16, Vec<u8>)> = Vec::new();

    for &type_tag in V2_TYPE_ORDER {
        let Some((list_idx, list)) = container.lists().iter().enumerate().find(|(_, l)| l.type_tag == type_tag) else {
            continue;
        };
        let type_dir = type_tag.dir_name();

        for entry_idx in 0..list.entries.len() {
            let (payload, id, flags) = container
                .load_entry(list_idx, entry_idx)
                .with_context(|| format!("reading v2 entry type={type_tag:?} idx={entry_idx}"))?;

            let bin_path = paths::v2_entry_path(out, type_dir, id, flags, "bin");

            match type_tag {
                TypeTag::SvgaPal | TypeTag::TgaPal => {
                    write_file(&bin_path, &payload)?;
                    if palette.is_none() {
                        palette = Some(GenericPalette::from_v2_raw(&PaletteV2Raw::from_bytes(&payload)));
                        tracing::debug!(?type_tag, id, "loaded active palette");
                    }
                }
                TypeTag::ShapePal => {
                    write_file(&bin_path, &payload)?;
                    if palette.is_none() {
                        if let Some(pal) = PaletteV2Shape::from_bytes(&payload) {
                            palette = Some(GenericPalette::from_v2_shape(&pal));
                            tracing::debug!(?type_tag, id, "loaded active palette");
                        }
                    }
                }
                TypeTag::Sound => {
                    if midi::is_midi(&payload) {
                        let mid_path = paths::v2_entry_path(out, type_dir, id, flags, "mid");
                        write_file(&mid_path, &payload[1..])?;
                        tracing::debug!(id, "wrote MIDI entry with prefix byte stripped");
                    } else {
                        write_file(&bin_path, &payload)?;
                    }
                }
                TypeTag::Sequence => {
                    write_file(&bin_path, &payload)?;
                    sequences.push((id, payload));
                }
                TypeTag::Frame => {
                    write_file(&bin_path, &payload)?;
                    let txt_path = paths::v2_entry_path(out, type_dir, id, flags, "FrameArray.txt");
                    if let Err(err) = frametable_cli::write_frame_array(&txt_path, &payload) {
                        tracing::warn!(id, error = %err, "frame table decode failed");
                    }
                }
                TypeTag::Shape | TypeTag::Screen => {
                    write_file(&bin_path, &payload)?;
                    if let Some(active) = &palette {
                        match decode_image(&payload, active, false) {
                            Ok(img) => {
                                let png_path = bin_path.with_extension("png");
                                png_sink::encode_rgba(&png_path, &img.rgba, img.width as u32, img.height as u32)
                                    .with_context(|| format!("writing PNG for v2 entry id={id}"))?;
                                tracing::debug!(?type_tag, id, "decoded v2 image entry");
                            }
                            Err(err) => {
                                tracing::warn!(?type_tag, id, error = %err, "skipping v2 image entry: decode failed");
                            }
                        }
                    }
                }
                _ => {
                    write_file(&bin_path, &payload)?;
                }
            }
        }
    }

    if !sequences.is_empty() {
        let text = disassemble_sequence(&sequences).with_context(|| "disassembling sequences")?;
        let txt_path = out.join(TypeTag::Sequence.dir_name()).join("sequences.txt");
        write_file(&txt_path, text.as_bytes())?;
        tracing::info!(animations = sequences.len(), "wrote sequences.txt");
    }

    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_type_order_has_no_duplicates_relevant_to_palette_precedence() {
        // SvgaPal precedes TgaPal precedes ShapePal, matching the original
        // tool's palette-load precedence (first non-empty list wins).
        let svga = V2_TYPE_ORDER.iter().position(|t| *t == TypeTag::SvgaPal).unwrap();
        let tga = V2_TYPE_ORDER.iter().position(|t| *t == TypeTag::TgaPal).unwrap();
        let shape_pal = V2_TYPE_ORDER.iter().position(|t| *t == TypeTag::ShapePal).unwrap();
        let shape = V2_TYPE_ORDER.iter().position(|t| *t == TypeTag::Shape).unwrap();
        assert!(svga < tga);
        assert!(tga < shape_pal);
        assert!(shape_pal < shape);
    }
}
