//! Thin wiring around [`legacydat_core::frametable`] for the extraction
//! orchestrator's `Frame`-type side-file output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use legacydat_core::frametable::{decode_records, format_frame_array};

/// Decodes `payload` as a frame table and writes its `FrameArray.txt`-style
/// listing to `path`. No-op (returns `Ok`) if `payload` is not a plausible
/// frame table, i.e. its length is not a positive multiple of the 7-byte
/// record size.
pub fn write_frame_array(path: &Path, payload: &[u8]) -> Result<()> {
    if payload.is_empty() || payload.len() % 7 != 0 {
        return Ok(());
    }
    let records = decode_records(payload).with_context(|| "decoding frame table")?;
    let text = format_frame_array(&records);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, text.as_bytes()).with_context(|| format!("writing {}", path.display()))
}
