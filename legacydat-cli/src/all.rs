//! `--all`: extracts every recognized container in the current directory.
//!
//! This supplants the original tool's hardcoded per-game file list (which
//! wired specific files to specific cross-file palettes) with a generic
//! directory scan, since the palette-passing is already handled per
//! container by the v2 extraction orchestrator.

use std::path::Path;

use anyhow::{Context, Result};

use crate::extract;
use crate::Generation;

/// Extracts every `*.dat`/`*.DAT` file found directly in the current
/// working directory into `out/<stem>/`.
pub fn extract_all(out: &Path, generation: Generation) -> Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let mut found = false;

    for entry in std::fs::read_dir(&cwd).with_context(|| format!("scanning {}", cwd.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_dat = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("dat"))
            .unwrap_or(false);
        if !is_dat {
            continue;
        }

        found = true;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
        let dest = out.join(stem);
        match extract::extract_one(&path, &dest, generation) {
            Ok(()) => tracing::info!(file = %path.display(), "extracted"),
            Err(err) => tracing::warn!(file = %path.display(), error = %err, "skipping: extraction failed"),
        }
    }

    if !found {
        tracing::warn!(dir = %cwd.display(), "no *.dat files found");
    }
    Ok(())
}
