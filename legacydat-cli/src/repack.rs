//! Repacks an edited `sequences.txt` script back into a `sequence.dat`
//! v2 container, the inverse of the extract orchestrator's `Sequence` path.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use legacydat_core::anim::{assemble, rewrite_sequence_container};

/// Assembles the script at `path` and writes `sequence.dat` under `out`,
/// returning the path written.
///
/// `path` may point directly at a `sequences.txt` file, or at a directory
/// produced by extraction (in which case `Sequences/sequences.txt` beneath
/// it is used).
pub fn repack_one(path: &Path, out: &Path) -> Result<PathBuf> {
    let script_path = resolve_script_path(path)?;
    let text = fs::read_to_string(&script_path)
        .with_context(|| format!("reading script {}", script_path.display()))?;

    let animations = assemble(&text).with_context(|| "assembling animation script")?;
    tracing::info!(animations = animations.len(), "assembled script");

    let bytes = rewrite_sequence_container(&animations);

    fs::create_dir_all(out).with_context(|| format!("creating output directory {}", out.display()))?;
    let written = out.join("sequence.dat");
    fs::write(&written, &bytes).with_context(|| format!("writing {}", written.display()))?;
    Ok(written)
}

fn resolve_script_path(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        let candidate = path.join("Sequences").join("sequences.txt");
        if candidate.is_file() {
            return Ok(candidate);
        }
        anyhow::bail!("no Sequences/sequences.txt found under {}", path.display());
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repacks_single_animation_script() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("sequences.txt");
        fs::write(&script_path, "[POP2_009_Hang]\r\nShowFrame 9").unwrap();

        let out = dir.path().join("out");
        let written = repack_one(&script_path, &out).unwrap();
        assert_eq!(written, out.join("sequence.dat"));
        let bytes = fs::read(&written).unwrap();
        assert_eq!(bytes.len(), 30);
    }

    #[test]
    fn resolves_extracted_directory_layout() {
        let dir = tempfile::tempdir().unwrap();
        let seq_dir = dir.path().join("Sequences");
        fs::create_dir_all(&seq_dir).unwrap();
        fs::write(seq_dir.join("sequences.txt"), "[POP2_009_Hang]\r\nShowFrame 9").unwrap();

        let out = dir.path().join("out");
        let written = repack_one(dir.path(), &out).unwrap();
        assert!(written.exists());
    }
}
