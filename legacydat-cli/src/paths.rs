use std::path::{Path, PathBuf};

/// The default output directory for a given input path and mode suffix
/// (`"extracted"` or `"repacked"`), placed next to the input file.
pub fn default_out_dir(input: &Path, suffix: &str) -> PathBuf {
    let parent = input.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    parent.join(format!("{stem}_{suffix}"))
}

/// `<base>/res<ID>.<ext>`, the v1 top-level naming convention.
pub fn v1_entry_path(base: &Path, id: u16, ext: &str) -> PathBuf {
    base.join(format!("res{id}.{ext}"))
}

/// `<base>/<type_dir>/res<ID>-<f0>-<f1>-<f2>.<ext>`, the v2 naming
/// convention.
pub fn v2_entry_path(base: &Path, type_dir: &str, id: u16, flags: [u8; 3], ext: &str) -> PathBuf {
    base.join(type_dir)
        .join(format!("res{id}-{}-{}-{}.{ext}", flags[0], flags[1], flags[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v2_path_matches_naming_convention() {
        let p = v2_entry_path(Path::new("out"), "Shapes", 9, [64, 0, 0], "bin");
        assert_eq!(p, Path::new("out/Shapes/res9-64-0-0.bin"));
    }

    #[test]
    fn default_out_dir_sits_next_to_input() {
        let p = default_out_dir(Path::new("/games/level1.dat"), "extracted");
        assert_eq!(p, Path::new("/games/level1_extracted"));
    }
}
