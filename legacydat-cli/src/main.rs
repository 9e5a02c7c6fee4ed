//! legacydat - offline asset tool for the proprietary `.DAT` container
//! archives of a two-generation retro platformer.
//!
//! # Usage
//!
//! ```bash
//! # Extract one container (generation is required so the right footer
//! # layout and codec set are used)
//! legacydat --extract KID.DAT --pop2
//!
//! # Extract every *.dat file in the current directory for one generation
//! legacydat --all --pop2
//!
//! # Repack an edited sequences.txt back into a sequence.dat
//! legacydat --repack sequence/sequences.txt --pop2 --out .
//! ```

mod all;
mod extract;
mod frametable_cli;
mod midi;
mod paths;
mod png_sink;
mod repack;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Offline asset tool for the proprietary `.DAT` container format.
#[derive(Parser)]
#[command(name = "legacydat")]
#[command(about = "Extract and repack legacy retro-platformer .DAT archives")]
#[command(version)]
#[command(group(
    clap::ArgGroup::new("mode")
        .args(["all", "extract", "repack"])
        .required(true)
))]
#[command(group(
    clap::ArgGroup::new("generation")
        .args(["pop1", "pop2"])
        .required(true)
))]
struct Cli {
    /// Extract every recognized *.dat file in the current directory.
    #[arg(long)]
    all: bool,

    /// Extract a single container at PATH.
    #[arg(long, value_name = "PATH")]
    extract: Option<PathBuf>,

    /// Repack an edited sequences.txt at PATH into a sequence.dat.
    #[arg(long, value_name = "PATH")]
    repack: Option<PathBuf>,

    /// The container is first-generation (flat v1 footer).
    #[arg(long)]
    pop1: bool,

    /// The container is second-generation (typed v2 footer).
    #[arg(long)]
    pop2: bool,

    /// Output directory. Defaults to `<stem>_extracted`/`<stem>_repacked`
    /// next to the input when omitted.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Generation {
    Pop1,
    Pop2,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let generation = if cli.pop1 { Generation::Pop1 } else { Generation::Pop2 };

    if let Some(path) = cli.extract {
        let out = cli.out.unwrap_or_else(|| paths::default_out_dir(&path, "extracted"));
        extract::extract_one(&path, &out, generation)?;
        tracing::info!("extracted {} -> {}", path.display(), out.display());
    } else if let Some(path) = cli.repack {
        let out = cli.out.unwrap_or_else(|| paths::default_out_dir(&path, "repacked"));
        let written = repack::repack_one(&path, &out)?;
        tracing::info!("repacked {} -> {}", path.display(), written.display());
    } else if cli.all {
        let out = cli.out.unwrap_or_else(|| PathBuf::from("extracted"));
        all::extract_all(&out, generation)?;
    }

    Ok(())
}
