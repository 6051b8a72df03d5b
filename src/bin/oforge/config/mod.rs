use anyhow::{Context, Result};
use octa_forge::{BuildConfig, DedupStrategy, LigandLibrary};

use crate::cli::{DedupMode, GeometryOptions, LibraryOptions};

impl From<DedupMode> for DedupStrategy {
    fn from(mode: DedupMode) -> Self {
        match mode {
            DedupMode::Canonical => DedupStrategy::Canonical,
            DedupMode::Pairwise => DedupStrategy::Pairwise,
        }
    }
}

pub fn build_config(opts: &GeometryOptions) -> BuildConfig {
    BuildConfig {
        bond_length: opts.bond_length,
        dedup: opts.dedup.into(),
    }
}

/// Loads the library named by `--library`, or a copy of the built-in one.
pub fn load_library(opts: &LibraryOptions) -> Result<LigandLibrary> {
    match &opts.library {
        Some(path) => LigandLibrary::load(path)
            .with_context(|| format!("Failed to load ligand library '{}'", path.display())),
        None => Ok(LigandLibrary::builtin().clone()),
    }
}

pub fn library_source_name(opts: &LibraryOptions) -> String {
    opts.library
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "built-in".to_string())
}
