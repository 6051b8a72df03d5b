use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by ligand libraries and other [`LigandStore`](super::LigandStore)s.
#[derive(Debug, Error)]
pub enum Error {
    /// The library text is not valid TOML or does not match the library layout.
    #[error("failed to parse ligand library: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize ligand library: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("cannot access ligand library '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No ligand with this name is stored.
    #[error("ligand '{0}' not found")]
    NotFound(String),

    /// A ligand with this name is already stored.
    #[error("ligand '{0}' already exists")]
    Duplicate(String),

    #[error("ligand names must not be empty")]
    EmptyName,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
