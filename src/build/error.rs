//! Error types for complex enumeration and assembly.

use crate::geometry;
use crate::library;
use thiserror::Error;

/// Coarse classification of a [`build`](super) failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is malformed: wrong ligand count, unknown ligand,
    /// empty central label, unusable bond length.
    InvalidInput,
    /// A stored ligand geometry cannot be placed.
    InvalidGeometry,
}

/// Errors that can occur while enumerating or assembling complexes.
///
/// Any error aborts the whole run; no partial set of structures is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The ligand list does not have exactly six entries.
    #[error("an octahedral complex needs exactly 6 ligands, got {0}")]
    LigandCount(usize),

    /// A requested ligand is not in the ligand store.
    #[error("ligand '{0}' not found in the ligand library")]
    LigandNotFound(String),

    #[error("central atom label must not be empty")]
    EmptyCentralLabel,

    #[error("bond length must be a positive finite number, got {0}")]
    InvalidBondLength(f64),

    /// A ligand geometry was rejected by the transform engine.
    #[error("ligand '{ligand}' has an invalid geometry: {source}")]
    InvalidGeometry {
        /// Name of the offending ligand.
        ligand: String,
        #[source]
        source: geometry::Error,
    },

    /// The ligand store failed for a reason other than a missing entry.
    #[error("ligand library error: {0}")]
    Library(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidGeometry { .. } => ErrorKind::InvalidGeometry,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Creates an [`InvalidGeometry`](Error::InvalidGeometry) error.
    pub fn invalid_geometry(ligand: impl Into<String>, source: geometry::Error) -> Self {
        Self::InvalidGeometry {
            ligand: ligand.into(),
            source,
        }
    }
}

impl From<library::Error> for Error {
    fn from(e: library::Error) -> Self {
        match e {
            library::Error::NotFound(name) => Error::LigandNotFound(name),
            other => Error::Library(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_separate_input_from_geometry_problems() {
        assert_eq!(Error::LigandCount(5).kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::EmptyCentralLabel.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            Error::invalid_geometry("Water", geometry::Error::Empty).kind(),
            ErrorKind::InvalidGeometry
        );
    }

    #[test]
    fn missing_library_entry_becomes_ligand_not_found() {
        let err: Error = library::Error::NotFound("Azide".into()).into();
        assert_eq!(err, Error::LigandNotFound("Azide".into()));
        assert!(err.to_string().contains("Azide"));
    }
}
