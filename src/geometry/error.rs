use thiserror::Error;

/// Errors raised while transforming ligand geometries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No atom of the ligand sits at the local origin.
    #[error("no atom lies at the local origin (tolerance {tolerance:e} per component)")]
    MissingOriginAtom { tolerance: f64 },

    /// An input coordinate is NaN or infinite.
    #[error("atom {index} ('{label}') has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize, label: String },

    /// A direction was requested from a zero-length or non-finite vector.
    #[error("cannot derive a direction from a zero-length or non-finite vector")]
    ZeroVector,

    #[error("anchor index {index} is out of range for a ligand with {count} atoms")]
    AnchorOutOfRange { index: usize, count: usize },

    #[error("ligand contains no atoms")]
    Empty,
}
