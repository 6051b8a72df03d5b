use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse XYZ data: {details} (at line {line})")]
    Parse { line: usize, details: String },

    /// A structure with no atoms was given to a writer, or read from a file.
    #[error("structure contains no atoms")]
    EmptyStructure,

    #[error("atom {index} ('{label}') has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize, label: String },
}

impl Error {
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }
}
