//! Structure file I/O.
//!
//! Complexes are written as XYZ frames; ligand fragments to be imported into a
//! library are read from the same format.

mod error;
mod xyz;

pub use error::Error;
pub use xyz::{XyzFrame, read_xyz, write_complex, write_xyz};
