//! The plain XYZ coordinate format.
//!
//! A frame is an atom-count line, a free-text comment line, and one
//! `label x y z` record per atom. Only the first frame of a file is read.

mod reader;
mod writer;

pub use reader::read_xyz;
pub use writer::{write_complex, write_xyz};

use crate::model::atom::Atom;

/// One frame of an XYZ file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XyzFrame {
    pub comment: String,
    pub atoms: Vec<Atom>,
}
