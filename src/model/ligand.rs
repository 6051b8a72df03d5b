use super::atom::Atom;

/// Per-component tolerance used to recognise the anchor atom at the local origin.
pub const ORIGIN_TOLERANCE: f64 = 1e-8;

/// A ligand in its canonical local frame.
///
/// The attachment atom (the anchor) sits at the origin and the rest of the
/// ligand extends along +z, so that rotating +z onto a coordination vector
/// points the ligand away from the central atom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LigandGeometry {
    pub atoms: Vec<Atom>,
}

impl LigandGeometry {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Index of the first atom lying within [`ORIGIN_TOLERANCE`] of the origin.
    pub fn anchor_index(&self) -> Option<usize> {
        self.atoms
            .iter()
            .position(|atom| atom.position.iter().all(|c| c.abs() <= ORIGIN_TOLERANCE))
    }

    pub fn anchor(&self) -> Option<&Atom> {
        self.anchor_index().map(|i| &self.atoms[i])
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|a| a.label.as_str())
    }
}

impl From<Vec<Atom>> for LigandGeometry {
    fn from(atoms: Vec<Atom>) -> Self {
        Self::new(atoms)
    }
}
