use super::assignment::SiteAssignment;
use super::atom::Atom;
use super::site::Site;

/// One ligand after placement, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLigand {
    pub name: String,
    pub site: Site,
    pub atoms: Vec<Atom>,
}

/// A fully assembled octahedral complex.
///
/// The central atom sits at the origin; `ligands` holds one entry per site in
/// site order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexStructure {
    pub central: Atom,
    pub assignment: SiteAssignment,
    pub ligands: Vec<PlacedLigand>,
}

impl ComplexStructure {
    /// All atoms, central atom first, then each ligand in site order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        std::iter::once(&self.central).chain(self.ligands.iter().flat_map(|l| l.atoms.iter()))
    }

    pub fn to_atoms(&self) -> Vec<Atom> {
        self.atoms().cloned().collect()
    }

    pub fn atom_count(&self) -> usize {
        1 + self.ligands.iter().map(|l| l.atoms.len()).sum::<usize>()
    }

    pub fn is_finite(&self) -> bool {
        self.atoms().all(Atom::is_finite)
    }

    /// One-line summary such as `Octahedral complex Co: +x=Cl -x=Cl ...`.
    pub fn description(&self) -> String {
        format!("Octahedral complex {}: {}", self.central.label, self.assignment)
    }
}
