use crate::model::site::DEFAULT_BOND_LENGTH;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Metal–ligand distance in ångström; every anchor atom is placed this far
    /// from the central atom.
    pub bond_length: f64,
    pub dedup: DedupStrategy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            bond_length: DEFAULT_BOND_LENGTH,
            dedup: DedupStrategy::Canonical,
        }
    }
}

/// How orderings are reduced to one representative per symmetry class.
///
/// Both strategies keep the same representatives; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupStrategy {
    /// Map every ordering to its lexicographically smallest image and keep the
    /// distinct images.
    #[default]
    Canonical,
    /// Compare every ordering against all kept representatives under all 48
    /// operations.
    Pairwise,
}
