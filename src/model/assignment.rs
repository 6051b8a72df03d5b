use super::site::Site;
use std::fmt;

/// Ligand names bound to the six coordination sites, indexed by [`Site`].
///
/// Assignments order lexicographically by their site sequence, which is the
/// order used for canonical forms and for numbering output files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteAssignment {
    ligands: [String; Site::COUNT],
}

impl SiteAssignment {
    pub fn new(ligands: [String; Site::COUNT]) -> Self {
        Self { ligands }
    }

    /// Builds an assignment from exactly six labels, or `None` for any other count.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        if labels.len() != Site::COUNT {
            return None;
        }
        Some(Self::new(std::array::from_fn(|i| {
            labels[i].as_ref().to_string()
        })))
    }

    #[inline]
    pub fn ligands(&self) -> &[String; Site::COUNT] {
        &self.ligands
    }

    #[inline]
    pub fn ligand_at(&self, site: Site) -> &str {
        &self.ligands[site.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Site, &str)> {
        Site::ALL
            .into_iter()
            .zip(self.ligands.iter().map(String::as_str))
    }
}

impl fmt::Display for SiteAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (site, ligand)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", site, ligand)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(labels: [&str; 6]) -> SiteAssignment {
        SiteAssignment::from_labels(&labels).unwrap()
    }

    #[test]
    fn from_labels_requires_six_entries() {
        assert!(SiteAssignment::from_labels(&["A", "B"]).is_none());
        assert!(SiteAssignment::from_labels::<&str>(&[]).is_none());
        let a = assignment(["A", "B", "C", "D", "E", "F"]);
        assert_eq!(a.ligand_at(Site::PosZ), "E");
        assert_eq!(a.ligand_at(Site::NegX), "B");
    }

    #[test]
    fn display_lists_sites_in_order() {
        let a = assignment(["Cl", "Cl", "NH3", "NH3", "H2O", "H2O"]);
        assert_eq!(
            a.to_string(),
            "+x=Cl -x=Cl +y=NH3 -y=NH3 +z=H2O -z=H2O"
        );
    }

    #[test]
    fn iter_pairs_sites_with_ligands() {
        let a = assignment(["A", "B", "C", "D", "E", "F"]);
        let pairs: Vec<_> = a.iter().collect();
        assert_eq!(pairs[0], (Site::PosX, "A"));
        assert_eq!(pairs[5], (Site::NegZ, "F"));
    }
}
