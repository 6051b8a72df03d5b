mod assembly;
mod config;
mod error;
mod permute;
pub(crate) mod symmetry;

pub use assembly::assemble_complex;
pub use config::{BuildConfig, DedupStrategy};
pub use error::{Error, ErrorKind};
pub use permute::{enumerate_arrangements_with, enumerate_distinct_arrangements};
pub use symmetry::{
    OCTAHEDRAL_GROUP, OperationClass, SymmetryOperation, are_equivalent, canonical_image,
    find_operation,
};

use crate::library::LigandStore;
use crate::model::complex::ComplexStructure;
use crate::model::ligand::LigandGeometry;
use crate::model::site::Site;
use log::{debug, info};
use std::collections::BTreeMap;

/// Builds one structure per symmetry-distinct arrangement of `ligands`
/// around a central atom labelled `central`.
///
/// Each distinct ligand geometry is fetched from `store` once. The structures
/// come back in the order of [`enumerate_distinct_arrangements`]. Any failure
/// aborts the run without returning partial results.
pub fn build_complexes<L, S>(
    store: &L,
    central: &str,
    ligands: &[S],
    config: &BuildConfig,
) -> Result<Vec<ComplexStructure>, Error>
where
    L: LigandStore + ?Sized,
    S: AsRef<str>,
{
    if ligands.len() != Site::COUNT {
        return Err(Error::LigandCount(ligands.len()));
    }
    let central = central.trim();
    if central.is_empty() {
        return Err(Error::EmptyCentralLabel);
    }
    if !(config.bond_length.is_finite() && config.bond_length > 0.0) {
        return Err(Error::InvalidBondLength(config.bond_length));
    }

    let mut geometries: BTreeMap<String, LigandGeometry> = BTreeMap::new();
    for name in ligands.iter().map(AsRef::as_ref) {
        if !geometries.contains_key(name) {
            let geometry = store.fetch_ligand_geometry(name)?;
            debug!("Fetched ligand '{}' ({} atoms)", name, geometry.atom_count());
            geometries.insert(name.to_string(), geometry);
        }
    }

    let arrangements = enumerate_arrangements_with(ligands, config.dedup)?;

    let complexes = arrangements
        .iter()
        .map(|assignment| assemble_complex(central, assignment, &geometries, config))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Built {} distinct {} complexes from {} ligand types",
        complexes.len(),
        central,
        geometries.len()
    );
    Ok(complexes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;
    use crate::library::LigandLibrary;
    use crate::model::atom::Atom;

    fn single_atom_library(labels: &str) -> LigandLibrary {
        let mut lib = LigandLibrary::new();
        for c in labels.chars() {
            let name = c.to_string();
            lib.insert(name.clone(), LigandGeometry::new(vec![Atom::new(name, [0.0; 3])]))
                .unwrap();
        }
        lib
    }

    #[test]
    fn six_distinct_single_atom_ligands() {
        let lib = single_atom_library("ABCDEF");
        let complexes = build_complexes(
            &lib,
            "M",
            &["A", "B", "C", "D", "E", "F"],
            &BuildConfig::default(),
        )
        .unwrap();

        assert_eq!(complexes.len(), 15);
        for complex in &complexes {
            assert_eq!(complex.atom_count(), 7);
            assert_eq!(complex.central, Atom::new("M", [0.0; 3]));
        }
        for (i, a) in complexes.iter().enumerate() {
            for b in &complexes[i + 1..] {
                assert!(!a.assignment.is_equivalent_to(&b.assignment));
            }
        }
    }

    #[test]
    fn homoleptic_complex_gives_one_structure() {
        let lib = single_atom_library("A");
        let complexes =
            build_complexes(&lib, "M", &["A"; 6], &BuildConfig::default()).unwrap();
        assert_eq!(complexes.len(), 1);
        assert_eq!(complexes[0].atom_count(), 7);
    }

    #[test]
    fn symmetry_matrices_relate_equivalent_structures() {
        let lib = single_atom_library("ABCDEF");
        let config = BuildConfig::default();
        let complexes =
            build_complexes(&lib, "M", &["A", "B", "C", "D", "E", "F"], &config).unwrap();
        let geometries: BTreeMap<String, LigandGeometry> = lib
            .iter()
            .map(|(name, g)| (name.to_string(), g.clone()))
            .collect();

        let source = &complexes[3];
        for op in &OCTAHEDRAL_GROUP {
            let moved = source.assignment.transformed(op);
            let image = assemble_complex("M", &moved, &geometries, &config).unwrap();
            let m = op.matrix().map(f64::from);

            for ligand in &source.ligands {
                let q = m * ligand.atoms[0].coords();
                let found = image
                    .ligands
                    .iter()
                    .find(|l| l.name == ligand.name)
                    .unwrap();
                assert!((found.atoms[0].coords() - q).norm() < 1e-12, "{op}");
            }
        }
    }

    #[test]
    fn builtin_library_builds_cis_and_trans() {
        let complexes = build_complexes(
            LigandLibrary::builtin(),
            "Co",
            &["Ammonia", "Ammonia", "Ammonia", "Ammonia", "Chloride", "Chloride"],
            &BuildConfig::default(),
        )
        .unwrap();

        assert_eq!(complexes.len(), 2);
        for complex in &complexes {
            assert_eq!(complex.atom_count(), 1 + 4 * 4 + 2);
            assert!(complex.is_finite());
        }
    }

    #[test]
    fn strategies_build_the_same_structures() {
        let lib = single_atom_library("AB");
        let labels = ["A", "A", "A", "B", "B", "B"];
        let canonical = build_complexes(&lib, "M", &labels, &BuildConfig::default()).unwrap();
        let pairwise = build_complexes(
            &lib,
            "M",
            &labels,
            &BuildConfig {
                dedup: DedupStrategy::Pairwise,
                ..BuildConfig::default()
            },
        )
        .unwrap();
        assert_eq!(canonical, pairwise);
        assert_eq!(canonical.len(), 2);
    }

    #[test]
    fn invalid_requests_are_rejected() {
        let lib = single_atom_library("A");
        let config = BuildConfig::default();

        assert_eq!(
            build_complexes(&lib, "M", &["A"; 5], &config).unwrap_err(),
            Error::LigandCount(5)
        );
        assert_eq!(
            build_complexes(&lib, "  ", &["A"; 6], &config).unwrap_err(),
            Error::EmptyCentralLabel
        );
        assert_eq!(
            build_complexes(&lib, "M", &["A", "A", "A", "A", "A", "Z"], &config).unwrap_err(),
            Error::LigandNotFound("Z".into())
        );
        let bad_bond = BuildConfig {
            bond_length: 0.0,
            ..BuildConfig::default()
        };
        assert_eq!(
            build_complexes(&lib, "M", &["A"; 6], &bad_bond).unwrap_err(),
            Error::InvalidBondLength(0.0)
        );
    }

    #[test]
    fn broken_geometry_aborts_the_whole_run() {
        let mut lib = single_atom_library("A");
        lib.insert(
            "Bad",
            LigandGeometry::new(vec![Atom::new("X", [0.0, 0.0, 1.0])]),
        )
        .unwrap();

        let err = build_complexes(
            &lib,
            "M",
            &["A", "A", "A", "A", "A", "Bad"],
            &BuildConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
        assert_eq!(
            err,
            Error::invalid_geometry(
                "Bad",
                geometry::Error::MissingOriginAtom {
                    tolerance: crate::model::ligand::ORIGIN_TOLERANCE
                }
            )
        );
    }
}
