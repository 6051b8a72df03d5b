use super::config::BuildConfig;
use super::error::Error;
use crate::geometry::place_ligand;
use crate::model::assignment::SiteAssignment;
use crate::model::atom::Atom;
use crate::model::complex::{ComplexStructure, PlacedLigand};
use crate::model::ligand::LigandGeometry;
use std::collections::BTreeMap;

/// Places the six ligands of `assignment` around a central atom at the origin.
///
/// `geometries` must hold a geometry for every ligand name in the assignment.
pub fn assemble_complex(
    central: &str,
    assignment: &SiteAssignment,
    geometries: &BTreeMap<String, LigandGeometry>,
    config: &BuildConfig,
) -> Result<ComplexStructure, Error> {
    let mut ligands = Vec::with_capacity(assignment.ligands().len());

    for (site, name) in assignment.iter() {
        let geometry = geometries
            .get(name)
            .ok_or_else(|| Error::LigandNotFound(name.to_string()))?;
        let atoms = place_ligand(geometry, &site.vector(config.bond_length))
            .map_err(|e| Error::invalid_geometry(name, e))?;
        ligands.push(PlacedLigand {
            name: name.to_string(),
            site,
            atoms,
        });
    }

    Ok(ComplexStructure {
        central: Atom::new(central, [0.0; 3]),
        assignment: assignment.clone(),
        ligands,
    })
}
