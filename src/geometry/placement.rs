use super::{Error, rotation_between};
use crate::model::atom::Atom;
use crate::model::ligand::{LigandGeometry, ORIGIN_TOLERANCE};
use log::warn;
use nalgebra::Vector3;

/// Intrinsic forward direction of every stored ligand.
pub const LIGAND_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

/// Moves a ligand from its local frame onto a coordination vector.
///
/// The ligand's forward axis ([`LIGAND_AXIS`]) is rotated onto `target` and the
/// anchor atom is translated onto `target`. For an anchor stored at position
/// `o`, each atom `p` ends up at `R·(p − o) + (target − R·o)`.
///
/// The input geometry is left untouched; the returned atoms keep their labels
/// and order.
///
/// # Errors
///
/// * [`Error::NonFiniteCoordinate`] if any stored coordinate is NaN or infinite.
/// * [`Error::MissingOriginAtom`] if no atom lies within
///   [`ORIGIN_TOLERANCE`] of the origin.
/// * [`Error::ZeroVector`] if `target` has zero length or is not finite.
pub fn place_ligand(geometry: &LigandGeometry, target: &Vector3<f64>) -> Result<Vec<Atom>, Error> {
    if let Some((index, atom)) = geometry.atoms.iter().enumerate().find(|(_, a)| !a.is_finite()) {
        return Err(Error::NonFiniteCoordinate {
            index,
            label: atom.label.clone(),
        });
    }

    let anchor = geometry.anchor().ok_or(Error::MissingOriginAtom {
        tolerance: ORIGIN_TOLERANCE,
    })?;
    if anchor.position != [0.0; 3] {
        warn!(
            "Anchor atom '{}' is only within tolerance of the origin: {:?}",
            anchor.label, anchor.position
        );
    }
    let origin = anchor.coords();

    let rotation =
        rotation_between(&Vector3::from(LIGAND_AXIS), target).ok_or(Error::ZeroVector)?;
    let shift = target - rotation * origin;

    Ok(geometry
        .atoms
        .iter()
        .map(|atom| {
            let world = rotation * (atom.coords() - origin) + shift;
            Atom::new(atom.label.clone(), world.into())
        })
        .collect())
}
