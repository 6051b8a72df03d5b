use super::{Error, LIGAND_AXIS, rotation_about_axis, unit_direction};
use crate::model::atom::Atom;
use crate::model::ligand::LigandGeometry;
use log::debug;
use nalgebra::{Matrix3, Vector3};
use std::f64::consts::PI;

/// Below this length the rotation axis is treated as undefined and the ligand
/// is either left alone (already on +z) or flipped about x (on −z).
const AXIS_EPSILON: f64 = 1e-6;

/// Brings a raw ligand fragment into the canonical local frame.
///
/// The atom at `anchor` is moved to the origin, then the whole fragment is
/// rotated so that the centroid of the remaining atoms lies on +z. Single-atom
/// fragments are only translated.
pub fn align_ligand(atoms: &[Atom], anchor: usize) -> Result<LigandGeometry, Error> {
    if atoms.is_empty() {
        return Err(Error::Empty);
    }
    if anchor >= atoms.len() {
        return Err(Error::AnchorOutOfRange {
            index: anchor,
            count: atoms.len(),
        });
    }
    if let Some((index, atom)) = atoms.iter().enumerate().find(|(_, a)| !a.is_finite()) {
        return Err(Error::NonFiniteCoordinate {
            index,
            label: atom.label.clone(),
        });
    }

    let origin = atoms[anchor].coords();
    let mut local: Vec<Atom> = atoms
        .iter()
        .map(|a| Atom::new(a.label.clone(), (a.coords() - origin).into()))
        .collect();
    local[anchor].position = [0.0; 3];

    if let Some(rotation) = alignment_rotation(&local, anchor) {
        for atom in &mut local {
            atom.position = (rotation * atom.coords()).into();
        }
        local[anchor].position = [0.0; 3];
    }

    Ok(LigandGeometry::new(local))
}

fn alignment_rotation(local: &[Atom], anchor: usize) -> Option<Matrix3<f64>> {
    let others = local.len() - 1;
    if others == 0 {
        return None;
    }

    let centroid = local
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != anchor)
        .fold(Vector3::zeros(), |acc, (_, a)| acc + a.coords())
        / others as f64;
    let Some(direction) = unit_direction(&centroid) else {
        debug!("Ligand centroid coincides with the anchor; no rotation applied");
        return None;
    };

    let axis_z = Vector3::from(LIGAND_AXIS);
    let axis = direction.cross(&axis_z);
    let cos = direction.dot(&axis_z);
    if axis.norm() > AXIS_EPSILON {
        rotation_about_axis(&axis, cos.clamp(-1.0, 1.0).acos())
    } else if cos < 0.0 {
        rotation_about_axis(&Vector3::x(), PI)
    } else {
        None
    }
}
