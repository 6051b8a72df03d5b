//! Rigid-body geometry for placing ligands around a central atom.
//!
//! Atom positions stay plain `[f64; 3]` arrays in the data model; the routines
//! here convert them to `nalgebra` vectors and matrices for the actual math.
//!
//! - [`rotation_between`] – rotation taking one direction onto another.
//! - [`place_ligand`] – move a ligand from its local frame onto a coordination vector.
//! - [`align_ligand`] – bring a raw ligand fragment into the local frame.

mod align;
mod error;
mod placement;
mod rotation;

pub use align::align_ligand;
pub use error::Error;
pub use placement::{LIGAND_AXIS, place_ligand};
pub use rotation::{PARALLEL_TOLERANCE, rotation_about_axis, rotation_between};

use nalgebra::{Unit, Vector3};

/// Unit vector along `v`, or `None` for zero-length or non-finite input.
pub(crate) fn unit_direction(v: &Vector3<f64>) -> Option<Unit<Vector3<f64>>> {
    if v.iter().all(|c| c.is_finite()) {
        Unit::try_new(*v, 0.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_direction_rejects_degenerate_vectors() {
        let unit = unit_direction(&Vector3::new(0.0, 3.0, 4.0)).expect("non-zero vector");
        assert!((unit.norm() - 1.0).abs() < 1e-15);
        assert!((unit.into_inner() - Vector3::new(0.0, 0.6, 0.8)).amax() < 1e-15);

        assert!(unit_direction(&Vector3::zeros()).is_none());
        assert!(unit_direction(&Vector3::new(f64::NAN, 0.0, 1.0)).is_none());
        assert!(unit_direction(&Vector3::new(f64::INFINITY, 0.0, 0.0)).is_none());
    }
}
