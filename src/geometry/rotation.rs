use super::unit_direction;
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Largest chord length `|â − b̂|` (or `|â + b̂|`) between two unit vectors that
/// still counts as parallel (or antiparallel).
pub const PARALLEL_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// Rotation matrix taking the direction of `from` onto the direction of `to`.
///
/// Both inputs are normalized first. Parallel directions give the identity.
/// Antiparallel directions give the negated identity, which is a point
/// inversion (determinant −1) rather than a proper 180° rotation; callers that
/// place ligands along −z rely on this exact matrix, so it is kept as is.
/// Every other case uses `I + K + K²/(1 + cos θ)`, where `K` is the
/// cross-product matrix of `â × b̂`.
///
/// `1 + cos θ` is evaluated as `|â + b̂|² / 2`, which keeps its relative
/// precision when the directions are close to antiparallel.
///
/// Returns `None` if either input has zero length or is not finite.
pub fn rotation_between(from: &Vector3<f64>, to: &Vector3<f64>) -> Option<Matrix3<f64>> {
    let a = unit_direction(from)?.into_inner();
    let b = unit_direction(to)?.into_inner();

    if (a - b).norm() <= PARALLEL_TOLERANCE {
        return Some(Matrix3::identity());
    }
    let sum = a + b;
    if sum.norm() <= PARALLEL_TOLERANCE {
        return Some(-Matrix3::identity());
    }

    let k = a.cross(&b).cross_matrix();
    let one_plus_cos = sum.norm_squared() / 2.0;
    Some(Matrix3::identity() + k + k * k * (1.0 / one_plus_cos))
}

/// Right-handed rotation by `angle` radians about `axis`.
///
/// Returns `None` if the axis has zero length or is not finite.
pub fn rotation_about_axis(axis: &Vector3<f64>, angle: f64) -> Option<Matrix3<f64>> {
    let axis = unit_direction(axis)?;
    Some(Rotation3::from_axis_angle(&axis, angle).into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(actual: &Vector3<f64>, expected: &Vector3<f64>, eps: f64) {
        assert!(
            (actual - expected).amax() <= eps,
            "{actual:?} vs {expected:?}"
        );
    }

    fn assert_orthogonal(r: &Matrix3<f64>) {
        assert!((r * r.transpose() - Matrix3::identity()).amax() <= 1e-12, "{r}");
    }

    fn assert_maps_direction(from: Vector3<f64>, to: Vector3<f64>) {
        let r = rotation_between(&from, &to).expect("non-zero input");
        assert_vec_close(&(r * from.normalize()), &to.normalize(), 1e-9);
        assert_orthogonal(&r);
        assert!((r.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_vectors_give_identity() {
        for v in [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(3.0, -1.0, 2.0),
            Vector3::new(1e-3, 5.0, 0.0),
        ] {
            assert_eq!(rotation_between(&v, &v), Some(Matrix3::identity()));
        }
        assert_eq!(
            rotation_between(&Vector3::new(0.0, 0.0, 5.0), &Vector3::new(0.0, 0.0, 0.1)),
            Some(Matrix3::identity())
        );
    }

    #[test]
    fn antiparallel_vectors_give_negated_identity() {
        let r = rotation_between(&Vector3::z(), &Vector3::new(0.0, 0.0, -2.0))
            .expect("non-zero input");
        assert_eq!(r, -Matrix3::identity());

        let v = Vector3::new(1.0, 2.0, 3.0);
        let r = rotation_between(&v, &-v).expect("non-zero input");
        assert_eq!(r, -Matrix3::identity());
    }

    #[test]
    fn antiparallel_branch_is_an_improper_transform() {
        // Known issue: the tie-break matrix is an inversion, not a rotation.
        let r = rotation_between(&Vector3::z(), &-Vector3::z()).expect("non-zero input");
        assert_eq!(r.determinant(), -1.0);
        assert_orthogonal(&r);
    }

    #[test]
    fn generic_rotation_maps_source_onto_target() {
        let pairs = [
            (Vector3::new(1.0, 2.0, 3.0), Vector3::new(-2.0, 0.5, 1.0)),
            (Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.3, -0.7, 0.2)),
            (Vector3::new(5.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            (Vector3::new(1.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 1.0)),
        ];
        for (from, to) in pairs {
            assert_maps_direction(from, to);
        }
    }

    #[test]
    fn nearly_parallel_directions_still_get_a_real_rotation() {
        assert_maps_direction(Vector3::z(), Vector3::new(0.003, 0.0, 1.0));
        assert_maps_direction(Vector3::z(), Vector3::new(1e-4, 0.0, 1.0));
        assert_maps_direction(Vector3::z(), Vector3::new(0.0, 1e-7, 1.0));
        assert_ne!(
            rotation_between(&Vector3::z(), &Vector3::new(0.003, 0.0, 1.0)),
            Some(Matrix3::identity())
        );
    }

    #[test]
    fn nearly_antiparallel_directions_still_get_a_real_rotation() {
        assert_maps_direction(Vector3::z(), Vector3::new(-0.003, 0.0, -1.0));
        assert_maps_direction(Vector3::z(), Vector3::new(0.0, 1e-4, -1.0));
        assert_maps_direction(Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, -2.0, -3.001));
    }

    #[test]
    fn z_onto_x_is_a_quarter_turn_about_y() {
        let r = rotation_between(&Vector3::z(), &Vector3::new(2.0, 0.0, 0.0))
            .expect("non-zero input");
        assert_eq!(
            r,
            Matrix3::new(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn zero_or_non_finite_input_has_no_rotation() {
        assert_eq!(rotation_between(&Vector3::zeros(), &Vector3::z()), None);
        assert_eq!(rotation_between(&Vector3::z(), &Vector3::zeros()), None);
        assert_eq!(
            rotation_between(&Vector3::new(f64::NAN, 0.0, 1.0), &Vector3::z()),
            None
        );
    }

    #[test]
    fn axis_angle_quarter_turn_about_z() {
        let r = rotation_about_axis(&Vector3::new(0.0, 0.0, 3.0), std::f64::consts::FRAC_PI_2)
            .expect("non-zero axis");
        assert_vec_close(&(r * Vector3::x()), &Vector3::y(), 1e-15);
        assert_vec_close(&(r * Vector3::y()), &-Vector3::x(), 1e-15);
        assert_orthogonal(&r);
        assert!(rotation_about_axis(&Vector3::zeros(), 1.0).is_none());
        assert!(rotation_about_axis(&Vector3::new(f64::NAN, 0.0, 1.0), 1.0).is_none());
    }
}
