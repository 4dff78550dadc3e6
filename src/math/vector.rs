use tracing::debug;

use crate::error::{GeometryError, Result};

use super::{Tolerances, UnitVector3, Vector3, TOLERANCE};

/// Relative orientation of two vectors, judged by the sign of their dot product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceDirection {
    /// The vectors point into the same half-space.
    Same,
    /// The vectors point into opposite half-spaces.
    Oppose,
    /// The vectors are perpendicular within tolerance.
    Perpendicular,
}

/// An angle expressed in both radians and degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    /// Angle in radians, in `[0, pi]`.
    pub radians: f64,
    /// Angle in degrees, in `[0, 180]`.
    pub degrees: f64,
}

/// Projects `b` onto the direction of `a`.
///
/// Returns `(â · b) * â` where `â` is `a` normalized. A zero-length `a`
/// produces NaN components; use [`try_projection`] to get an error instead.
#[must_use]
pub fn projection(a: &Vector3, b: &Vector3) -> Vector3 {
    let a_hat = a / a.norm();
    a_hat * a_hat.dot(b)
}

/// Projects `b` onto the direction of `a`, rejecting a zero-length `a`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `a` is shorter than [`TOLERANCE`].
pub fn try_projection(a: &Vector3, b: &Vector3) -> Result<Vector3> {
    if a.norm() < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(projection(a, b))
}

/// Mirrors `incoming` about the plane whose normal is `normal`.
///
/// Computes `incoming - 2 * proj_normal(incoming)`.
#[must_use]
pub fn reflection(incoming: &Vector3, normal: &UnitVector3) -> Vector3 {
    incoming - projection(&normal.into_inner(), incoming) * 2.0
}

/// Unit normal of the surface spanned by `a` and `b`, oriented by the
/// right-hand rule (`a x b`).
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the vectors are parallel or
/// either one is zero-length.
pub fn surface_normal(a: &Vector3, b: &Vector3) -> Result<UnitVector3> {
    unit_cross(a, b).ok_or_else(|| GeometryError::ZeroVector.into())
}

/// Normalized `a x b`, or `None` when the cross product is negligible next
/// to `|a| * |b|` (parallel or zero-length inputs).
pub(crate) fn unit_cross(a: &Vector3, b: &Vector3) -> Option<UnitVector3> {
    let cross = a.cross(b);
    let len = cross.norm();
    if len.is_nan() || len <= TOLERANCE * a.norm() * b.norm() {
        return None;
    }
    Some(UnitVector3::new_unchecked(cross / len))
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// NaN if either vector is zero-length.
#[must_use]
pub fn cosine(a: &Vector3, b: &Vector3) -> f64 {
    (a.dot(b) / (a.norm() * b.norm())).clamp(-1.0, 1.0)
}

/// Sine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// Always non-negative since it is built from the cross product length.
/// NaN if either vector is zero-length.
#[must_use]
pub fn sine(a: &Vector3, b: &Vector3) -> f64 {
    (a.cross(b).norm() / (a.norm() * b.norm())).clamp(-1.0, 1.0)
}

/// Angle between `a` and `b` in radians and degrees.
#[must_use]
pub fn angle_between(a: &Vector3, b: &Vector3) -> Angle {
    let radians = cosine(a, b).acos();
    let mut degrees = radians.to_degrees();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    Angle { radians, degrees }
}

/// Classifies `a` and `b` by the sign of their dot product, using the
/// default [`Tolerances`].
#[must_use]
pub fn face_direction(a: &Vector3, b: &Vector3) -> FaceDirection {
    face_direction_with(a, b, &Tolerances::default())
}

/// Classifies `a` and `b` by the sign of their dot product.
///
/// The dot product is compared against `tolerances.perpendicular * |a| * |b|`,
/// so the tolerance bounds the cosine of the angle and does not depend on
/// the vectors' lengths. Within it the result is
/// [`FaceDirection::Perpendicular`].
#[must_use]
pub fn face_direction_with(a: &Vector3, b: &Vector3, tolerances: &Tolerances) -> FaceDirection {
    let dot = a.dot(b);
    let limit = tolerances.perpendicular * a.norm() * b.norm();
    if dot.abs() <= limit {
        if dot.abs() > 0.0 {
            debug!(dot, limit, "dot product snapped to perpendicular");
        }
        FaceDirection::Perpendicular
    } else if dot < 0.0 {
        FaceDirection::Oppose
    } else {
        FaceDirection::Same
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn projection_onto_axis() {
        let p = projection(&Vector3::new(2.0, 0.0, 0.0), &Vector3::new(3.0, 4.0, 5.0));
        assert_relative_eq!(p, Vector3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn projection_remainder_is_perpendicular() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(0.3, 1.0, 2.0);
        let p = projection(&b, &a);
        assert_abs_diff_eq!(p.cross(&b).norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((a - p).dot(&b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn projection_of_zero_vector_is_nan() {
        let p = projection(&Vector3::zeros(), &Vector3::x());
        assert!(p.x.is_nan());
    }

    #[test]
    fn try_projection_rejects_zero() {
        assert!(try_projection(&Vector3::zeros(), &Vector3::x()).is_err());
        let p = try_projection(&Vector3::y(), &Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert_relative_eq!(p, Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn reflection_off_floor() {
        let n = UnitVector3::new_normalize(Vector3::new(0.0, 3.0, 0.0));
        let r = reflection(&Vector3::new(1.0, -1.0, 0.0), &n);
        assert_relative_eq!(r, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn reflection_twice_is_identity() {
        let n = UnitVector3::new_normalize(Vector3::new(1.0, 2.0, -0.5));
        let v = Vector3::new(-3.0, 0.7, 4.0);
        let back = reflection(&reflection(&v, &n), &n);
        assert_relative_eq!(back, v, epsilon = 1e-12);
    }

    #[test]
    fn surface_normal_right_hand_rule() {
        let n = surface_normal(&Vector3::x(), &Vector3::y()).unwrap();
        assert_relative_eq!(n.into_inner(), Vector3::z());
        let n = surface_normal(&Vector3::y(), &Vector3::x()).unwrap();
        assert_relative_eq!(n.into_inner(), -Vector3::z());
    }

    #[test]
    fn surface_normal_parallel_fails() {
        let r = surface_normal(&Vector3::x(), &Vector3::new(2.0, 0.0, 0.0));
        assert!(r.is_err());
    }

    #[test]
    fn surface_normal_of_tiny_vectors() {
        let n = surface_normal(&Vector3::new(1e-6, 0.0, 0.0), &Vector3::new(0.0, 1e-6, 0.0))
            .unwrap();
        assert_relative_eq!(n.into_inner(), Vector3::z());

        let n = surface_normal(&Vector3::new(1e6, 0.0, 0.0), &Vector3::new(1e6, 1e-3, 0.0))
            .unwrap();
        assert_relative_eq!(n.into_inner(), Vector3::z());
    }

    #[test]
    fn surface_normal_zero_vector_fails() {
        assert!(surface_normal(&Vector3::zeros(), &Vector3::y()).is_err());
        let parallel = surface_normal(&Vector3::new(1e-8, 0.0, 0.0), &Vector3::new(3e-8, 0.0, 0.0));
        assert!(parallel.is_err());
    }

    #[test]
    fn cosine_and_sine_at_45_degrees() {
        let a = Vector3::x();
        let b = Vector3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(cosine(&a, &b), FRAC_PI_4.cos(), epsilon = 1e-12);
        assert_relative_eq!(sine(&a, &b), FRAC_PI_4.sin(), epsilon = 1e-12);
    }

    #[test]
    fn cosine_is_clamped() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let c = cosine(&a, &a);
        assert!(c <= 1.0);
        assert_relative_eq!(c, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_same_vector() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let angle = angle_between(&a, &a);
        assert_abs_diff_eq!(angle.radians, 0.0);
        assert_abs_diff_eq!(angle.degrees, 0.0);
    }

    #[test]
    fn angle_between_opposite_vectors() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let angle = angle_between(&a, &-a);
        assert_relative_eq!(angle.radians, PI, epsilon = 1e-6);
        assert_relative_eq!(angle.degrees, 180.0, epsilon = 1e-5);
        assert!(angle.degrees <= 180.0);
    }

    #[test]
    fn angle_between_right_angle() {
        let angle = angle_between(&Vector3::x(), &Vector3::z());
        assert_relative_eq!(angle.radians, FRAC_PI_2);
        assert_relative_eq!(angle.degrees, 90.0);
    }

    #[test]
    fn face_direction_cases() {
        let x = Vector3::x();
        assert_eq!(face_direction(&x, &Vector3::y()), FaceDirection::Perpendicular);
        assert_eq!(face_direction(&x, &-x), FaceDirection::Oppose);
        assert_eq!(face_direction(&x, &Vector3::new(1.0, 1.0, 0.0)), FaceDirection::Same);
    }

    #[test]
    fn face_direction_independent_of_length() {
        let tiny = Vector3::new(1e-6, 0.0, 0.0);
        assert_eq!(face_direction(&tiny, &tiny), FaceDirection::Same);
        assert_eq!(face_direction(&tiny, &-tiny), FaceDirection::Oppose);
        assert_eq!(
            face_direction(&tiny, &Vector3::new(0.0, 1e-6, 0.0)),
            FaceDirection::Perpendicular
        );

        let huge = Vector3::new(1e8, 0.0, 0.0);
        let nearly_perpendicular = Vector3::new(1e-4, 1e8, 0.0);
        assert_eq!(face_direction(&huge, &nearly_perpendicular), FaceDirection::Perpendicular);
        assert_eq!(face_direction(&huge, &huge), FaceDirection::Same);
    }

    #[test]
    fn face_direction_absorbs_rounding() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(1e-14, 1.0, 0.0);
        assert_eq!(face_direction(&a, &b), FaceDirection::Perpendicular);

        let strict = Tolerances {
            perpendicular: 0.0,
            ..Tolerances::default()
        };
        assert_eq!(face_direction_with(&a, &b, &strict), FaceDirection::Same);
    }
}
