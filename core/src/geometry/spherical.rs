//! Spherical coordinates in the local shading frame.
//!
//! All functions assume the local frame where the surface normal is the
//! z-axis.

use super::common::*;
use super::vector3::*;
use crate::math::*;

/// Returns the cosine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Returns the square of the cosine of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    w.z * w.z
}

/// Returns the absolute value of the cosine of the angle θ measured from the
/// given direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    abs(w.z)
}

/// Returns the square of the sine of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    max(0.0, 1.0 - cos_2_theta(w))
}

/// Returns the sine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_theta(w: &Vector3f) -> Float {
    sin_2_theta(w).sqrt()
}

/// Returns the tangent of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn tan_theta(w: &Vector3f) -> Float {
    sin_theta(w) / cos_theta(w)
}

/// Returns the square of the tangent of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

/// Returns the cosine of the angle Φ measured from the given direction to the
/// x-axis after projection to the xy plane.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        1.0
    } else {
        clamp(w.x / s, -1.0, 1.0)
    }
}

/// Returns the square of the cosine of the angle Φ.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_2_phi(w: &Vector3f) -> Float {
    let c = cos_phi(w);
    c * c
}

/// Returns the sine of the angle Φ measured from the given direction to the
/// x-axis after projection to the xy plane.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        0.0
    } else {
        clamp(w.y / s, -1.0, 1.0)
    }
}

/// Returns the square of the sine of the angle Φ.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_2_phi(w: &Vector3f) -> Float {
    let c = sin_phi(w);
    c * c
}

/// Returns a direction (x, y, z) for spherical coordinates (θ, Ø).
///
/// * `sin_theta` - sin(θ).
/// * `cos_theta` - cos(θ).
/// * `phi`       - Ø.
#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * cos(phi), sin_theta * sin(phi), cos_theta)
}

/// Returns `true` if two vectors are in the same hemisphere.
///
/// * `w`  - First vector.
/// * `wp` - Second vector.
#[inline]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    w.z * wp.z > 0.0
}

/// Computes the reflection of a vector around a normal.
///
/// * `wo` - Vector to reflect.
/// * `n`  - Normal.
#[inline]
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    -(*wo) + 2.0 * wo.dot(n) * n
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn spherical_direction_matches_trig() {
        let theta: Float = 0.7;
        let phi: Float = 2.1;
        let w = spherical_direction(theta.sin(), theta.cos(), phi);
        assert!(approx_eq!(f64, cos_theta(&w), theta.cos(), ulps = 2));
        assert!(approx_eq!(f64, sin_theta(&w), theta.sin(), epsilon = 1e-12));
        assert!(approx_eq!(f64, cos_phi(&w), phi.cos(), epsilon = 1e-12));
        assert!(approx_eq!(f64, sin_phi(&w), phi.sin(), epsilon = 1e-12));
        assert!(approx_eq!(f64, tan_2_theta(&w), theta.tan() * theta.tan(), epsilon = 1e-12));
    }

    #[test]
    fn phi_at_pole_is_defined() {
        assert_eq!(cos_phi(&Vector3f::Z_AXIS), 1.0);
        assert_eq!(sin_phi(&Vector3f::Z_AXIS), 0.0);
        assert!(tan_2_theta(&Vector3f::X_AXIS).is_infinite());
    }

    #[test]
    fn reflect_about_normal() {
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let wi = reflect(&wo, &Vector3f::Z_AXIS);
        assert!(approx_eq!(f64, wi.x, -0.6, epsilon = 1e-15));
        assert!(approx_eq!(f64, wi.z, 0.8, epsilon = 1e-15));
        assert!(same_hemisphere(&wo, &wi));
        assert!(!same_hemisphere(&wo, &-wi));
    }
}
