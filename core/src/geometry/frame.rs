//! Orthonormal Frames

use super::common::*;
use super::vector3::*;
use crate::math::*;

/// A right-handed orthonormal frame where `tangent × bitangent = normal`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// The first tangent vector (local x-axis).
    pub tangent: Vector3f,

    /// The second tangent vector (local y-axis).
    pub bitangent: Vector3f,

    /// The normal (local z-axis).
    pub normal: Vector3f,
}

impl Frame {
    /// Create a new frame around the given normal. The normal does not need to
    /// be normalized but must not be the zero vector.
    ///
    /// * `normal` - The normal.
    pub fn from_normal(normal: &Vector3f) -> Self {
        let n = normal.normalize();
        let (tangent, bitangent) = build_orthonormal_basis(&n);
        Self {
            tangent,
            bitangent,
            normal: n,
        }
    }

    /// Express a vector given in this frame's local coordinates in world
    /// coordinates.
    ///
    /// * `v` - The local vector.
    #[inline]
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        v.x * self.tangent + v.y * self.bitangent + v.z * self.normal
    }

    /// Express a world space vector in this frame's local coordinates.
    ///
    /// * `v` - The world space vector.
    #[inline]
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.tangent), v.dot(&self.bitangent), v.dot(&self.normal))
    }
}

impl From<Vector3f> for Frame {
    /// Create a new frame around the given normal.
    ///
    /// * `normal` - The normal.
    fn from(normal: Vector3f) -> Self {
        Self::from_normal(&normal)
    }
}

/// Returns two unit vectors `(tangent, bitangent)` that together with the
/// normalized `normal` form a right-handed orthonormal basis.
///
/// The tangent is built by zeroing the coordinate of `normal` with the smaller
/// magnitude out of x and y, swapping the remaining two and negating one of
/// them. This keeps the construction away from the axis the normal is aligned
/// with. The bitangent is `normal × tangent`.
///
/// `normal` must not be the zero vector.
///
/// * `normal` - The normal.
pub fn build_orthonormal_basis(normal: &Vector3f) -> (Vector3f, Vector3f) {
    debug_assert!(
        normal.length_squared() > 0.0,
        "cannot build an orthonormal basis around a zero vector"
    );

    let n = normal.normalize();
    let tangent = if abs(n.x) > abs(n.y) {
        Vector3f::new(-n.z, 0.0, n.x) / (n.x * n.x + n.z * n.z).sqrt()
    } else {
        Vector3f::new(0.0, n.z, -n.y) / (n.y * n.y + n.z * n.z).sqrt()
    };
    let bitangent = n.cross(&tangent);

    (tangent, bitangent)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
