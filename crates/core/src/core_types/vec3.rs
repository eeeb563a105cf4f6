//! 3-component single-precision vector value type.
//!
//! `Vec3` is a plain `#[repr(C)]` triple, layout-compatible with `float[3]`.
//! No invariant is enforced on construction: any float triple, including
//! non-finite components, is a legal value. Operations that need a direction
//! (normalize, angle, reflect) validate at their own boundary.
//!
//! Arithmetic operators and the method forms all delegate to [`crate::ops`].

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::error::V3Error;
use crate::ops;

/// 3D vector for positions, displacements and directions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Unit vector along +x
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    /// Unit vector along +y
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Unit vector along +z
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Vec3::new(a[0], a[1], a[2])
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// See [`ops::dot`].
    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        ops::dot(self, other)
    }

    /// See [`ops::cross`].
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        ops::cross(self, other)
    }

    /// See [`ops::length`].
    #[inline]
    pub fn length(self) -> f32 {
        ops::length(self)
    }

    /// See [`ops::normalize`].
    #[inline]
    pub fn normalize(self) -> Vec3 {
        ops::normalize(self)
    }

    /// See [`ops::try_normalize`].
    ///
    /// # Errors
    /// Returns [`V3Error`] if the length is zero or non-finite.
    #[inline]
    pub fn try_normalize(self) -> Result<Vec3, V3Error> {
        ops::try_normalize(self)
    }

    /// See [`ops::angle_quick`].
    #[inline]
    pub fn angle_quick(self, other: Vec3) -> f32 {
        ops::angle_quick(self, other)
    }

    /// See [`ops::angle`].
    #[inline]
    pub fn angle(self, other: Vec3) -> f32 {
        ops::angle(self, other)
    }

    /// See [`ops::reflect`].
    #[inline]
    pub fn reflect(self, normal: Vec3) -> Vec3 {
        ops::reflect(self, normal)
    }

    /// See [`ops::equals`].
    #[inline]
    pub fn approx_eq(self, other: Vec3, tolerance: f32) -> bool {
        ops::equals(self, other, tolerance)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Vec3::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]", self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        ops::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        ops::subtract(self, rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(mut self, rhs: f32) -> Vec3 {
        ops::scale(&mut self, rhs);
        self
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        ops::scale(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vec3::default(), Vec3::ZERO);
    }

    #[test]
    fn test_array_conversions() {
        let v: Vec3 = [1.0, -2.0, 3.5].into();
        assert_eq!(v, Vec3::new(1.0, -2.0, 3.5));
        let a: [f32; 3] = v.into();
        assert_eq!(a, [1.0, -2.0, 3.5]);
    }

    #[test]
    fn test_nalgebra_conversions() {
        let na = Vector3::new(3.0_f32, 4.0, 12.0);
        let v = Vec3::from(na);
        assert_eq!(v, Vec3::new(3.0, 4.0, 12.0));
        // Both libraries agree on the Euclidean norm
        assert!((v.length() - na.norm()).abs() < 1e-5);

        let back: Vector3<f32> = v.cross(Vec3::X).into();
        assert_eq!(back, na.cross(&Vector3::x()));
    }

    #[test]
    fn test_serde_json_round_trip() {
        let v = Vec3::new(0.6, -2.0, 0.8);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":0.6,"y":-2.0,"z":0.8}"#);
        let back: Vec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_display_six_decimals() {
        assert_eq!(
            Vec3::new(1.0, -0.5, 0.0).to_string(),
            "[1.000000, -0.500000, 0.000000]"
        );
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, f32::NEG_INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_operators() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, -6.0);
        assert_eq!(a + b, Vec3::new(5.0, 3.0, -3.0));
        assert_eq!(a - b, Vec3::new(-3.0, -7.0, 9.0));
        assert_eq!(-a, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, -4.0, 6.0));

        let mut c = a;
        c *= 0.0;
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_repr_c_layout_matches_float_triple() {
        assert_eq!(std::mem::size_of::<Vec3>(), std::mem::size_of::<[f32; 3]>());
        assert_eq!(
            std::mem::align_of::<Vec3>(),
            std::mem::align_of::<[f32; 3]>()
        );
    }
}
