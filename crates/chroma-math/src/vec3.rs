//! 3-component vector for tristimulus values.
//!
//! [`Vec3`] holds XYZ tristimulus values, linear RGB triplets and cone
//! responses. It is a plain value: no identity beyond its three components.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::Vec3;
//!
//! let xyz = Vec3::new(0.9505, 1.0, 1.089);
//! assert_eq!(xyz[1], 1.0);
//! assert_eq!(xyz.to_array(), [0.9505, 1.0, 1.089]);
//! ```

use std::ops::{Add, Div, Index, Mul, Sub};

/// A 3D vector for XYZ or RGB triplets.
///
/// Access via `.x`, `.y`, `.z`, by index `[0]`, `[1]`, `[2]`, or through the
/// RGB accessors [`r`](Self::r), [`g`](Self::g), [`b`](Self::b).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f32,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f32,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1). RGB white in any color space.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0). Pure red in RGB.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0). Pure green in RGB.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1). Pure blue in RGB.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Red component (alias of `x`).
    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    /// Green component (alias of `y`).
    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    /// Blue component (alias of `z`).
    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if every component is within `eps` of `other`'s.
    ///
    /// Any NaN component compares unequal.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        let d = (self - other).abs();
        d.x <= eps && d.y <= eps && d.z <= eps
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Component-wise
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Component-wise
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_accessors() {
        let v = Vec3::new(0.25, 0.5, 0.75);
        assert_eq!((v.r(), v.g(), v.b()), (0.25, 0.5, 0.75));
        assert_eq!((v[0], v[1], v[2]), (0.25, 0.5, 0.75));
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_component_division() {
        let lms_dst = Vec3::new(2.0, 3.0, 4.0);
        let lms_src = Vec3::new(1.0, 2.0, 8.0);
        assert_eq!(lms_dst / lms_src, Vec3::new(2.0, 1.5, 0.5));
    }

    #[test]
    fn test_vec3_division_by_zero_is_not_finite() {
        let v = Vec3::ONE / Vec3::new(1.0, 0.0, 1.0);
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vec3_approx_eq() {
        let a = Vec3::new(0.4124, 0.2126, 0.0193);
        assert!(a.approx_eq(Vec3::new(0.41245, 0.21264, 0.01933), 1e-3));
        assert!(!a.approx_eq(Vec3::ZERO, 1e-3));
    }

    #[test]
    fn test_vec3_approx_eq_rejects_nan() {
        let nan = f32::NAN;
        assert!(!Vec3::new(nan, 0.0, 0.0).approx_eq(Vec3::ZERO, 1e-6));
        assert!(!Vec3::new(nan, nan, 5.0).approx_eq(Vec3::new(0.0, 0.0, 5.0), 1e-6));
        assert!(!Vec3::ZERO.approx_eq(Vec3::splat(nan), 1.0));
        assert!(!Vec3::splat(f32::INFINITY).approx_eq(Vec3::splat(f32::INFINITY), 1.0));
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec3::from(v.to_glam()), v);
    }

    #[test]
    #[should_panic]
    fn test_vec3_index_out_of_bounds() {
        let _ = Vec3::ZERO[3];
    }
}
