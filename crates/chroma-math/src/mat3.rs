//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] carries RGB-to-XYZ matrices, chromatic adaptation matrices and
//! the composed RGB-to-RGB transforms built from them.
//!
//! # Convention
//!
//! Elements are stored in **row-major** order and multiply **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Colorimetric matrices are usually described by their *columns* (each
//! column of a primaries matrix is the XYZ of one primary), so
//! [`Mat3::from_cols`] and [`Mat3::from_col_vecs`] are the common
//! constructors. The storage order never leaks: every conversion to or from
//! a flat array states its order explicitly.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // Rec.709 to XYZ (D65), built from its XYZ columns
//! let rgb_to_xyz = Mat3::from_cols([
//!     [0.4124, 0.2126, 0.0193],
//!     [0.3576, 0.7152, 0.1192],
//!     [0.1805, 0.0722, 0.9505],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.0, 0.0);
//! assert_eq!(xyz, Vec3::new(0.4124, 0.2126, 0.0193));
//! ```

use std::ops::{Index, Mul};

use chroma_core::{Error, Result};

use crate::Vec3;

/// Determinant magnitude below which [`Mat3::try_inverse`] rejects a matrix.
pub const SINGULAR_EPSILON: f32 = 1e-10;

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Value type: every operation returns a new
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        m: [[0.0; 3]; 3],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::{Mat3, Vec3};
    ///
    /// let m = Mat3::from_cols([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// assert_eq!(m.col(0), Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.row(0), Vec3::new(1.0, 4.0, 7.0));
    /// ```
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix whose columns are the given vectors.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Creates a diagonal matrix from a vector.
    #[inline]
    pub const fn from_diagonal(d: Vec3) -> Self {
        Self::diagonal(d.x, d.y, d.z)
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the nine elements in column order (`m00, m10, m20, m01, ...`).
    ///
    /// This is the order GLSL / glm constructors expect.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 9] {
        let m = &self.m;
        [
            m[0][0], m[1][0], m[2][0],
            m[0][1], m[1][1], m[2][1],
            m[0][2], m[1][2], m[2][2],
        ]
    }

    /// Returns the nine elements in row order (`m00, m01, m02, m10, ...`).
    #[inline]
    pub fn to_rows_array(&self) -> [f32; 9] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        ]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Cofactor matrix: `c[i][j]` is the signed minor of element `(i, j)`.
    fn cofactors(&self) -> [[f32; 3]; 3] {
        let m = &self.m;
        [
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
            ],
            [
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            ],
            [
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ]
    }

    /// Computes the determinant (cofactor expansion along the first row).
    #[inline]
    pub fn determinant(&self) -> f32 {
        let c = self.cofactors();
        self.row(0).dot(Vec3::from_array(c[0]))
    }

    /// Computes the inverse via the adjugate: the transposed cofactor matrix
    /// divided by the determinant.
    ///
    /// There is no singularity check. A zero determinant divides through as
    /// infinities and NaNs; use [`Mat3::try_inverse`] to reject such input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::Mat3;
    ///
    /// let inv = Mat3::diagonal(2.0, 4.0, 8.0).inverse();
    /// assert_eq!(inv, Mat3::diagonal(0.5, 0.25, 0.125));
    ///
    /// assert!(!Mat3::ZERO.inverse().is_finite());
    /// ```
    pub fn inverse(&self) -> Self {
        let c = self.cofactors();
        let det = self.row(0).dot(Vec3::from_array(c[0]));
        let inv_det = 1.0 / det;

        // Adjugate = transpose of cofactors
        Self::from_cols(c) * inv_det
    }

    /// Checked inverse.
    ///
    /// Returns [`Error::SingularMatrix`] when `|det| < SINGULAR_EPSILON`.
    pub fn try_inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
            return Err(Error::SingularMatrix { determinant });
        }
        Ok(self.inverse())
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Multiplies two matrices (`self * other`).
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Largest absolute element-wise difference to `other`.
    #[inline]
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }

    /// Returns true if every element is within `eps` of `other`'s.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.is_finite() && other.is_finite() && self.max_abs_diff(other) <= eps
    }

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array(&self.to_cols_array())
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows(self.m.map(|row| row.map(|v| v * rhs)))
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.m[i]
    }
}

impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> glam::Mat3 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Mat3 {
        Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ])
    }

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_cols_vs_rows() {
        let m = Mat3::from_col_vecs(Vec3::X * 2.0, Vec3::Y * 3.0, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m * Vec3::Z, Vec3::ONE);
        assert_eq!(m.row(0), Vec3::new(2.0, 0.0, 1.0));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_mat3_flat_orders() {
        let m = sample();
        assert_eq!(m.to_rows_array(), [1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        assert_eq!(m.to_cols_array(), [1.0, 0.0, 5.0, 2.0, 1.0, 6.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_mat3_determinant() {
        assert_abs_diff_eq!(sample().determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = sample();
        let inv = m.inverse();

        // Known adjugate of the sample matrix (det = 1)
        let expected = Mat3::from_rows([
            [-24.0, 18.0, 5.0],
            [20.0, -15.0, -4.0],
            [-5.0, 4.0, 1.0],
        ]);
        assert!(inv.approx_eq(&expected, 1e-4));
        assert!((inv * m).approx_eq(&Mat3::IDENTITY, 1e-5));
        assert!((m * inv).approx_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_mat3_singular_is_not_finite() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(!m.inverse().is_finite());
        assert!(matches!(m.try_inverse(), Err(Error::SingularMatrix { .. })));
    }

    #[test]
    fn test_mat3_try_inverse_ok() {
        let inv = sample().try_inverse().unwrap();
        assert_eq!(inv, sample().inverse());
    }

    #[test]
    fn test_mat3_mul_mat() {
        let a = Mat3::diagonal(2.0, 2.0, 2.0);
        let b = Mat3::diagonal(3.0, 1.0, 0.5);
        assert_eq!(a * b, Mat3::diagonal(6.0, 2.0, 1.0));

        // Non-commutative
        let m = sample();
        assert_ne!(m * m.transpose(), m.transpose() * m);
    }

    #[test]
    fn test_mat3_glam_roundtrip() {
        let m = sample();
        let g = m.to_glam();
        assert_eq!(g.col(0).to_array(), m.col(0).to_array());
        assert_eq!(Mat3::from(g), m);

        let v = Vec3::new(0.2, 0.4, 0.6);
        assert!(Vec3::from(g * v.to_glam()).approx_eq(m * v, 1e-6));
    }
}
