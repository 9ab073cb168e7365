//! # chroma-math
//!
//! Linear algebra primitives for colorimetry.
//!
//! This crate provides only what deriving color-space matrices needs:
//!
//! - [`Mat3`] - 3x3 matrices: adjugate inverse, products, transpose
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - Chromatic adaptation transforms (Bradford, Von Kries, CAT02)
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is a `Copy` value and every function is pure. Degenerate input
//! (a singular matrix, a zero cone response) is not guarded: it propagates as
//! NaN/Inf. [`Mat3::try_inverse`] is the checked alternative.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! let back = rgb_to_xyz.inverse() * xyz;
//! assert!(back.approx_eq(Vec3::ONE, 1e-5));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop conversions only
//! - `chroma-core` - Error type for checked inversion
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix derivation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
