//! Error types for chroma-rs operations.
//!
//! The colorimetry math itself has no error path: degenerate chromaticities
//! propagate as NaN/Inf through the matrices. The [`Error`] enum covers the
//! places where input is *parsed* or *checked* before it reaches the math:
//!
//! - Color space names that do not match any known space
//! - Chromaticity lists with the wrong number of values
//! - Numbers that fail to parse
//! - Matrices rejected by a checked inversion
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{ColorSpaceId, Error, Result};
//!
//! fn lookup(name: &str) -> Result<ColorSpaceId> {
//!     name.parse()
//! }
//!
//! assert!(matches!(lookup("nope"), Err(Error::UnknownColorSpace(_))));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::ColorSpaceId`] - Name parsing
//! - `chroma-primaries` - Chromaticity list parsing
//! - `chroma-cli` - Wrapped into `anyhow` errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or validating colorimetric input.
#[derive(Debug, Error)]
pub enum Error {
    /// Color space name does not match any known space or alias.
    #[error("unknown color space '{0}'")]
    UnknownColorSpace(String),

    /// A chromaticity list did not contain exactly eight values.
    ///
    /// Chromaticities are always `rx, ry, gx, gy, bx, by, wx, wy`.
    #[error("expected {expected} chromaticity values, got {got}")]
    InvalidChromaticities {
        /// Number of values required
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// A component failed to parse as a floating point number.
    #[error("invalid number '{input}'")]
    ParseFloat {
        /// Offending input text
        input: String,
        /// Underlying parse error
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Matrix is singular (or close to it) and cannot be inverted.
    ///
    /// Only returned by checked operations. The unchecked inverse lets the
    /// division by zero through as non-finite values instead.
    #[error("singular matrix (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that triggered the rejection
        determinant: f32,
    },
}

impl Error {
    /// Creates an [`Error::UnknownColorSpace`] error.
    #[inline]
    pub fn unknown_color_space(name: impl Into<String>) -> Self {
        Self::UnknownColorSpace(name.into())
    }

    /// Creates an [`Error::InvalidChromaticities`] error.
    #[inline]
    pub fn invalid_chromaticities(expected: usize, got: usize) -> Self {
        Self::InvalidChromaticities { expected, got }
    }

    /// Creates an [`Error::ParseFloat`] error.
    #[inline]
    pub fn parse_float(input: impl Into<String>, source: std::num::ParseFloatError) -> Self {
        Self::ParseFloat {
            input: input.into(),
            source,
        }
    }
}
