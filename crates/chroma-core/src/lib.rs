//! # chroma-core
//!
//! Core types shared by the chroma-rs crates.
//!
//! - [`ColorSpaceId`] - Catalogue of named RGB color spaces and their
//!   chromaticities
//! - [`Error`], [`Result`] - Errors for parsing and validating input
//!
//! ## Crate Structure
//!
//! This crate is the foundation of chroma-rs and has no internal dependencies:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-math (vectors, matrices, adaptation)
//!    +-- chroma-primaries (RGB/XYZ matrix derivation)
//!    +-- chroma-cli (command line consumer)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`ColorSpaceId`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;

pub use colorspace::*;
pub use error::*;

/// Prelude module for convenient imports.
///
/// ```
/// use chroma_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::{ColorSpaceId, ACES_WHITE_XY, D50_XY, D65_XY, DCI_XY};
    pub use crate::error::{Error, Result};
}
