//! # chroma-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix derivation.
//!
//! A color space is defined colorimetrically by the CIE xy chromaticities of
//! its three primaries and its white point ([`Chromaticities`]). From those
//! eight numbers this crate derives:
//!
//! - [`rgb_to_xyz`] - the matrix taking linear RGB to CIE XYZ
//! - [`chromatic_adaptation`] - Bradford adaptation between two white points
//! - [`cs_transform`] - linear RGB in one space to linear RGB in another,
//!   with Bradford adaptation on `(wx, 1, wy)` whites
//! - [`cs_transform_unadapted`] - the same without adaptation, valid only
//!   when both spaces share a white point
//! - [`cs_transform_with`] - any [`Adaptation`]; `Adaptation::Cat(_)` maps
//!   RGB white exactly onto RGB white across white points
//!
//! # Usage
//!
//! ```rust
//! use chroma_primaries::{cs_transform, cs_transform_unadapted, ACES_CG, REC2020, REC709};
//! use chroma_math::Vec3;
//!
//! // Same white point (D65): no adaptation needed
//! let to_2020 = cs_transform_unadapted(&REC709, &REC2020);
//! let red = to_2020 * Vec3::new(1.0, 0.0, 0.0);
//! assert!((red.x - 0.6274).abs() < 1e-3);
//!
//! // D65 -> ACES white: adapt (exact white with Adaptation::Cat)
//! let to_acescg = cs_transform(&REC709, &ACES_CG);
//! ```
//!
//! # Included Color Spaces
//!
//! | Constant | Gamut Size | Primary Use |
//! |----------|------------|-------------|
//! | [`REC709`] / [`SRGB`] | Small | Web, HDTV |
//! | [`DCI_P3`], [`DISPLAY_P3`] | Medium | Cinema, Apple displays |
//! | [`REC2020`] | Large | UHDTV, HDR |
//! | [`ACES_CG`] (AP1) | Large | ACES working space |
//! | [`ACES_2065_1`] (AP0) | Very Large | Archival, interchange |
//! | [`ADOBE_RGB`], [`PROPHOTO_RGB`] | Medium / Very Large | Photography |
//!
//! # Dependencies
//!
//! - `chroma-core` - [`ColorSpaceId`] catalogue and errors
//! - `chroma-math` - Matrix operations and adaptation bases
//! - [`tracing`] - Trace-level logging of derived matrices
//!
//! # Used By
//!
//! - `chroma-cli` - Matrix printing and RGB conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::str::FromStr;

use chroma_core::{ColorSpaceId, Error, Result};
use chroma_math::Vec3;

mod transform;

pub use chroma_core::{ACES_WHITE_XY, D50_XY, D65_XY, DCI_XY};
pub use transform::*;

/// Chromaticities defining an RGB color space.
///
/// Eight reals in the CIE 1931 xy plane: one pair for each of the red, green
/// and blue primaries, and one for the white point. No validity is enforced;
/// degenerate values (a zero `y`, collinear primaries) surface as non-finite
/// matrices further down the pipeline.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::Chromaticities;
///
/// let custom = Chromaticities::from_array([0.64, 0.33, 0.30, 0.60, 0.15, 0.06, 0.3127, 0.3290]);
/// assert_eq!(custom.gx(), 0.30);
/// assert_eq!(custom.w, (0.3127, 0.3290));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticities {
    /// Red primary (x, y)
    pub r: (f32, f32),
    /// Green primary (x, y)
    pub g: (f32, f32),
    /// Blue primary (x, y)
    pub b: (f32, f32),
    /// White point (x, y)
    pub w: (f32, f32),
}

impl Chromaticities {
    /// Number of reals in a chromaticity set.
    pub const LEN: usize = 8;

    /// Creates chromaticities from `[rx, ry, gx, gy, bx, by, wx, wy]`.
    #[inline]
    pub const fn from_array(v: [f32; 8]) -> Self {
        Self {
            r: (v[0], v[1]),
            g: (v[2], v[3]),
            b: (v[4], v[5]),
            w: (v[6], v[7]),
        }
    }

    /// Returns `[rx, ry, gx, gy, bx, by, wx, wy]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 8] {
        [
            self.r.0, self.r.1, self.g.0, self.g.1, self.b.0, self.b.1, self.w.0, self.w.1,
        ]
    }

    /// Creates chromaticities from a slice of exactly eight values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidChromaticities`] if the slice length is not 8.
    pub fn from_slice(v: &[f32]) -> Result<Self> {
        let arr: [f32; 8] = v
            .try_into()
            .map_err(|_| Error::invalid_chromaticities(Self::LEN, v.len()))?;
        Ok(Self::from_array(arr))
    }

    /// Chromaticities of a named color space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::ColorSpaceId;
    /// use chroma_primaries::{Chromaticities, ACES_CG};
    ///
    /// assert_eq!(Chromaticities::from_id(ColorSpaceId::AcesCg), ACES_CG);
    /// ```
    pub const fn from_id(id: ColorSpaceId) -> Self {
        let [r, g, b] = id.primaries();
        Self {
            r,
            g,
            b,
            w: id.white_point(),
        }
    }

    /// Red primary x.
    #[inline]
    pub const fn rx(&self) -> f32 {
        self.r.0
    }

    /// Red primary y.
    #[inline]
    pub const fn ry(&self) -> f32 {
        self.r.1
    }

    /// Green primary x.
    #[inline]
    pub const fn gx(&self) -> f32 {
        self.g.0
    }

    /// Green primary y.
    #[inline]
    pub const fn gy(&self) -> f32 {
        self.g.1
    }

    /// Blue primary x.
    #[inline]
    pub const fn bx(&self) -> f32 {
        self.b.0
    }

    /// Blue primary y.
    #[inline]
    pub const fn by(&self) -> f32 {
        self.b.1
    }

    /// White point x.
    #[inline]
    pub const fn wx(&self) -> f32 {
        self.w.0
    }

    /// White point y.
    #[inline]
    pub const fn wy(&self) -> f32 {
        self.w.1
    }

    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }

    /// True if both spaces have exactly the same white point chromaticity,
    /// i.e. when [`cs_transform_unadapted`] is colorimetrically valid.
    #[inline]
    pub fn shares_white_point(&self, other: &Self) -> bool {
        self.w == other.w
    }
}

impl From<ColorSpaceId> for Chromaticities {
    fn from(id: ColorSpaceId) -> Self {
        Self::from_id(id)
    }
}

/// Parses eight comma- or whitespace-separated reals,
/// `"rx,ry,gx,gy,bx,by,wx,wy"`.
impl FromStr for Chromaticities {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<f32>().map_err(|e| Error::parse_float(t, e)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_slice(&values)
    }
}

// ============================================================================
// Standard Color Space Chromaticities
// ============================================================================

/// Rec.709 primaries (D65 white point).
pub const REC709: Chromaticities = Chromaticities::from_id(ColorSpaceId::Rec709);

/// sRGB primaries (identical to Rec.709).
pub const SRGB: Chromaticities = REC709;

/// Rec.2020 primaries (D65 white point).
pub const REC2020: Chromaticities = Chromaticities::from_id(ColorSpaceId::Rec2020);

/// ACEScg, ACES AP1 primaries (ACES white point).
pub const ACES_CG: Chromaticities = Chromaticities::from_id(ColorSpaceId::AcesCg);

/// ACES2065-1, ACES AP0 primaries (ACES white point).
///
/// The green primary sits at (0, 1) and the blue below the xy axis: AP0
/// encloses the whole spectral locus.
pub const ACES_2065_1: Chromaticities = Chromaticities::from_id(ColorSpaceId::Aces2065_1);

/// DCI-P3 primaries (DCI white point).
pub const DCI_P3: Chromaticities = Chromaticities::from_id(ColorSpaceId::DciP3);

/// Display P3 primaries (D65 white point).
pub const DISPLAY_P3: Chromaticities = Chromaticities::from_id(ColorSpaceId::DisplayP3);

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Chromaticities = Chromaticities::from_id(ColorSpaceId::AdobeRgb);

/// ProPhoto RGB primaries (D50 white point).
pub const PROPHOTO_RGB: Chromaticities = Chromaticities::from_id(ColorSpaceId::ProPhotoRgb);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_matches_constants() {
        assert_eq!(Chromaticities::from(ColorSpaceId::Rec709), REC709);
        assert_eq!(SRGB, REC709);
        assert_eq!(ACES_2065_1.g, (0.0, 1.0));
        assert_eq!(ACES_2065_1.by(), -0.077);
    }

    #[test]
    fn test_array_roundtrip() {
        let arr = REC2020.to_array();
        assert_eq!(arr, [0.708, 0.292, 0.170, 0.797, 0.131, 0.046, 0.3127, 0.3290]);
        assert_eq!(Chromaticities::from_array(arr), REC2020);
    }

    #[test]
    fn test_accessors() {
        let c = ACES_CG;
        assert_eq!(
            [c.rx(), c.ry(), c.gx(), c.gy(), c.bx(), c.by(), c.wx(), c.wy()],
            c.to_array()
        );
    }

    #[test]
    fn test_from_slice_wrong_len() {
        let err = Chromaticities::from_slice(&[0.1, 0.2, 0.3]).unwrap_err();
        assert!(matches!(err, Error::InvalidChromaticities { expected: 8, got: 3 }));
    }

    #[test]
    fn test_parse() {
        let c: Chromaticities = "0.640,0.330, 0.300,0.600  0.150,0.060,0.3127,0.3290"
            .parse()
            .unwrap();
        assert_eq!(c, REC709);

        assert!(matches!(
            "0.64,0.33,x,0.6,0.15,0.06,0.3127,0.329".parse::<Chromaticities>(),
            Err(Error::ParseFloat { .. })
        ));
        assert!(matches!(
            "0.64,0.33".parse::<Chromaticities>(),
            Err(Error::InvalidChromaticities { got: 2, .. })
        ));
    }

    #[test]
    fn test_shares_white_point() {
        assert!(REC709.shares_white_point(&REC2020));
        assert!(ACES_CG.shares_white_point(&ACES_2065_1));
        assert!(!REC709.shares_white_point(&ACES_CG));
        assert!(!DCI_P3.shares_white_point(&DISPLAY_P3));
    }

    #[test]
    fn test_white_xyz() {
        let w = REC709.white_xyz();
        assert_eq!(w.y, 1.0);
        assert!((w.x - 0.95046).abs() < 1e-4);
        assert!((w.z - 1.08906).abs() < 1e-4);
    }
}
