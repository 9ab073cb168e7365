//! Named color space catalogue.
//!
//! [`ColorSpaceId`] identifies the standard RGB color spaces whose
//! chromaticities ship with chroma-rs. Each id carries the CIE xy
//! coordinates of its primaries and white point as `const` data, so the
//! whole table is resolved at compile time and never mutated.
//!
//! # Supported Color Spaces
//!
//! | Id | Primaries | White |
//! |----|-----------|-------|
//! | [`Rec709`](ColorSpaceId::Rec709) | BT.709 / sRGB | D65 |
//! | [`Rec2020`](ColorSpaceId::Rec2020) | BT.2020 | D65 |
//! | [`AcesCg`](ColorSpaceId::AcesCg) | ACES AP1 | ACES (~D60) |
//! | [`Aces2065_1`](ColorSpaceId::Aces2065_1) | ACES AP0 | ACES (~D60) |
//! | [`DciP3`](ColorSpaceId::DciP3) | P3 | DCI |
//! | [`DisplayP3`](ColorSpaceId::DisplayP3) | P3 | D65 |
//! | [`AdobeRgb`](ColorSpaceId::AdobeRgb) | Adobe RGB (1998) | D65 |
//! | [`ProPhotoRgb`](ColorSpaceId::ProPhotoRgb) | ROMM | D50 |
//!
//! # Usage
//!
//! ```
//! use chroma_core::ColorSpaceId;
//!
//! let id: ColorSpaceId = "acescg".parse().unwrap();
//! assert_eq!(id, ColorSpaceId::AcesCg);
//! assert_eq!(id.white_point(), (0.32168, 0.33767));
//! ```
//!
//! # Used By
//!
//! - `chroma-primaries` - `Chromaticities::from_id` and named constants
//! - `chroma-cli` - `--from` / `--to` arguments

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f32, f32) = (0.3127, 0.3290);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: (f32, f32) = (0.3457, 0.3585);

/// ACES white point chromaticity (~6000K, close to but not exactly D60).
pub const ACES_WHITE_XY: (f32, f32) = (0.32168, 0.33767);

/// DCI white point chromaticity (theatrical projection).
pub const DCI_XY: (f32, f32) = (0.314, 0.351);

// ============================================================================
// Color Space Ids
// ============================================================================

/// Identifier of a named RGB color space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpaceId {
    /// ITU-R BT.709, also the sRGB gamut.
    ///
    /// Source: <https://en.wikipedia.org/wiki/Rec._709>
    Rec709,
    /// ITU-R BT.2020 UHDTV gamut.
    ///
    /// Source: <https://en.wikipedia.org/wiki/Rec._2020>
    Rec2020,
    /// ACEScg working space (AP1 primaries).
    ///
    /// Source: <https://docs.acescentral.com/encodings/acescg/#color-space>
    AcesCg,
    /// ACES2065-1 interchange space (AP0 primaries).
    ///
    /// Source: <https://docs.acescentral.com/encodings/aces2065-1/#technical-specification>
    Aces2065_1,
    /// DCI-P3 with the DCI theatrical white.
    DciP3,
    /// P3 primaries with a D65 white.
    DisplayP3,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// ProPhoto RGB (ROMM).
    ProPhotoRgb,
}

impl ColorSpaceId {
    /// Every known color space, in display order.
    pub const ALL: [ColorSpaceId; 8] = [
        Self::Rec709,
        Self::Rec2020,
        Self::AcesCg,
        Self::Aces2065_1,
        Self::DciP3,
        Self::DisplayP3,
        Self::AdobeRgb,
        Self::ProPhotoRgb,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rec709 => "Rec.709",
            Self::Rec2020 => "Rec.2020",
            Self::AcesCg => "ACEScg",
            Self::Aces2065_1 => "ACES2065-1",
            Self::DciP3 => "DCI-P3",
            Self::DisplayP3 => "Display P3",
            Self::AdobeRgb => "Adobe RGB",
            Self::ProPhotoRgb => "ProPhoto RGB",
        }
    }

    /// Family used to group related spaces in listings.
    pub const fn family(self) -> &'static str {
        match self {
            Self::Rec709 | Self::Rec2020 => "Rec",
            Self::AcesCg | Self::Aces2065_1 => "ACES",
            Self::DciP3 | Self::DisplayP3 => "P3",
            Self::AdobeRgb | Self::ProPhotoRgb => "Photo",
        }
    }

    /// Lowercase names accepted by [`FromStr`], besides the canonical name.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Rec709 => &["rec709", "bt709", "srgb", "linear-srgb"],
            Self::Rec2020 => &["rec2020", "bt2020"],
            Self::AcesCg => &["acescg", "ap1", "aces-ap1"],
            Self::Aces2065_1 => &["aces2065-1", "aces2065", "aces", "ap0", "aces-ap0"],
            Self::DciP3 => &["dci-p3", "dcip3", "p3-dci"],
            Self::DisplayP3 => &["display-p3", "displayp3", "p3-d65"],
            Self::AdobeRgb => &["adobe-rgb", "adobergb", "adobe1998"],
            Self::ProPhotoRgb => &["prophoto-rgb", "prophoto", "romm"],
        }
    }

    /// CIE xy chromaticities of the red, green and blue primaries.
    pub const fn primaries(self) -> [(f32, f32); 3] {
        match self {
            Self::Rec709 => [(0.640, 0.330), (0.300, 0.600), (0.150, 0.060)],
            Self::Rec2020 => [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
            Self::AcesCg => [(0.713, 0.293), (0.165, 0.830), (0.128, 0.044)],
            Self::Aces2065_1 => [(0.7347, 0.2653), (0.0, 1.0), (0.0001, -0.077)],
            Self::DciP3 | Self::DisplayP3 => [(0.680, 0.320), (0.265, 0.690), (0.150, 0.060)],
            Self::AdobeRgb => [(0.640, 0.330), (0.210, 0.710), (0.150, 0.060)],
            Self::ProPhotoRgb => [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
        }
    }

    /// CIE xy chromaticity of the white point.
    pub const fn white_point(self) -> (f32, f32) {
        match self {
            Self::Rec709 | Self::Rec2020 | Self::DisplayP3 | Self::AdobeRgb => D65_XY,
            Self::AcesCg | Self::Aces2065_1 => ACES_WHITE_XY,
            Self::DciP3 => DCI_XY,
            Self::ProPhotoRgb => D50_XY,
        }
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and folds `_`, `.` and spaces into `-`, so that
/// `"ACES2065_1"`, `"Rec.709"` and `"display p3"` all normalize.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .filter(|&c| c != '.')
        .collect()
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|id| normalize(id.name()) == key || id.aliases().contains(&key.as_str()))
            .ok_or_else(|| Error::unknown_color_space(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for id in ColorSpaceId::ALL {
            assert_eq!(id.name().parse::<ColorSpaceId>().unwrap(), id);
            for alias in id.aliases() {
                assert_eq!(alias.parse::<ColorSpaceId>().unwrap(), id, "alias {alias}");
            }
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!("ACES2065_1".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Aces2065_1);
        assert_eq!(" Display P3 ".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::DisplayP3);
        assert_eq!("REC.2020".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Rec2020);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "rec999".parse::<ColorSpaceId>().unwrap_err();
        assert!(matches!(err, Error::UnknownColorSpace(ref s) if s == "rec999"));
    }

    #[test]
    fn test_white_points() {
        assert_eq!(ColorSpaceId::Rec709.white_point(), ColorSpaceId::Rec2020.white_point());
        assert_eq!(ColorSpaceId::AcesCg.white_point(), ColorSpaceId::Aces2065_1.white_point());
        assert_ne!(ColorSpaceId::Rec709.white_point(), ColorSpaceId::AcesCg.white_point());
    }

    #[test]
    fn test_aces_family() {
        assert_eq!(ColorSpaceId::AcesCg.family(), "ACES");
        assert_eq!(ColorSpaceId::Aces2065_1.family(), "ACES");
        assert_eq!(ColorSpaceId::Rec709.to_string(), "Rec.709");
    }
}
