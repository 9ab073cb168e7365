//! RGB/XYZ matrix derivation and cross-space transforms.
//!
//! # Pipeline
//!
//! ```text
//! xy chromaticities -> XYZ (Y = 1) -> primaries matrix -> RGB->XYZ
//!                                                         |
//!        RGB_dst <- XYZ->RGB_dst <- [adaptation] <--------+
//! ```
//!
//! # Choosing a transform
//!
//! | Function | Adaptation | Valid when |
//! |----------|------------|------------|
//! | [`cs_transform`] | Bradford, `(wx, 1, wy)` whites | exact for identical whites |
//! | [`cs_transform_unadapted`] | none | both white points are identical |
//! | [`cs_transform_with`] | any [`Adaptation`] | `Cat(_)`: always |
//!
//! Only `Adaptation::Cat(_)` maps RGB white onto RGB white across different
//! white points.

use chroma_core::ColorSpaceId;
use chroma_math::{
    BRADFORD_TO_XYZ, CatMethod, Mat3, Vec3, XYZ_TO_BRADFORD, adapt_matrix, cone_response_scale,
};
use tracing::trace;

use crate::Chromaticities;

/// Converts an xy chromaticity to XYZ, assuming Y = 1.
///
/// `X = x / y`, `Y = 1`, `Z = (1 - x - y) / y`. A zero `y` yields infinite
/// or NaN components.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::xy_to_xyz;
///
/// let d65 = xy_to_xyz(0.3127, 0.3290);
/// assert_eq!(d65.y, 1.0);
/// assert!(!xy_to_xyz(0.3, 0.0).is_finite());
/// ```
#[inline]
pub fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
}

/// Computes the matrix that transforms linear RGB values to CIE XYZ.
///
/// # Algorithm
///
/// 1. Convert the red, green, blue and white xy to XYZ (Y = 1)
/// 2. Place the unscaled primaries as the columns of a matrix `P`
/// 3. Solve `P * s = white` for the per-primary scale `s`
/// 4. Scale each column of `P` by its component of `s`
///
/// Step 3 answers "how much of each primary makes RGB (1, 1, 1) reproduce
/// the white point". Skipping it still gives a plausible looking matrix, just
/// the wrong one.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{rgb_to_xyz, REC709};
/// use chroma_math::Vec3;
///
/// let m = rgb_to_xyz(&REC709);
/// let red = m * Vec3::new(1.0, 0.0, 0.0);
/// assert!(red.approx_eq(Vec3::new(0.4124, 0.2126, 0.0193), 1e-3));
///
/// // White (1,1,1) maps to the white point, Y = 1
/// assert!(((m * Vec3::ONE).y - 1.0).abs() < 1e-5);
/// ```
pub fn rgb_to_xyz(c: &Chromaticities) -> Mat3 {
    let rp = xy_to_xyz(c.r.0, c.r.1);
    let gp = xy_to_xyz(c.g.0, c.g.1);
    let bp = xy_to_xyz(c.b.0, c.b.1);
    let wp = xy_to_xyz(c.w.0, c.w.1);

    let primaries = Mat3::from_col_vecs(rp, gp, bp);

    // Sr * R + Sg * G + Sb * B = W
    let s = primaries.inverse() * wp;

    let m = Mat3::from_col_vecs(rp * s.x, gp * s.y, bp * s.z);
    trace!(?c, ?s, ?m, "rgb_to_xyz");
    m
}

/// Computes the matrix that transforms CIE XYZ to linear RGB.
///
/// Inverse of [`rgb_to_xyz`].
#[inline]
pub fn xyz_to_rgb(c: &Chromaticities) -> Mat3 {
    rgb_to_xyz(c).inverse()
}

/// Bradford chromatic adaptation from `src`'s white point to `dst`'s.
///
/// Uses a fixed input convention:
///
/// - each white enters the cone space as `(wx, 1, wy)`, not through
///   [`xy_to_xyz`]
/// - the cone basis is [`XYZ_TO_BRADFORD`] in its column layout
///
/// The result is `BRADFORD_TO_XYZ * diag(dst_lms / src_lms) * XYZ_TO_BRADFORD`.
/// It maps `(src.wx, 1, src.wy)` onto `(dst.wx, 1, dst.wy)`, which is not
/// the XYZ white of either space. For different white points the source XYZ
/// white lands near, not on, the destination white (D65 to ACES gives
/// `(0.9485, 1.0023, 1.1111)` instead of `(0.9526, 1.0, 1.0088)`), so the
/// result does not reproduce published cross-white matrices such as
/// Rec.709 to ACEScg. For an adaptation that maps XYZ white to XYZ white,
/// use [`white_adaptation`].
///
/// A zero source cone response yields non-finite entries.
pub fn chromatic_adaptation(src: &Chromaticities, dst: &Chromaticities) -> Mat3 {
    let src_white = Vec3::new(src.w.0, 1.0, src.w.1);
    let dst_white = Vec3::new(dst.w.0, 1.0, dst.w.1);

    let scale = cone_response_scale(XYZ_TO_BRADFORD, src_white, dst_white);
    BRADFORD_TO_XYZ * (scale * XYZ_TO_BRADFORD)
}

/// Chromatic adaptation between the true XYZ white points of two spaces.
///
/// Unlike [`chromatic_adaptation`], the result maps
/// `rgb_to_xyz(src) * (1, 1, 1)` onto `rgb_to_xyz(dst) * (1, 1, 1)`.
#[inline]
pub fn white_adaptation(src: &Chromaticities, dst: &Chromaticities, method: CatMethod) -> Mat3 {
    adapt_matrix(method, src.white_xyz(), dst.white_xyz())
}

/// Linear RGB `src` to linear RGB `dst`, with Bradford white point adaptation.
///
/// `inverse(rgb_to_xyz(dst)) * chromatic_adaptation(src, dst) * rgb_to_xyz(src)`
///
/// For identical white points the adaptation is the identity and this
/// agrees with [`cs_transform_unadapted`]. For different white points the
/// adaptation follows [`chromatic_adaptation`]: neutrals move most of the
/// way but keep a cast, up to about 10% in the blue channel for Rec.709 to
/// ACEScg. Use [`cs_transform_with`] and `Adaptation::Cat(CatMethod::Bradford)`
/// when RGB white must map exactly to RGB white.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{cs_transform, ACES_CG};
/// use chroma_math::Mat3;
///
/// assert!(cs_transform(&ACES_CG, &ACES_CG).approx_eq(&Mat3::IDENTITY, 1e-5));
/// ```
pub fn cs_transform(src: &Chromaticities, dst: &Chromaticities) -> Mat3 {
    xyz_to_rgb(dst) * (chromatic_adaptation(src, dst) * rgb_to_xyz(src))
}

/// Linear RGB `src` to linear RGB `dst` through XYZ, without adaptation.
///
/// `inverse(rgb_to_xyz(dst)) * rgb_to_xyz(src)`
///
/// Only colorimetrically correct when both spaces share exactly the same
/// white point (see [`Chromaticities::shares_white_point`]). Otherwise source
/// white does not land on destination white and neutrals pick up a cast.
pub fn cs_transform_unadapted(src: &Chromaticities, dst: &Chromaticities) -> Mat3 {
    xyz_to_rgb(dst) * rgb_to_xyz(src)
}

/// White point handling for [`cs_transform_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adaptation {
    /// No adaptation ([`cs_transform_unadapted`]).
    None,
    /// Bradford on `(wx, 1, wy)` whites ([`cs_transform`]). Approximate
    /// across different white points.
    #[default]
    Bradford,
    /// A standard CAT on true XYZ white points ([`white_adaptation`]).
    Cat(CatMethod),
}

impl Adaptation {
    /// Adaptation matrix in XYZ between the white points of `src` and `dst`.
    pub fn matrix(self, src: &Chromaticities, dst: &Chromaticities) -> Mat3 {
        match self {
            Self::None => Mat3::IDENTITY,
            Self::Bradford => chromatic_adaptation(src, dst),
            Self::Cat(method) => white_adaptation(src, dst, method),
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bradford => "bradford",
            Self::Cat(CatMethod::Bradford) => "cat-bradford",
            Self::Cat(method) => method.name(),
        }
    }
}

/// Linear RGB `src` to linear RGB `dst` with the chosen [`Adaptation`].
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{cs_transform, cs_transform_with, Adaptation, REC709, ACES_CG};
///
/// assert_eq!(
///     cs_transform_with(&REC709, &ACES_CG, Adaptation::Bradford),
///     cs_transform(&REC709, &ACES_CG),
/// );
/// ```
pub fn cs_transform_with(
    src: &Chromaticities,
    dst: &Chromaticities,
    adaptation: Adaptation,
) -> Mat3 {
    match adaptation {
        Adaptation::None => cs_transform_unadapted(src, dst),
        Adaptation::Bradford => cs_transform(src, dst),
        Adaptation::Cat(_) => xyz_to_rgb(dst) * (adaptation.matrix(src, dst) * rgb_to_xyz(src)),
    }
}

/// Computes the conversion matrix between two named color spaces.
///
/// # Example
///
/// ```rust
/// use chroma_core::ColorSpaceId;
/// use chroma_primaries::{conversion_matrix, Adaptation};
///
/// let m = conversion_matrix(ColorSpaceId::Rec709, ColorSpaceId::AcesCg, Adaptation::Bradford);
/// assert!((m.m[0][0] - 1.0).abs() > 0.01);
/// ```
pub fn conversion_matrix(from: ColorSpaceId, to: ColorSpaceId, adaptation: Adaptation) -> Mat3 {
    let src = Chromaticities::from_id(from);
    let dst = Chromaticities::from_id(to);
    cs_transform_with(&src, &dst, adaptation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ACES_2065_1, ACES_CG, DCI_P3, REC2020, REC709};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_xy_to_xyz_assumes_unit_y() {
        for c in [REC709, REC2020, ACES_CG, ACES_2065_1] {
            for (x, y) in [c.r, c.g, c.b, c.w] {
                assert_eq!(xy_to_xyz(x, y).y, 1.0);
            }
        }
        let v = xy_to_xyz(0.25, 0.5);
        assert_eq!(v, Vec3::new(0.5, 1.0, 0.5));
    }

    #[test]
    fn test_xy_to_xyz_zero_y() {
        let v = xy_to_xyz(0.3127, 0.0);
        assert!(v.x.is_infinite());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_rec709_red_column() {
        let m = rgb_to_xyz(&REC709);
        let red = m * Vec3::X;
        assert_abs_diff_eq!(red.x, 0.4124, epsilon = 1e-3);
        assert_abs_diff_eq!(red.y, 0.2126, epsilon = 1e-3);
        assert_abs_diff_eq!(red.z, 0.0193, epsilon = 1e-3);
    }

    #[test]
    fn test_rgb_white_is_white_point() {
        for c in [REC709, REC2020, ACES_CG, ACES_2065_1, DCI_P3] {
            let white = rgb_to_xyz(&c) * Vec3::ONE;
            assert!(white.approx_eq(c.white_xyz(), 1e-4), "{c:?} white = {white:?}");
        }
    }

    #[test]
    fn test_scale_step_matters() {
        // Unscaled primaries give a different matrix
        let rp = xy_to_xyz(REC709.r.0, REC709.r.1);
        let gp = xy_to_xyz(REC709.g.0, REC709.g.1);
        let bp = xy_to_xyz(REC709.b.0, REC709.b.1);
        let unscaled = Mat3::from_col_vecs(rp, gp, bp);
        assert!(unscaled.max_abs_diff(&rgb_to_xyz(&REC709)) > 0.1);
    }

    #[test]
    fn test_aces_ap0_to_xyz() {
        // Published ACES AP0 to XYZ matrix (SMPTE ST 2065-1)
        let m = rgb_to_xyz(&ACES_2065_1);
        let expected = Mat3::from_rows([
            [0.9525524, 0.0, 0.0000937],
            [0.3439664, 0.7281661, -0.0721325],
            [0.0, 0.0, 1.0088252],
        ]);
        assert!(m.approx_eq(&expected, 1e-4), "{m:?}");
    }

    #[test]
    fn test_xyz_to_rgb_inverts() {
        let m = xyz_to_rgb(&REC2020) * rgb_to_xyz(&REC2020);
        assert!(m.approx_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_adaptation_same_white_is_identity() {
        let m = chromatic_adaptation(&REC709, &REC2020);
        assert!(m.approx_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_adaptation_maps_reference_white_input() {
        let m = chromatic_adaptation(&REC709, &ACES_CG);
        let src = Vec3::new(REC709.wx(), 1.0, REC709.wy());
        let dst = Vec3::new(ACES_CG.wx(), 1.0, ACES_CG.wy());
        assert!((m * src).approx_eq(dst, 1e-5));
    }

    #[test]
    fn test_adaptation_reverses() {
        let there = chromatic_adaptation(&REC709, &ACES_CG);
        let back = chromatic_adaptation(&ACES_CG, &REC709);
        assert!((back * there).approx_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_white_adaptation_maps_xyz_white() {
        for method in CatMethod::ALL {
            let m = white_adaptation(&REC709, &ACES_CG, method);
            assert!((m * REC709.white_xyz()).approx_eq(ACES_CG.white_xyz(), 1e-4));
        }
    }

    #[test]
    fn test_transform_to_self_is_identity() {
        for c in [REC709, REC2020, ACES_CG, ACES_2065_1] {
            assert!(cs_transform(&c, &c).approx_eq(&Mat3::IDENTITY, 1e-5));
            assert!(cs_transform_unadapted(&c, &c).approx_eq(&Mat3::IDENTITY, 1e-5));
        }
    }

    #[test]
    fn test_rec709_to_rec2020() {
        let m = cs_transform_unadapted(&REC709, &REC2020);

        // Published BT.2087 coefficients, first row
        assert_abs_diff_eq!(m.m[0][0], 0.6274, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[0][1], 0.3293, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[0][2], 0.0433, epsilon = 1e-3);

        let red = m * Vec3::X;
        assert!(red.min_element() >= 0.0 && red.max_element() <= 1.0, "{red:?}");

        // Shared white: adapted and unadapted agree
        assert!(cs_transform(&REC709, &REC2020).approx_eq(&m, 1e-5));
    }

    #[test]
    fn test_cs_transform_white_across_white_points() {
        let m = cs_transform(&REC709, &ACES_CG);
        let rgb_white = m * Vec3::ONE;
        let xyz_white = rgb_to_xyz(&ACES_CG) * rgb_white;

        // Close to the ACES white, but not on it
        assert!(xyz_white.approx_eq(ACES_CG.white_xyz(), 0.15));
        assert!(!xyz_white.approx_eq(ACES_CG.white_xyz(), 1e-3));
        assert!(xyz_white.approx_eq(Vec3::new(0.9485, 1.0023, 1.1111), 1e-3), "{xyz_white:?}");
        assert!(rgb_white.approx_eq(Vec3::new(0.9683, 1.0082, 1.1010), 1e-3), "{rgb_white:?}");

        assert_abs_diff_eq!(m.m[0][0], 0.5973, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[0][1], 0.3328, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[0][2], 0.0381, epsilon = 1e-3);
    }

    #[test]
    fn test_rec709_to_acescg_differs_by_adaptation() {
        let adapted = cs_transform(&REC709, &ACES_CG);
        let unadapted = cs_transform_unadapted(&REC709, &ACES_CG);
        assert!(adapted.max_abs_diff(&unadapted) > 1e-3);
    }

    #[test]
    fn test_transform_with_dispatch() {
        assert_eq!(
            cs_transform_with(&REC709, &ACES_CG, Adaptation::None),
            cs_transform_unadapted(&REC709, &ACES_CG)
        );
        assert_eq!(
            cs_transform_with(&REC709, &ACES_CG, Adaptation::default()),
            cs_transform(&REC709, &ACES_CG)
        );

        let cat = cs_transform_with(&REC709, &ACES_CG, Adaptation::Cat(CatMethod::Bradford));
        let white = rgb_to_xyz(&ACES_CG) * (cat * Vec3::ONE);
        assert!(white.approx_eq(ACES_CG.white_xyz(), 1e-4));
    }

    #[test]
    fn test_adaptation_names() {
        assert_eq!(Adaptation::None.name(), "none");
        assert_eq!(Adaptation::Bradford.name(), "bradford");
        assert_eq!(Adaptation::Cat(CatMethod::Bradford).name(), "cat-bradford");
        assert_eq!(Adaptation::Cat(CatMethod::Cat02).name(), "cat02");
    }

    #[test]
    fn test_conversion_matrix_by_id() {
        let m = conversion_matrix(
            ColorSpaceId::AcesCg,
            ColorSpaceId::Aces2065_1,
            Adaptation::Bradford,
        );
        assert_eq!(m, cs_transform(&ACES_CG, &ACES_2065_1));

        // Shared white: published AP1 to AP0 matrix
        let expected = Mat3::from_rows([
            [0.6954522, 0.1406787, 0.1638691],
            [0.0447946, 0.8596711, 0.0955343],
            [-0.0055259, 0.0040252, 1.0015007],
        ]);
        assert!(m.approx_eq(&expected, 1e-5), "{m:?}");
    }

    #[test]
    fn test_degenerate_primaries_are_not_finite() {
        let mut c = REC709;
        c.g = c.r;
        assert!(!rgb_to_xyz(&c).is_finite());

        c = REC709;
        c.b = (0.15, 0.0);
        assert!(!cs_transform(&c, &REC2020).is_finite());
    }
}
