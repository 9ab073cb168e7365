//! Chromatic Adaptation Transforms (CAT).
//!
//! Matrices and functions for re-rendering XYZ values from one white point
//! to another. Every CAT here follows the von Kries scheme:
//!
//! ```text
//! M^-1 * diag(dst_cone / src_cone) * M
//! ```
//!
//! where `M` maps XYZ into a cone-response space and `src_cone`, `dst_cone`
//! are the two white points expressed in that space.
//!
//! # Two Bradford tables
//!
//! [`XYZ_TO_BRADFORD`] / [`BRADFORD_TO_XYZ`] hold the Bradford coefficients
//! laid out as **columns**. `chroma_primaries::chromatic_adaptation` feeds
//! whites through them as `(wx, 1, wy)`; that combination maps those inputs
//! onto each other, not XYZ white onto XYZ white.
//!
//! [`BRADFORD`] / [`BRADFORD_INV`] are the textbook row layout used by
//! [`adapt_matrix`] on true XYZ white points. The two layouts are transposes
//! of each other.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{adapt_matrix, CatMethod, D65, D50};
//!
//! let d65_to_d50 = adapt_matrix(CatMethod::Bradford, D65, D50);
//! assert!((d65_to_d50 * D65).approx_eq(D50, 1e-4));
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K).
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (~5000K). ICC profile connection space.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// ACES white point (~D60), from xy (0.32168, 0.33767).
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

// ============================================================================
// Cone Response Matrices
// ============================================================================

/// XYZ to Bradford cone response, column layout.
///
/// Columns are `[0.8951, 0.2664, -0.1614]`, `[-0.7502, 1.7135, 0.0367]`,
/// `[0.0389, -0.0685, 1.0296]`.
pub const XYZ_TO_BRADFORD: Mat3 = Mat3::from_cols([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Inverse of [`XYZ_TO_BRADFORD`], column layout.
pub const BRADFORD_TO_XYZ: Mat3 = Mat3::from_cols([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Bradford chromatic adaptation matrix, row layout.
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Inverse Bradford matrix, row layout.
pub const BRADFORD_INV: Mat3 = Mat3::from_rows([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Von Kries (Hunt-Pointer-Estevez) cone response matrix.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Inverse Von Kries matrix.
pub const VON_KRIES_INV: Mat3 = Mat3::from_rows([
    [1.8599364, -1.1293816, 0.2198974],
    [0.3611914, 0.6388125, -0.0000064],
    [0.0000000, 0.0000000, 1.0890636],
]);

/// CAT02 matrix from the CIECAM02 color appearance model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Inverse CAT02 matrix.
pub const CAT02_INV: Mat3 = Mat3::from_rows([
    [1.0961238, -0.2788690, 0.1827452],
    [0.4543690, 0.4735332, 0.0720978],
    [-0.0096276, -0.0056980, 1.0153256],
]);

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Cone response basis used by [`adapt_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatMethod {
    /// Bradford, row layout. Best general-purpose choice.
    #[default]
    Bradford,
    /// Von Kries / Hunt-Pointer-Estevez.
    VonKries,
    /// CIECAM02 CAT02.
    Cat02,
    /// Plain XYZ scaling (identity basis).
    XyzScaling,
}

impl CatMethod {
    /// All methods, in display order.
    pub const ALL: [CatMethod; 4] = [
        Self::Bradford,
        Self::VonKries,
        Self::Cat02,
        Self::XyzScaling,
    ];

    /// XYZ to cone response matrix.
    pub const fn matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
            Self::Cat02 => CAT02,
            Self::XyzScaling => Mat3::IDENTITY,
        }
    }

    /// Cone response to XYZ matrix.
    pub const fn inverse_matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD_INV,
            Self::VonKries => VON_KRIES_INV,
            Self::Cat02 => CAT02_INV,
            Self::XyzScaling => Mat3::IDENTITY,
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bradford => "bradford",
            Self::VonKries => "von-kries",
            Self::Cat02 => "cat02",
            Self::XyzScaling => "xyz-scaling",
        }
    }
}

/// Diagonal scale between two white points in a cone response space.
///
/// `to_cone` maps both whites into cone space; the result holds
/// `dst_cone / src_cone` on its diagonal. A zero `src_cone` component
/// yields non-finite entries.
#[inline]
pub fn cone_response_scale(to_cone: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let src_cone = to_cone * src_white;
    let dst_cone = to_cone * dst_white;
    Mat3::from_diagonal(dst_cone / src_cone)
}

/// Computes a chromatic adaptation matrix between two XYZ white points.
///
/// The resulting matrix maps XYZ values under `src_white` to XYZ values
/// under `dst_white`, and maps `src_white` itself onto `dst_white`.
///
/// # Example
///
/// ```rust
/// use chroma_math::{adapt_matrix, CatMethod, D50, D65};
///
/// let d50_to_d65 = adapt_matrix(CatMethod::Cat02, D50, D65);
/// assert!((d50_to_d65 * D50).approx_eq(D65, 1e-4));
/// ```
pub fn adapt_matrix(method: CatMethod, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let to_cone = method.matrix();
    let scale = cone_response_scale(to_cone, src_white, dst_white);

    // M^-1 * S * M
    method.inverse_matrix() * scale * to_cone
}
