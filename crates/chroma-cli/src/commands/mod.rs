//! CLI command implementations

pub mod apply;
pub mod list;
pub mod matrix;
pub mod report;

use anyhow::{Context, Result};
use chroma_core::ColorSpaceId;
use chroma_math::{Mat3, Vec3};
use chroma_primaries::{Adaptation, Chromaticities, cs_transform_with};
use serde::Serialize;
use tracing::{debug, warn};

use crate::SpaceArgs;

/// A color space resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    /// Display label: the canonical name, or `custom`
    pub label: &'static str,
    /// Chromaticities used for the math
    pub chromaticities: Chromaticities,
}

impl Space {
    /// Named space from the catalogue.
    pub fn named(id: ColorSpaceId) -> Self {
        Self {
            label: id.name(),
            chromaticities: id.into(),
        }
    }
}

/// Resolves a space from either a name or a raw chromaticity list.
pub fn resolve_space(name: Option<&str>, xy: Option<&str>) -> Result<Space> {
    match (xy, name) {
        (Some(xy), _) => {
            let chromaticities = xy
                .parse::<Chromaticities>()
                .with_context(|| format!("Invalid chromaticities: {}", xy))?;
            Ok(Space {
                label: "custom",
                chromaticities,
            })
        }
        (None, Some(name)) => {
            let id = name.parse::<ColorSpaceId>().with_context(|| {
                format!("Known spaces: {}", known_space_names().join(", "))
            })?;
            Ok(Space::named(id))
        }
        (None, None) => anyhow::bail!("No color space given"),
    }
}

/// Resolves `--from`/`--to` into a (source, destination) pair.
pub fn resolve_pair(args: &SpaceArgs) -> Result<(Space, Space)> {
    let src = resolve_space(args.from.as_deref(), args.from_xy.as_deref())?;
    let dst = resolve_space(args.to.as_deref(), args.to_xy.as_deref())?;
    debug!(from = src.label, to = dst.label, "Resolved color spaces");
    Ok((src, dst))
}

/// Computes `src -> dst`, warning about results the caller should not trust.
pub fn derive_transform(src: &Space, dst: &Space, adaptation: Adaptation) -> Mat3 {
    let (s, d) = (&src.chromaticities, &dst.chromaticities);

    if adaptation == Adaptation::None && !s.shares_white_point(d) {
        warn!(
            from = src.label,
            to = dst.label,
            "White points differ; an unadapted transform shifts neutrals"
        );
    }

    let m = cs_transform_with(s, d, adaptation);
    if !m.is_finite() {
        warn!(
            from = src.label,
            to = dst.label,
            "Transform has non-finite values; chromaticities are degenerate"
        );
    }
    m
}

fn known_space_names() -> Vec<&'static str> {
    ColorSpaceId::ALL.iter().map(|id| id.aliases()[0]).collect()
}

/// Formats an RGB triplet the way the reference tool logs colors.
pub fn format_color(label: &str, c: Vec3) -> String {
    format!("{}: r {:.6}, g {:.6}, b {:.6}", label, c.x, c.y, c.z)
}

/// Formats a matrix as a `glm::mat3` initializer (column order).
pub fn format_glsl(label: &str, m: &Mat3, expanded: bool) -> String {
    let v = m.to_cols_array().map(|x| format!("{:.6}", x));
    if expanded {
        format!(
            "constexpr glm::mat3 {} {{\n    {}, {}, {},\n    {}, {}, {},\n    {}, {}, {}\n}};",
            label, v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8]
        )
    } else {
        format!("constexpr glm::mat3 {} {{ {} }};", label, v.join(", "))
    }
}

/// Formats a matrix as three aligned rows.
pub fn format_rows(m: &Mat3) -> String {
    (0..3)
        .map(|i| {
            let r = m.row(i);
            format!("{:>12.8} {:>12.8} {:>12.8}", r.x, r.y, r.z)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON shape of a derived transform.
#[derive(Debug, Serialize)]
pub struct MatrixReport<'a> {
    /// Source space label
    pub from: &'a str,
    /// Destination space label
    pub to: &'a str,
    /// Adaptation name
    pub adaptation: &'a str,
    /// Source chromaticities
    pub src: Chromaticities,
    /// Destination chromaticities
    pub dst: Chromaticities,
    /// Row-major matrix elements
    pub matrix: Mat3,
}

/// Formats a transform as pretty JSON.
pub fn format_json(report: &MatrixReport<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize matrix")
}
