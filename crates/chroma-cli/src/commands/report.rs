//! Report command
//!
//! Prints the reference matrix set: the Rec.709 -> Rec.2020 primaries check
//! followed by the sRGB, ACEScg and ACES2065-1 transform pairs, in
//! `glm::mat3` initializer form.

use anyhow::Result;
use chroma_core::ColorSpaceId;
use chroma_math::Vec3;
use chroma_primaries::Adaptation;
use tracing::{info, trace};

use super::{Space, derive_transform, format_color, format_glsl};
use crate::ReportArgs;

/// Matrix groups: section title, then (label, from, to) per matrix.
const SECTIONS: [(&str, [(&str, ColorSpaceId, ColorSpaceId); 2]); 3] = [
    (
        "srgb",
        [
            ("r709_to_r2020", ColorSpaceId::Rec709, ColorSpaceId::Rec2020),
            ("r2020_to_r709", ColorSpaceId::Rec2020, ColorSpaceId::Rec709),
        ],
    ),
    (
        "acescg",
        [
            ("r709_to_acescg", ColorSpaceId::Rec709, ColorSpaceId::AcesCg),
            ("acescg_to_r709", ColorSpaceId::AcesCg, ColorSpaceId::Rec709),
        ],
    ),
    (
        "aces2065",
        [
            ("acescg_to_aces2065", ColorSpaceId::AcesCg, ColorSpaceId::Aces2065_1),
            ("aces2065_to_acescg", ColorSpaceId::Aces2065_1, ColorSpaceId::AcesCg),
        ],
    ),
];

pub fn run(args: ReportArgs, verbose: bool) -> Result<()> {
    trace!(?args, "report::run");
    let adaptation = Adaptation::from(args.adaptation);
    info!(adaptation = adaptation.name(), "Writing reference report");

    print!("{}", render(adaptation, args.expanded, verbose));
    Ok(())
}

/// Builds the whole report as text.
fn render(adaptation: Adaptation, expanded: bool, verbose: bool) -> String {
    let mut out = String::new();

    // Primary colors through Rec.709 -> Rec.2020
    let m = derive_transform(
        &Space::named(ColorSpaceId::Rec709),
        &Space::named(ColorSpaceId::Rec2020),
        adaptation,
    );
    for (label, primary) in [("  red", Vec3::X), ("green", Vec3::Y), (" blue", Vec3::Z)] {
        out.push_str(&format_color(label, m * primary));
        out.push('\n');
    }

    for (title, pairs) in SECTIONS {
        out.push_str(&format!("\n~ {} matrices ~\n", title));
        for (label, from, to) in pairs {
            let (src, dst) = (Space::named(from), Space::named(to));
            if verbose {
                out.push_str(&format!("// {} -> {}\n", src.label, dst.label));
            }
            let m = derive_transform(&src, &dst, adaptation);
            out.push_str(&format_glsl(label, &m, expanded));
            out.push('\n');
        }
    }

    out
}
