//! Apply command
//!
//! Pushes one linear RGB triplet through a derived transform.

use anyhow::{Result, bail};
use chroma_math::Vec3;
use chroma_primaries::Adaptation;
use tracing::{debug, trace};

use super::{Space, derive_transform, format_color};
use crate::ApplyArgs;

pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    trace!(?args, "apply::run");
    let (src, dst) = super::resolve_pair(&args.spaces)?;
    let adaptation = Adaptation::from(args.spaces.adaptation);

    print!("{}", render(&src, &dst, adaptation, &args.rgb, verbose)?);
    Ok(())
}

/// Transforms `rgb` from `src` to `dst` and formats the result.
fn render(
    src: &Space,
    dst: &Space,
    adaptation: Adaptation,
    rgb: &[f32],
    verbose: bool,
) -> Result<String> {
    let [r, g, b] = rgb[..] else {
        bail!("Expected 3 RGB values, got {}", rgb.len());
    };

    let m = derive_transform(src, dst, adaptation);
    let input = Vec3::new(r, g, b);
    let output = m * input;
    debug!(?input, ?output, "Applied transform");

    let mut out = String::new();
    if verbose {
        out.push_str(&format_color(src.label, input));
        out.push('\n');
    }
    out.push_str(&format_color(dst.label, output));
    out.push('\n');
    Ok(out)
}
