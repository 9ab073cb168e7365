//! Matrix command
//!
//! Derives and prints the transform between two color spaces.

use anyhow::Result;
use chroma_primaries::Adaptation;
use tracing::{debug, info, trace};

use super::{MatrixReport, Space, derive_transform, format_glsl, format_json, format_rows};
use crate::{MatrixArgs, MatrixFormat};

pub fn run(args: MatrixArgs, verbose: bool) -> Result<()> {
    trace!(?args, "matrix::run");
    let (src, dst) = super::resolve_pair(&args.spaces)?;
    let adaptation = Adaptation::from(args.spaces.adaptation);
    info!(from = src.label, to = dst.label, adaptation = adaptation.name(), "Deriving transform");

    print_transform(&src, &dst, adaptation, args.format, verbose)?;
    if args.inverse {
        println!();
        print_transform(&dst, &src, adaptation, args.format, verbose)?;
    }

    Ok(())
}

fn print_transform(
    src: &Space,
    dst: &Space,
    adaptation: Adaptation,
    format: MatrixFormat,
    verbose: bool,
) -> Result<()> {
    let m = derive_transform(src, dst, adaptation);
    debug!(determinant = m.determinant(), "Derived transform");

    match format {
        MatrixFormat::Rows => {
            if verbose {
                println!("{} -> {} ({})", src.label, dst.label, adaptation.name());
            }
            println!("{}", format_rows(&m));
        }
        MatrixFormat::Glsl => {
            println!("{}", format_glsl(&label(src, dst), &m, false));
        }
        MatrixFormat::Json => {
            let report = MatrixReport {
                from: src.label,
                to: dst.label,
                adaptation: adaptation.name(),
                src: src.chromaticities,
                dst: dst.chromaticities,
                matrix: m,
            };
            println!("{}", format_json(&report)?);
        }
    }

    Ok(())
}

/// Identifier-safe label such as `rec709_to_acescg`.
fn label(src: &Space, dst: &Space) -> String {
    let ident = |s: &str| {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase()
    };
    format!("{}_to_{}", ident(src.label), ident(dst.label))
}
