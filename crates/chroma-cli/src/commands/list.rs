//! List command
//!
//! Prints the color space catalogue with chromaticities and white points.

use anyhow::Result;
use chroma_core::ColorSpaceId;
use chroma_primaries::{Chromaticities, rgb_to_xyz};
use tracing::trace;

use crate::ListArgs;

pub fn run(args: ListArgs, verbose: bool) -> Result<()> {
    trace!(matrices = args.matrices, "list::run");

    for id in ColorSpaceId::ALL {
        println!("{}", describe(id, verbose));
        if args.matrices {
            let m = rgb_to_xyz(&Chromaticities::from_id(id));
            println!("  RGB -> XYZ:");
            for line in super::format_rows(&m).lines() {
                println!("  {}", line);
            }
        }
    }

    Ok(())
}

/// One catalogue line: name, family, primaries and white.
fn describe(id: ColorSpaceId, verbose: bool) -> String {
    let c = Chromaticities::from_id(id);
    let mut line = format!(
        "{:<14} [{}] R({:.4}, {:.4}) G({:.4}, {:.4}) B({:.4}, {:.4}) W({:.5}, {:.5})",
        id.name(),
        id.family(),
        c.rx(),
        c.ry(),
        c.gx(),
        c.gy(),
        c.bx(),
        c.by(),
        c.wx(),
        c.wy(),
    );
    if verbose {
        line.push_str(&format!("  aliases: {}", id.aliases().join(", ")));
    }
    line
}
