//! chroma - color-space transform matrix tool
//!
//! Prints linear RGB-to-RGB matrices derived from color space chromaticities.

use anyhow::Result;
use chroma_math::CatMethod;
use chroma_primaries::Adaptation;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Color-space transform matrix tool")]
#[command(long_about = "
Derives linear color-space conversion matrices from the chromaticities of
RGB primaries and white points.

Examples:
  chroma list                                  # Known color spaces
  chroma matrix --from rec709 --to acescg      # Adapted transform
  chroma matrix --from rec709 --to rec2020 -a none -f glsl
  chroma apply --from rec709 --to rec2020 1 0 0
  chroma matrix --from-xy 0.64,0.33,0.3,0.6,0.15,0.06,0.3127,0.329 --to ap0
  chroma report                                # Reference matrix set
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List known color spaces and their chromaticities
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Print the transform matrix between two color spaces
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Transform one linear RGB triplet between two color spaces
    Apply(ApplyArgs),

    /// Print the reference set of transform matrices
    Report(ReportArgs),
}

/// Source and destination color spaces, by name or by raw chromaticities.
#[derive(Args, Debug)]
struct SpaceArgs {
    /// Source color space (e.g. rec709, acescg, aces2065-1)
    #[arg(long, required_unless_present = "from_xy")]
    from: Option<String>,

    /// Source chromaticities: rx,ry,gx,gy,bx,by,wx,wy
    #[arg(long, conflicts_with = "from", allow_hyphen_values = true)]
    from_xy: Option<String>,

    /// Destination color space
    #[arg(long, required_unless_present = "to_xy")]
    to: Option<String>,

    /// Destination chromaticities: rx,ry,gx,gy,bx,by,wx,wy
    #[arg(long, conflicts_with = "to", allow_hyphen_values = true)]
    to_xy: Option<String>,

    /// White point adaptation (cat-bradford maps white exactly to white)
    #[arg(short, long, value_enum, default_value_t = AdaptationArg::Bradford)]
    adaptation: AdaptationArg,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Also print the RGB to XYZ matrix of each space
    #[arg(short, long)]
    matrices: bool,
}

#[derive(Args, Debug)]
struct MatrixArgs {
    #[command(flatten)]
    spaces: SpaceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = MatrixFormat::Rows)]
    format: MatrixFormat,

    /// Also print the reverse transform
    #[arg(short, long)]
    inverse: bool,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    #[command(flatten)]
    spaces: SpaceArgs,

    /// Linear RGB triplet in the source space
    #[arg(
        required = true,
        num_args = 3,
        value_names = ["R", "G", "B"],
        allow_negative_numbers = true
    )]
    rgb: Vec<f32>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// White point adaptation
    #[arg(short, long, value_enum, default_value_t = AdaptationArg::Bradford)]
    adaptation: AdaptationArg,

    /// Print each matrix over three lines instead of one
    #[arg(short, long)]
    expanded: bool,
}

/// White point handling selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AdaptationArg {
    /// Bradford on (wx, 1, wy) whites (default); approximate across white
    /// points, use cat-bradford for white-preserving output
    Bradford,
    /// No adaptation; only valid for identical white points
    None,
    /// Bradford on true XYZ white points
    CatBradford,
    /// CIECAM02 CAT02 on XYZ white points
    Cat02,
    /// Von Kries on XYZ white points
    VonKries,
    /// Plain XYZ scaling
    XyzScaling,
}

impl From<AdaptationArg> for Adaptation {
    fn from(arg: AdaptationArg) -> Self {
        match arg {
            AdaptationArg::Bradford => Adaptation::Bradford,
            AdaptationArg::None => Adaptation::None,
            AdaptationArg::CatBradford => Adaptation::Cat(CatMethod::Bradford),
            AdaptationArg::Cat02 => Adaptation::Cat(CatMethod::Cat02),
            AdaptationArg::VonKries => Adaptation::Cat(CatMethod::VonKries),
            AdaptationArg::XyzScaling => Adaptation::Cat(CatMethod::XyzScaling),
        }
    }
}

/// Output layout for `matrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MatrixFormat {
    /// Three rows of three values
    Rows,
    /// `constexpr glm::mat3` initializer, column order
    Glsl,
    /// JSON object with row-major elements
    Json,
}

/// Installs the global tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug`, and the
/// default is `warn`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List(args) => commands::list::run(args, cli.verbose),
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Report(args) => commands::report::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_matrix_args() {
        let cli = Cli::try_parse_from([
            "chroma", "matrix", "--from", "rec709", "--to", "acescg", "-a", "none", "-f", "glsl",
        ])
        .unwrap();
        let Commands::Matrix(args) = cli.command else {
            panic!("expected matrix command");
        };
        assert_eq!(args.spaces.from.as_deref(), Some("rec709"));
        assert_eq!(args.spaces.adaptation, AdaptationArg::None);
        assert_eq!(args.format, MatrixFormat::Glsl);
    }

    #[test]
    fn test_parse_custom_space_with_negative_values() {
        let cli = Cli::try_parse_from([
            "chroma",
            "apply",
            "--from-xy",
            "0.7347,0.2653,0.0,1.0,0.0001,-0.077,0.32168,0.33767",
            "--to",
            "acescg",
            "--",
            "-0.5",
            "1",
            "0",
        ])
        .unwrap();
        let Commands::Apply(args) = cli.command else {
            panic!("expected apply command");
        };
        assert!(args.spaces.from.is_none());
        assert_eq!(args.rgb, vec![-0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_missing_source_is_rejected() {
        assert!(Cli::try_parse_from(["chroma", "matrix", "--to", "acescg"]).is_err());
    }

    #[test]
    fn test_adaptation_arg_mapping() {
        assert_eq!(Adaptation::from(AdaptationArg::Bradford), Adaptation::default());
        assert_eq!(
            Adaptation::from(AdaptationArg::Cat02),
            Adaptation::Cat(CatMethod::Cat02)
        );
    }
}
