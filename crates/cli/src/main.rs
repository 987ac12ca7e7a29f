#![deny(unsafe_code)]
//! CLI binary for the tri-pattern generator.
//!
//! Subcommands:
//! - `render` — build a pattern and write it as SVG or PNG
//! - `list` — print available palettes, styles, randomize options, and modes

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tri_pattern_core::{
    brewer, config, snapshot, ColorMode, ColorStyle, PaletteSpec, PatternConfig,
    RandomizePalette, RasterCanvas, Srgb, TrianglePattern,
};

#[derive(Parser)]
#[command(name = "tri-pattern", about = "Deterministic triangle pattern generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a pattern and write it to a file.
    Render(RenderArgs),
    /// List available palettes, styles, randomize options, and color modes.
    List,
}

#[derive(Args)]
struct RenderArgs {
    /// Pattern width in pixels.
    #[arg(short = 'W', long)]
    width: u32,

    /// Pattern height in pixels.
    #[arg(short = 'H', long)]
    height: u32,

    /// PRNG seed for deterministic output.
    #[arg(long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,

    /// Horizontal grid spacing.
    #[arg(long, default_value_t = config::DEFAULT_MESH_STEP)]
    mesh_step_x: f64,

    /// Vertical grid spacing.
    #[arg(long, default_value_t = config::DEFAULT_MESH_STEP)]
    mesh_step_y: f64,

    /// Maximum point jitter as a fraction of each dimension.
    #[arg(long, default_value_t = config::DEFAULT_VARIANCE)]
    variance: f64,

    /// Horizontal palette: a built-in name or comma-separated hex stops.
    #[arg(long, default_value = config::DEFAULT_COLORS_X)]
    palette_x: String,

    /// Vertical palette: a built-in name or comma-separated hex stops.
    #[arg(long, default_value = config::DEFAULT_COLORS_Y)]
    palette_y: String,

    /// Shuffle palettes before building their scales (none, x, y, both).
    #[arg(long, default_value = "none")]
    randomize: String,

    /// Blend weight between the horizontal and vertical colors, 0 to 1.
    #[arg(long, default_value_t = config::DEFAULT_COLOR_MIX_RATIO)]
    mix_ratio: f64,

    /// Color style (default, jitter, shadows, shining, saturate).
    #[arg(long, default_value = "default")]
    style: String,

    /// Intensity override for the selected style.
    #[arg(long)]
    intensity: Option<f64>,

    /// Color space for interpolation (rgb, lrgb, oklab, oklch).
    #[arg(long, default_value = "oklab")]
    mode: String,

    /// Render the uncolored debug mesh instead of the colored pattern.
    #[arg(long)]
    mesh: bool,

    /// Output file path; the extension picks the format (.svg or .png).
    #[arg(short, long, default_value = "pattern.svg")]
    output: PathBuf,
}

enum OutputFormat {
    Svg,
    Png,
}

/// Picks the output format from the file extension.
fn output_format(path: &Path) -> Result<OutputFormat, CliError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(OutputFormat::Svg),
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(OutputFormat::Png),
        _ => Err(CliError::Input(format!(
            "cannot infer output format from {}: use a .svg or .png extension",
            path.display()
        ))),
    }
}

/// Parses a palette argument: a built-in name, or comma-separated hex stops.
fn parse_palette(value: &str) -> Result<PaletteSpec, CliError> {
    if value.contains(',') || value.starts_with('#') {
        let stops = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Srgb::from_hex)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CliError::Input(e.to_string()))?;
        Ok(PaletteSpec::Stops(stops))
    } else {
        // Validate the name here so a typo fails as user input, not deep in
        // pattern construction.
        brewer::by_name(value).map_err(|e| CliError::Input(e.to_string()))?;
        Ok(PaletteSpec::named(value))
    }
}

fn build_config(args: &RenderArgs) -> Result<PatternConfig, CliError> {
    let mut config = PatternConfig::new(args.width, args.height);
    config.seed = args.seed;
    config.mesh_step_x = args.mesh_step_x;
    config.mesh_step_y = args.mesh_step_y;
    config.variance = args.variance;
    config.colors_x = parse_palette(&args.palette_x)?;
    config.colors_y = parse_palette(&args.palette_y)?;
    config.color_randomize_palette = RandomizePalette::from_name(&args.randomize)
        .map_err(|e| CliError::Input(e.to_string()))?;
    config.color_mix_ratio = args.mix_ratio;
    config.color_style =
        ColorStyle::from_name(&args.style).map_err(|e| CliError::Input(e.to_string()))?;
    config.color_mode =
        ColorMode::from_name(&args.mode).map_err(|e| CliError::Input(e.to_string()))?;

    if let Some(intensity) = args.intensity {
        match config.color_style {
            ColorStyle::Jitter => config.color_style_jitter_intensity = intensity,
            ColorStyle::Shadows => config.color_style_shadows_intensity = intensity,
            ColorStyle::Shining => config.color_style_shining_intensity = intensity,
            ColorStyle::Saturate => config.color_style_saturate_intensity = intensity,
            ColorStyle::Default => {
                return Err(CliError::Input(
                    "--intensity requires a non-default --style".to_string(),
                ))
            }
        }
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes: Vec<&str> = brewer::names().collect();
            let styles = ColorStyle::names();
            let randomize = RandomizePalette::names();
            let modes = ColorMode::names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "styles": styles,
                    "randomize": randomize,
                    "modes": modes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Styles:");
                println!("  {}", styles.join(", "));
                println!("Randomize options:");
                println!("  {}", randomize.join(", "));
                println!("Color modes:");
                println!("  {}", modes.join(", "));
            }
        }
        Command::Render(args) => {
            let format = output_format(&args.output)?;
            if args.mesh && matches!(format, OutputFormat::Svg) {
                return Err(CliError::Input(
                    "mesh rendering is raster-only: use a .png output".to_string(),
                ));
            }

            let config = build_config(&args)?;
            let pattern = TrianglePattern::new(config)?;

            match format {
                OutputFormat::Svg => {
                    std::fs::write(&args.output, pattern.svg())
                        .map_err(|e| CliError::Io(e.to_string()))?;
                }
                OutputFormat::Png => {
                    let mut canvas = RasterCanvas::new(args.width, args.height);
                    if args.mesh {
                        pattern.draw_mesh(&mut canvas);
                    } else {
                        pattern.draw(&mut canvas);
                    }
                    snapshot::write_png(&canvas, &args.output)?;
                }
            }

            if cli.json {
                let info = serde_json::json!({
                    "config": pattern.config(),
                    "points": pattern.points().len(),
                    "triangles": pattern.triangles().len(),
                    "output": args.output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} pattern (seed {}, {} triangles) -> {}",
                    args.width,
                    args.height,
                    args.seed,
                    pattern.triangles().len(),
                    args.output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
