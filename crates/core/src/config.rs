//! Pattern configuration: user overrides merged onto documented defaults.
//!
//! Every field except `width` and `height` has a default, wired into serde
//! per field, so deserializing a partial JSON object performs the defaults
//! merge. Dimensions are intentionally defaulted to zero and rejected by
//! [`PatternConfig::validate`]: a config without explicit dimensions is not
//! renderable.

use crate::brewer;
use crate::color::{ColorMode, Srgb};
use crate::error::PatternError;
use serde::{Deserialize, Serialize};

/// Default horizontal and vertical grid spacing in pixels.
pub const DEFAULT_MESH_STEP: f64 = 35.0;
/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 123_456;
/// Default jitter bound as a fraction of each dimension.
pub const DEFAULT_VARIANCE: f64 = 0.05;
/// Default blend weight between the horizontal and vertical scale colors.
pub const DEFAULT_COLOR_MIX_RATIO: f64 = 0.5;
/// Default intensity for the `jitter` color style.
pub const DEFAULT_JITTER_INTENSITY: f64 = 0.15;
/// Default intensity for the `shadows`, `shining`, and `saturate` styles.
pub const DEFAULT_ADJUST_INTENSITY: f64 = 0.85;
/// Default palette for the horizontal scale.
pub const DEFAULT_COLORS_X: &str = "Oranges";
/// Default palette for the vertical scale.
pub const DEFAULT_COLORS_Y: &str = "Purples";

/// Per-triangle color post-processing style.
///
/// One style applies to both scale lookups of a triangle. Every style except
/// `Default` consumes one RNG draw per lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorStyle {
    /// Plain scale lookup, no RNG draw.
    #[default]
    Default,
    /// Re-query the scale at a randomly offset position.
    Jitter,
    /// Darken the looked-up color by a random amount.
    Shadows,
    /// Brighten the looked-up color by a random amount.
    Shining,
    /// Saturate the looked-up color by a random amount.
    Saturate,
}

impl ColorStyle {
    /// All recognized style names, in lookup order.
    pub fn names() -> &'static [&'static str] {
        &["default", "jitter", "shadows", "shining", "saturate"]
    }

    /// Looks up a style by name.
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        match name {
            "default" => Ok(ColorStyle::Default),
            "jitter" => Ok(ColorStyle::Jitter),
            "shadows" => Ok(ColorStyle::Shadows),
            "shining" => Ok(ColorStyle::Shining),
            "saturate" => Ok(ColorStyle::Saturate),
            _ => Err(PatternError::UnknownName {
                kind: "color style",
                name: name.to_string(),
            }),
        }
    }

    /// The lookup name of this style.
    pub fn name(self) -> &'static str {
        match self {
            ColorStyle::Default => "default",
            ColorStyle::Jitter => "jitter",
            ColorStyle::Shadows => "shadows",
            ColorStyle::Shining => "shining",
            ColorStyle::Saturate => "saturate",
        }
    }
}

/// Which palettes get shuffled before their scales are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomizePalette {
    #[default]
    None,
    X,
    Y,
    Both,
}

impl RandomizePalette {
    /// All recognized option names, in lookup order.
    pub fn names() -> &'static [&'static str] {
        &["none", "x", "y", "both"]
    }

    /// Looks up an option by name.
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        match name {
            "none" => Ok(RandomizePalette::None),
            "x" => Ok(RandomizePalette::X),
            "y" => Ok(RandomizePalette::Y),
            "both" => Ok(RandomizePalette::Both),
            _ => Err(PatternError::UnknownName {
                kind: "randomize option",
                name: name.to_string(),
            }),
        }
    }

    /// The lookup name of this option.
    pub fn name(self) -> &'static str {
        match self {
            RandomizePalette::None => "none",
            RandomizePalette::X => "x",
            RandomizePalette::Y => "y",
            RandomizePalette::Both => "both",
        }
    }

    /// True if the horizontal palette is shuffled.
    pub fn randomizes_x(self) -> bool {
        matches!(self, RandomizePalette::X | RandomizePalette::Both)
    }

    /// True if the vertical palette is shuffled.
    pub fn randomizes_y(self) -> bool {
        matches!(self, RandomizePalette::Y | RandomizePalette::Both)
    }
}

/// A gradient palette: either the name of a built-in or an explicit stop list.
///
/// Serialized untagged, so `"Oranges"` and `["#fff5eb", "#7f2704"]` are both
/// valid JSON renditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    /// Name of a [`brewer`] palette, matched case-insensitively.
    Named(String),
    /// Explicit color stops.
    Stops(Vec<Srgb>),
}

impl PaletteSpec {
    /// A named built-in palette.
    pub fn named(name: &str) -> Self {
        PaletteSpec::Named(name.to_string())
    }

    /// Resolves to concrete color stops.
    ///
    /// Returns `UnknownName` for an unrecognized built-in name. An explicit
    /// stop list passes through as-is, including an empty one (rejected
    /// later by scale construction).
    pub fn resolve(&self) -> Result<Vec<Srgb>, PatternError> {
        match self {
            PaletteSpec::Named(name) => brewer::by_name(name)?
                .iter()
                .map(|hex| Srgb::from_hex(hex))
                .collect(),
            PaletteSpec::Stops(stops) => Ok(stops.clone()),
        }
    }
}

fn default_mesh_step() -> f64 {
    DEFAULT_MESH_STEP
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_variance() -> f64 {
    DEFAULT_VARIANCE
}

fn default_mesh_color_stroke() -> Srgb {
    Srgb::BLACK
}

fn default_mesh_color_fill() -> Srgb {
    Srgb::WHITE
}

fn default_colors_x() -> PaletteSpec {
    PaletteSpec::named(DEFAULT_COLORS_X)
}

fn default_colors_y() -> PaletteSpec {
    PaletteSpec::named(DEFAULT_COLORS_Y)
}

fn default_color_mix_ratio() -> f64 {
    DEFAULT_COLOR_MIX_RATIO
}

fn default_jitter_intensity() -> f64 {
    DEFAULT_JITTER_INTENSITY
}

fn default_adjust_intensity() -> f64 {
    DEFAULT_ADJUST_INTENSITY
}

/// Complete configuration for one pattern instance.
///
/// Two equal configs produce byte-identical patterns. Construct with
/// [`PatternConfig::new`] and adjust fields, or deserialize a (possibly
/// partial) JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Output width in pixels. Required, must be non-zero.
    #[serde(default)]
    pub width: u32,
    /// Output height in pixels. Required, must be non-zero.
    #[serde(default)]
    pub height: u32,
    /// Horizontal spacing of the interior point lattice.
    #[serde(default = "default_mesh_step")]
    pub mesh_step_x: f64,
    /// Vertical spacing of the interior point lattice.
    #[serde(default = "default_mesh_step")]
    pub mesh_step_y: f64,
    /// RNG seed; equal seeds reproduce the pattern exactly.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Maximum point jitter as a fraction of each dimension.
    #[serde(default = "default_variance")]
    pub variance: f64,
    /// Stroke color for the mesh debug rendering.
    #[serde(default = "default_mesh_color_stroke")]
    pub mesh_color_stroke: Srgb,
    /// Fill color for the mesh debug rendering.
    #[serde(default = "default_mesh_color_fill")]
    pub mesh_color_fill: Srgb,
    /// Palette for the horizontal scale (domain `[0, width]`).
    #[serde(default = "default_colors_x")]
    pub colors_x: PaletteSpec,
    /// Palette for the vertical scale (domain `[0, height]`).
    #[serde(default = "default_colors_y")]
    pub colors_y: PaletteSpec,
    /// Which palettes to shuffle before building their scales.
    #[serde(default)]
    pub color_randomize_palette: RandomizePalette,
    /// Blend weight between the horizontal and vertical colors, 0 to 1.
    #[serde(default = "default_color_mix_ratio")]
    pub color_mix_ratio: f64,
    /// Per-triangle color post-processing style.
    #[serde(default)]
    pub color_style: ColorStyle,
    /// Intensity of the `jitter` style.
    #[serde(default = "default_jitter_intensity")]
    pub color_style_jitter_intensity: f64,
    /// Intensity of the `shadows` style.
    #[serde(default = "default_adjust_intensity")]
    pub color_style_shadows_intensity: f64,
    /// Intensity of the `shining` style.
    #[serde(default = "default_adjust_intensity")]
    pub color_style_shining_intensity: f64,
    /// Intensity of the `saturate` style.
    #[serde(default = "default_adjust_intensity")]
    pub color_style_saturate_intensity: f64,
    /// Color space for scale interpolation and mixing.
    #[serde(default)]
    pub color_mode: ColorMode,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            mesh_step_x: DEFAULT_MESH_STEP,
            mesh_step_y: DEFAULT_MESH_STEP,
            seed: DEFAULT_SEED,
            variance: DEFAULT_VARIANCE,
            mesh_color_stroke: Srgb::BLACK,
            mesh_color_fill: Srgb::WHITE,
            colors_x: default_colors_x(),
            colors_y: default_colors_y(),
            color_randomize_palette: RandomizePalette::None,
            color_mix_ratio: DEFAULT_COLOR_MIX_RATIO,
            color_style: ColorStyle::Default,
            color_style_jitter_intensity: DEFAULT_JITTER_INTENSITY,
            color_style_shadows_intensity: DEFAULT_ADJUST_INTENSITY,
            color_style_shining_intensity: DEFAULT_ADJUST_INTENSITY,
            color_style_saturate_intensity: DEFAULT_ADJUST_INTENSITY,
            color_mode: ColorMode::OkLab,
        }
    }
}

impl PatternConfig {
    /// Creates a config with the given dimensions and everything else at its
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validates that both dimensions are present and non-zero.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.width == 0 {
            return Err(PatternError::MissingDimension("width"));
        }
        if self.height == 0 {
            return Err(PatternError::MissingDimension("height"));
        }
        Ok(())
    }
}
