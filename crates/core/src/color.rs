//! Color types, conversions, and the adjustment operations used by the
//! triangle colorizer.
//!
//! Four color types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`) with pure
//! conversion functions between them, all in `f64`. Gradients and mixing can
//! run in any of these spaces via [`ColorMode`]; OKLab is the default because
//! it keeps perceived lightness continuous across a gradient, which matters
//! when two scales are mixed per triangle.

use crate::error::PatternError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lightness change per unit of darken/brighten amount, in OKLab L units.
///
/// OKLab L spans [0, 1]; one full unit of `darken` moves a color about a
/// fifth of the way to black, mirroring the 18-of-100 L step convention of
/// CIELAB-based adjustment APIs.
const LIGHTNESS_STEP: f64 = 0.18;

/// Chroma change per unit of saturate amount, in OKLab chroma units.
///
/// Usable OKLab chroma tops out near 0.37 for sRGB colors, so 0.04 per unit
/// is the proportional analogue of the CIELAB chroma step.
const CHROMA_STEP: f64 = 0.04;

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip quantizes to
/// 8 bits per channel, which is the precision hex colors carry anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded sRGB).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh, the cylindrical form of OKLab. Hue is in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb {
    /// Black (`#000000`).
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// White (`#ffffff`).
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PatternError::InvalidColor` unless the input is a 6-digit hex
    /// color with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Srgb, PatternError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(PatternError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| PatternError::InvalidColor(format!("not a hex color: {:?}", hex)))
        };
        Ok(Srgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color as `"#rrggbb"`, quantizing each channel to 8 bits.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Color space used for scale interpolation and mixing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Gamma-encoded sRGB. Fast, but gradients darken through the midtones.
    Rgb,
    /// Linear (gamma-decoded) RGB.
    Lrgb,
    /// OKLab: perceptually uniform, lightness-continuous gradients.
    #[default]
    OkLab,
    /// OKLCh: OKLab in cylindrical form, hue interpolated along the
    /// shortest arc.
    OkLch,
}

impl ColorMode {
    /// All recognized mode names, in lookup order.
    pub fn names() -> &'static [&'static str] {
        &["rgb", "lrgb", "oklab", "oklch"]
    }

    /// Looks up a mode by name.
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        match name {
            "rgb" => Ok(ColorMode::Rgb),
            "lrgb" => Ok(ColorMode::Lrgb),
            "oklab" => Ok(ColorMode::OkLab),
            "oklch" => Ok(ColorMode::OkLch),
            _ => Err(PatternError::UnknownName {
                kind: "color mode",
                name: name.to_string(),
            }),
        }
    }

    /// The lookup name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Lrgb => "lrgb",
            ColorMode::OkLab => "oklab",
            ColorMode::OkLch => "oklch",
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Inverse sRGB gamma for a single component.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma for a single component.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB (gamma decode).
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB (gamma encode).
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts linear RGB to OKLab via the published OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to linear RGB via the inverse matrix transform.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLab to OKLCh.
///
/// NaN guard: below a chroma of 1e-10 the hue is pinned to 0.0 instead of
/// evaluating the indeterminate `atan2(0, 0)`.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    OkLch { l: c.l, c: ch, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// sRGB to OKLCh via sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// OKLCh to sRGB via OKLCh -> OKLab -> linear -> sRGB, clamped to [0, 1].
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    clamp_srgb(linear_to_srgb(oklab_to_linear(oklch_to_oklab(c))))
}

fn clamp_srgb(c: Srgb) -> Srgb {
    Srgb {
        r: c.r.clamp(0.0, 1.0),
        g: c.g.clamp(0.0, 1.0),
        b: c.b.clamp(0.0, 1.0),
    }
}

// ---------------------------------------------------------------------------
// Interpolation and mixing
// ---------------------------------------------------------------------------

/// Interpolates a hue angle along the shortest arc, wrapping at 360.
pub(crate) fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}

/// Linearly interpolates between two sRGB colors in the given color space.
///
/// `t` is assumed to already be in [0, 1]; both endpoints reproduce exactly
/// (up to the round trip through the interpolation space).
pub(crate) fn lerp(a: Srgb, b: Srgb, t: f64, mode: ColorMode) -> Srgb {
    let f = |x: f64, y: f64| x + t * (y - x);
    match mode {
        ColorMode::Rgb => clamp_srgb(Srgb {
            r: f(a.r, b.r),
            g: f(a.g, b.g),
            b: f(a.b, b.b),
        }),
        ColorMode::Lrgb => {
            let (la, lb) = (srgb_to_linear(a), srgb_to_linear(b));
            clamp_srgb(linear_to_srgb(LinearRgb {
                r: f(la.r, lb.r),
                g: f(la.g, lb.g),
                b: f(la.b, lb.b),
            }))
        }
        ColorMode::OkLab => {
            let (la, lb) = (
                linear_to_oklab(srgb_to_linear(a)),
                linear_to_oklab(srgb_to_linear(b)),
            );
            clamp_srgb(linear_to_srgb(oklab_to_linear(OkLab {
                l: f(la.l, lb.l),
                a: f(la.a, lb.a),
                b: f(la.b, lb.b),
            })))
        }
        ColorMode::OkLch => {
            let (la, lb) = (srgb_to_oklch(a), srgb_to_oklch(b));
            oklch_to_srgb(OkLch {
                l: f(la.l, lb.l),
                c: f(la.c, lb.c),
                h: interpolate_hue(la.h, lb.h, t),
            })
        }
    }
}

/// Mixes two colors: `ratio = 0` yields `a`, `ratio = 1` yields `b`.
///
/// The ratio is clamped to [0, 1] (NaN maps to 0) and interpolation happens
/// in `mode`.
pub fn mix(a: Srgb, b: Srgb, ratio: f64, mode: ColorMode) -> Srgb {
    let t = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    lerp(a, b, t, mode)
}

// ---------------------------------------------------------------------------
// Adjustments
// ---------------------------------------------------------------------------

/// Darkens a color by lowering OKLab lightness by `amount * 0.18`, clamped
/// to [0, 1]. Negative amounts brighten.
pub fn darken(c: Srgb, amount: f64) -> Srgb {
    let mut lch = srgb_to_oklch(c);
    lch.l = (lch.l - amount * LIGHTNESS_STEP).clamp(0.0, 1.0);
    oklch_to_srgb(lch)
}

/// Brightens a color; the exact inverse of [`darken`].
pub fn brighten(c: Srgb, amount: f64) -> Srgb {
    darken(c, -amount)
}

/// Saturates a color by raising OKLab chroma by `amount * 0.04`, floored at
/// zero chroma. The result is clamped back into the sRGB gamut.
pub fn saturate(c: Srgb, amount: f64) -> Srgb {
    let mut lch = srgb_to_oklch(c);
    lch.c = (lch.c + amount * CHROMA_STEP).max(0.0);
    oklch_to_srgb(lch)
}
