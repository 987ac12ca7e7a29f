//! Gradient scale mapping a numeric domain onto a list of color stops.
//!
//! A [`ColorScale`] covers the domain `[0, domain_max]` with its stops spread
//! evenly across it: sampling at 0 returns the first stop, at `domain_max`
//! the last, and anything between interpolates inside the segment it falls
//! in. Interpolation runs in the scale's [`ColorMode`], so the same stops can
//! produce a gamma-space, linear-light, or perceptual gradient.

use crate::color::{lerp, ColorMode, Srgb};
use crate::error::PatternError;

/// A color gradient over the domain `[0, domain_max]`.
#[derive(Debug, Clone)]
pub struct ColorScale {
    colors: Vec<Srgb>,
    mode: ColorMode,
    domain_max: f64,
}

impl ColorScale {
    /// Creates a scale from color stops spread evenly over `[0, domain_max]`.
    ///
    /// Requires at least one color.
    pub fn new(colors: Vec<Srgb>, mode: ColorMode, domain_max: f64) -> Result<Self, PatternError> {
        if colors.is_empty() {
            return Err(PatternError::InvalidPalette(
                "scale requires at least 1 color".to_string(),
            ));
        }
        Ok(Self {
            colors,
            mode,
            domain_max,
        })
    }

    /// Creates a scale by parsing hex color strings.
    ///
    /// Each string can be "#rrggbb" or "rrggbb" (case insensitive).
    pub fn from_hex(
        hexes: &[&str],
        mode: ColorMode,
        domain_max: f64,
    ) -> Result<Self, PatternError> {
        let colors: Result<Vec<Srgb>, PatternError> =
            hexes.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(colors?, mode, domain_max)
    }

    /// Returns the number of color stops in this scale.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if this scale has no stops. (Always false for valid scales.)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Samples the scale at `value` in the domain.
    ///
    /// The value is clamped to `[0, domain_max]` and NaN maps to 0, so
    /// out-of-domain queries return the nearest endpoint color. For a
    /// single-stop scale, returns that color for any value.
    pub fn sample(&self, value: f64) -> Srgb {
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }

        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.domain_max)
        };
        let t = if self.domain_max > 0.0 {
            value / self.domain_max
        } else {
            0.0
        };

        // Map t to segment index and local interpolation factor
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;

        lerp(self.colors[idx], self.colors[idx + 1], frac, self.mode)
    }
}
