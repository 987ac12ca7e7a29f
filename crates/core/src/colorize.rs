//! Per-triangle color derivation.
//!
//! Two independent gradient scales cover the pattern: the horizontal scale
//! over `[0, width]` and the vertical scale over `[0, height]`. Each triangle
//! looks up both scales at its centroid, passes each color through the
//! configured style transform, and mixes the two results.
//!
//! All randomness flows through the single pattern RNG in a fixed order:
//! optional palette shuffle for X, then for Y, then per triangle the X
//! lookup's draws strictly before the Y lookup's. Reordering any of it would
//! change every seeded output.

use crate::color::{brighten, darken, mix, saturate, Srgb};
use crate::config::{ColorStyle, PatternConfig};
use crate::error::PatternError;
use crate::geom::Triangle;
use crate::prng::Xorshift64;
use crate::scale::ColorScale;

/// A triangle with its derived color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredTriangle {
    pub triangle: Triangle,
    pub color: Srgb,
}

/// Colors every triangle, one output per input in the same order.
pub fn colorize(
    config: &PatternConfig,
    rng: &mut Xorshift64,
    triangles: &[Triangle],
) -> Result<Vec<ColoredTriangle>, PatternError> {
    let mut stops_x = config.colors_x.resolve()?;
    if config.color_randomize_palette.randomizes_x() {
        shuffle_palette(&mut stops_x, rng);
    }
    let scale_x = ColorScale::new(stops_x, config.color_mode, f64::from(config.width))?;

    let mut stops_y = config.colors_y.resolve()?;
    if config.color_randomize_palette.randomizes_y() {
        shuffle_palette(&mut stops_y, rng);
    }
    let scale_y = ColorScale::new(stops_y, config.color_mode, f64::from(config.height))?;

    let mut colored = Vec::with_capacity(triangles.len());
    for &triangle in triangles {
        let centroid = triangle.centroid();
        let color_x = sample_styled(config, rng, &scale_x, centroid.x);
        let color_y = sample_styled(config, rng, &scale_y, centroid.y);
        let color = mix(color_x, color_y, config.color_mix_ratio, config.color_mode);
        colored.push(ColoredTriangle { triangle, color });
    }

    Ok(colored)
}

/// Samples a scale at `value` with the configured style applied.
///
/// Every style except `Default` consumes exactly one RNG draw.
fn sample_styled(
    config: &PatternConfig,
    rng: &mut Xorshift64,
    scale: &ColorScale,
    value: f64,
) -> Srgb {
    match config.color_style {
        ColorStyle::Jitter => {
            let offset = (rng.next_f64() - 0.5) * config.color_style_jitter_intensity;
            scale.sample(value + value * offset)
        }
        ColorStyle::Shadows => {
            let color = scale.sample(value);
            darken(color, config.color_style_shadows_intensity * rng.next_f64())
        }
        ColorStyle::Shining => {
            let color = scale.sample(value);
            brighten(color, config.color_style_shining_intensity * rng.next_f64())
        }
        ColorStyle::Saturate => {
            let color = scale.sample(value);
            saturate(color, config.color_style_saturate_intensity * rng.next_f64())
        }
        ColorStyle::Default => scale.sample(value),
    }
}

/// Shuffles palette stops in place with a biased swap.
///
/// For each of the `n` iterations both swap endpoints are drawn fresh
/// (`floor(draw * n)`), two RNG draws per iteration. The permutation is not
/// uniform; seeded outputs depend on reproducing it exactly, so it must not
/// be replaced with Fisher-Yates.
fn shuffle_palette(stops: &mut [Srgb], rng: &mut Xorshift64) {
    let n = stops.len();
    for _ in 0..n {
        let a = (rng.next_f64() * n as f64).floor() as usize;
        let b = (rng.next_f64() * n as f64).floor() as usize;
        stops.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{srgb_to_oklch, ColorMode};
    use crate::config::RandomizePalette;
    use crate::geom::Point;

    const EPSILON: f64 = 1e-5;

    fn approx_color(a: Srgb, b: Srgb) -> bool {
        (a.r - b.r).abs() < EPSILON && (a.g - b.g).abs() < EPSILON && (a.b - b.b).abs() < EPSILON
    }

    fn oranges_stops() -> Vec<Srgb> {
        crate::config::PaletteSpec::named("Oranges").resolve().unwrap()
    }

    fn sample_triangles() -> Vec<Triangle> {
        vec![
            Triangle::new(
                Point::new(0.0, 0.0),
                Point::new(60.0, 0.0),
                Point::new(0.0, 60.0),
            ),
            Triangle::new(
                Point::new(60.0, 0.0),
                Point::new(60.0, 60.0),
                Point::new(0.0, 60.0),
            ),
            Triangle::new(
                Point::new(100.0, 100.0),
                Point::new(200.0, 120.0),
                Point::new(140.0, 190.0),
            ),
        ]
    }

    fn colorize_with(config: &PatternConfig) -> Vec<ColoredTriangle> {
        let mut rng = Xorshift64::new(config.seed);
        colorize(config, &mut rng, &sample_triangles()).unwrap()
    }

    // -- Shape and determinism --

    #[test]
    fn output_is_one_to_one_with_input_in_order() {
        let config = PatternConfig::new(200, 200);
        let triangles = sample_triangles();
        let mut rng = Xorshift64::new(config.seed);
        let colored = colorize(&config, &mut rng, &triangles).unwrap();
        assert_eq!(colored.len(), triangles.len());
        for (colored, original) in colored.iter().zip(triangles.iter()) {
            assert_eq!(colored.triangle, *original);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let config = PatternConfig::new(200, 200);
        let mut rng = Xorshift64::new(config.seed);
        assert!(colorize(&config, &mut rng, &[]).unwrap().is_empty());
    }

    #[test]
    fn same_seed_produces_identical_colors() {
        let mut config = PatternConfig::new(200, 200);
        config.color_style = ColorStyle::Jitter;
        config.color_randomize_palette = RandomizePalette::Both;
        assert_eq!(colorize_with(&config), colorize_with(&config));
    }

    #[test]
    fn default_style_maps_equal_centroids_to_equal_colors() {
        let config = PatternConfig::new(200, 200);
        let triangle = sample_triangles()[0];
        let shifted = Triangle::new(
            // Different vertices, same centroid as `triangle` (20, 20).
            Point::new(20.0, 0.0),
            Point::new(40.0, 30.0),
            Point::new(0.0, 30.0),
        );
        let mut rng = Xorshift64::new(config.seed);
        let colored = colorize(&config, &mut rng, &[triangle, shifted]).unwrap();
        assert_eq!(colored[0].color, colored[1].color);
    }

    // -- Mix ratio boundaries --

    #[test]
    fn ratio_zero_returns_the_horizontal_scale_color() {
        let mut config = PatternConfig::new(200, 200);
        config.color_mix_ratio = 0.0;
        let colored = colorize_with(&config);

        let scale_x =
            ColorScale::new(config.colors_x.resolve().unwrap(), config.color_mode, 200.0).unwrap();
        for colored in &colored {
            let expected = scale_x.sample(colored.triangle.centroid().x);
            assert!(
                approx_color(colored.color, expected),
                "{:?} vs {:?}",
                colored.color,
                expected
            );
        }
    }

    #[test]
    fn ratio_one_returns_the_vertical_scale_color() {
        let mut config = PatternConfig::new(200, 200);
        config.color_mix_ratio = 1.0;
        let colored = colorize_with(&config);

        let scale_y =
            ColorScale::new(config.colors_y.resolve().unwrap(), config.color_mode, 200.0).unwrap();
        for colored in &colored {
            let expected = scale_y.sample(colored.triangle.centroid().y);
            assert!(
                approx_color(colored.color, expected),
                "{:?} vs {:?}",
                colored.color,
                expected
            );
        }
    }

    // -- Style transforms --

    #[test]
    fn default_style_consumes_no_rng_draws() {
        let config = PatternConfig::new(200, 200);
        let mut rng = Xorshift64::new(config.seed);
        colorize(&config, &mut rng, &sample_triangles()).unwrap();

        let mut reference = Xorshift64::new(config.seed);
        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    #[test]
    fn styled_lookups_consume_one_draw_each() {
        for style in [
            ColorStyle::Jitter,
            ColorStyle::Shadows,
            ColorStyle::Shining,
            ColorStyle::Saturate,
        ] {
            let mut config = PatternConfig::new(200, 200);
            config.color_style = style;
            let triangles = sample_triangles();
            let mut rng = Xorshift64::new(config.seed);
            colorize(&config, &mut rng, &triangles).unwrap();

            // Two lookups per triangle, one draw per lookup.
            let mut reference = Xorshift64::new(config.seed);
            for _ in 0..triangles.len() * 2 {
                reference.next_f64();
            }
            assert_eq!(rng.next_u64(), reference.next_u64(), "{style:?}");
        }
    }

    #[test]
    fn shadows_darken_the_pattern_overall() {
        let base = PatternConfig::new(200, 200);
        let mut shadowed = base.clone();
        shadowed.color_style = ColorStyle::Shadows;

        let sum = |colored: &[ColoredTriangle]| -> f64 {
            colored.iter().map(|t| t.color.r + t.color.g + t.color.b).sum()
        };
        assert!(
            sum(&colorize_with(&shadowed)) < sum(&colorize_with(&base)),
            "shadows should lower the channel sum"
        );
    }

    #[test]
    fn shining_brightens_the_pattern_overall() {
        let base = PatternConfig::new(200, 200);
        let mut shining = base.clone();
        shining.color_style = ColorStyle::Shining;

        let sum = |colored: &[ColoredTriangle]| -> f64 {
            colored.iter().map(|t| t.color.r + t.color.g + t.color.b).sum()
        };
        assert!(
            sum(&colorize_with(&shining)) > sum(&colorize_with(&base)),
            "shining should raise the channel sum"
        );
    }

    #[test]
    fn saturate_raises_chroma_overall() {
        let base = PatternConfig::new(200, 200);
        let mut saturated = base.clone();
        saturated.color_style = ColorStyle::Saturate;

        let chroma_sum = |colored: &[ColoredTriangle]| -> f64 {
            colored.iter().map(|t| srgb_to_oklch(t.color).c).sum()
        };
        assert!(
            chroma_sum(&colorize_with(&saturated)) > chroma_sum(&colorize_with(&base)),
            "saturate should raise the chroma sum"
        );
    }

    #[test]
    fn jitter_changes_colors_but_stays_in_gamut() {
        let base = PatternConfig::new(200, 200);
        let mut jittered = base.clone();
        jittered.color_style = ColorStyle::Jitter;

        let plain = colorize_with(&base);
        let moved = colorize_with(&jittered);
        assert!(
            plain
                .iter()
                .zip(moved.iter())
                .any(|(a, b)| !approx_color(a.color, b.color)),
            "jitter left every color untouched"
        );
        for colored in &moved {
            for v in [colored.color.r, colored.color.g, colored.color.b] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    // -- Palette shuffle --

    #[test]
    fn shuffle_preserves_the_color_multiset() {
        let mut stops = oranges_stops();
        let original = stops.clone();
        let mut rng = Xorshift64::new(99);
        shuffle_palette(&mut stops, &mut rng);

        let mut sorted = stops.iter().map(|c| c.to_hex()).collect::<Vec<_>>();
        let mut expected = original.iter().map(|c| c.to_hex()).collect::<Vec<_>>();
        sorted.sort();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn shuffle_consumes_two_draws_per_entry() {
        let mut stops = oranges_stops();
        let n = stops.len();
        let mut rng = Xorshift64::new(7);
        shuffle_palette(&mut stops, &mut rng);

        let mut reference = Xorshift64::new(7);
        for _ in 0..2 * n {
            reference.next_f64();
        }
        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    #[test]
    fn shuffle_of_an_empty_palette_draws_nothing() {
        let mut stops: Vec<Srgb> = Vec::new();
        let mut rng = Xorshift64::new(7);
        shuffle_palette(&mut stops, &mut rng);
        assert_eq!(rng.next_u64(), Xorshift64::new(7).next_u64());
    }

    #[test]
    fn both_axes_shuffle_x_before_y() {
        let mut config = PatternConfig::new(200, 200);
        config.color_randomize_palette = RandomizePalette::Both;
        let mut rng = Xorshift64::new(config.seed);
        colorize(&config, &mut rng, &[]).unwrap();

        // Oranges and Purples both carry 9 stops: 18 draws each shuffle.
        let mut reference = Xorshift64::new(config.seed);
        for _ in 0..36 {
            reference.next_f64();
        }
        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    #[test]
    fn single_axis_randomization_shuffles_only_that_palette() {
        let mut config = PatternConfig::new(200, 200);
        config.color_randomize_palette = RandomizePalette::X;
        let mut rng = Xorshift64::new(config.seed);
        colorize(&config, &mut rng, &[]).unwrap();

        let mut reference = Xorshift64::new(config.seed);
        for _ in 0..18 {
            reference.next_f64();
        }
        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    // -- Error propagation --

    #[test]
    fn empty_stop_list_is_rejected() {
        let mut config = PatternConfig::new(200, 200);
        config.colors_x = crate::config::PaletteSpec::Stops(Vec::new());
        let mut rng = Xorshift64::new(config.seed);
        let result = colorize(&config, &mut rng, &sample_triangles());
        assert!(matches!(result, Err(PatternError::InvalidPalette(_))));
    }

    #[test]
    fn unknown_palette_name_is_rejected() {
        let mut config = PatternConfig::new(200, 200);
        config.colors_y = crate::config::PaletteSpec::named("NotAPalette");
        let mut rng = Xorshift64::new(config.seed);
        let result = colorize(&config, &mut rng, &sample_triangles());
        assert!(matches!(result, Err(PatternError::UnknownName { .. })));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn colors_are_always_in_gamut(
                seed in any::<u64>(),
                ratio in 0.0_f64..=1.0,
                style_idx in 0_usize..5,
            ) {
                let styles = [
                    ColorStyle::Default,
                    ColorStyle::Jitter,
                    ColorStyle::Shadows,
                    ColorStyle::Shining,
                    ColorStyle::Saturate,
                ];
                let mut config = PatternConfig::new(200, 200);
                config.seed = seed;
                config.color_mix_ratio = ratio;
                config.color_style = styles[style_idx];
                let mut rng = Xorshift64::new(seed);
                let colored = colorize(&config, &mut rng, &sample_triangles()).unwrap();
                for colored in colored {
                    for v in [colored.color.r, colored.color.g, colored.color.b] {
                        prop_assert!((0.0..=1.0).contains(&v), "channel {v}");
                    }
                }
            }

            #[test]
            fn shuffle_is_a_permutation_for_any_seed(seed in any::<u64>()) {
                let mut stops = oranges_stops();
                let original = stops.clone();
                let mut rng = Xorshift64::new(seed);
                shuffle_palette(&mut stops, &mut rng);

                let mut sorted: Vec<String> = stops.iter().map(|c| c.to_hex()).collect();
                let mut expected: Vec<String> = original.iter().map(|c| c.to_hex()).collect();
                sorted.sort();
                expected.sort();
                prop_assert_eq!(sorted, expected);
            }
        }
    }
}
