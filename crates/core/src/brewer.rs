//! Built-in color palettes from the ColorBrewer collection.
//!
//! Each palette is a list of hex stops ordered light to dark (sequential) or
//! end to end (diverging), suitable as input to a
//! [`ColorScale`](crate::scale::ColorScale). Lookup by name is case
//! insensitive.

use crate::error::PatternError;

/// A named built-in palette.
#[derive(Debug, Clone, Copy)]
pub struct BrewerPalette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

/// Sequential 9-class and diverging 11-class ColorBrewer palettes.
const PALETTES: &[BrewerPalette] = &[
    BrewerPalette {
        name: "OrRd",
        colors: &[
            "#fff7ec", "#fee8c8", "#fdd49e", "#fdbb84", "#fc8d59", "#ef6548", "#d7301f",
            "#b30000", "#7f0000",
        ],
    },
    BrewerPalette {
        name: "PuBu",
        colors: &[
            "#fff7fb", "#ece7f2", "#d0d1e6", "#a6bddb", "#74a9cf", "#3690c0", "#0570b0",
            "#045a8d", "#023858",
        ],
    },
    BrewerPalette {
        name: "BuPu",
        colors: &[
            "#f7fcfd", "#e0ecf4", "#bfd3e6", "#9ebcda", "#8c96c6", "#8c6bb1", "#88419d",
            "#810f7c", "#4d004b",
        ],
    },
    BrewerPalette {
        name: "Oranges",
        colors: &[
            "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801",
            "#a63603", "#7f2704",
        ],
    },
    BrewerPalette {
        name: "BuGn",
        colors: &[
            "#f7fcfd", "#e5f5f9", "#ccece6", "#99d8c9", "#66c2a4", "#41ae76", "#238b45",
            "#006d2c", "#00441b",
        ],
    },
    BrewerPalette {
        name: "YlOrBr",
        colors: &[
            "#ffffe5", "#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02",
            "#993404", "#662506",
        ],
    },
    BrewerPalette {
        name: "YlGn",
        colors: &[
            "#ffffe5", "#f7fcb9", "#d9f0a3", "#addd8e", "#78c679", "#41ab5d", "#238443",
            "#006837", "#004529",
        ],
    },
    BrewerPalette {
        name: "Reds",
        colors: &[
            "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d",
            "#a50f15", "#67000d",
        ],
    },
    BrewerPalette {
        name: "RdPu",
        colors: &[
            "#fff7f3", "#fde0dd", "#fcc5c0", "#fa9fb5", "#f768a1", "#dd3497", "#ae017e",
            "#7a0177", "#49006a",
        ],
    },
    BrewerPalette {
        name: "Greens",
        colors: &[
            "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45",
            "#006d2c", "#00441b",
        ],
    },
    BrewerPalette {
        name: "YlGnBu",
        colors: &[
            "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8",
            "#253494", "#081d58",
        ],
    },
    BrewerPalette {
        name: "Purples",
        colors: &[
            "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3",
            "#54278f", "#3f007d",
        ],
    },
    BrewerPalette {
        name: "GnBu",
        colors: &[
            "#f7fcf0", "#e0f3db", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe",
            "#0868ac", "#084081",
        ],
    },
    BrewerPalette {
        name: "Greys",
        colors: &[
            "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252",
            "#252525", "#000000",
        ],
    },
    BrewerPalette {
        name: "YlOrRd",
        colors: &[
            "#ffffcc", "#ffeda0", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c",
            "#bd0026", "#800026",
        ],
    },
    BrewerPalette {
        name: "PuRd",
        colors: &[
            "#f7f4f9", "#e7e1ef", "#d4b9da", "#c994c7", "#df65b0", "#e7298a", "#ce1256",
            "#980043", "#67001f",
        ],
    },
    BrewerPalette {
        name: "Blues",
        colors: &[
            "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5",
            "#08519c", "#08306b",
        ],
    },
    BrewerPalette {
        name: "PuBuGn",
        colors: &[
            "#fff7fb", "#ece2f0", "#d0d1e6", "#a6bddb", "#67a9cf", "#3690c0", "#02818a",
            "#016c59", "#014636",
        ],
    },
    BrewerPalette {
        name: "Spectral",
        colors: &[
            "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598",
            "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2",
        ],
    },
    BrewerPalette {
        name: "RdYlBu",
        colors: &[
            "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8",
            "#abd9e9", "#74add1", "#4575b4", "#313695",
        ],
    },
    BrewerPalette {
        name: "RdBu",
        colors: &[
            "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0",
            "#92c5de", "#4393c3", "#2166ac", "#053061",
        ],
    },
    BrewerPalette {
        name: "RdYlGn",
        colors: &[
            "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b",
            "#a6d96a", "#66bd63", "#1a9850", "#006837",
        ],
    },
];

/// Returns the hex stops of a built-in palette, matched case-insensitively.
pub fn by_name(name: &str) -> Result<&'static [&'static str], PatternError> {
    PALETTES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| p.colors)
        .ok_or_else(|| PatternError::UnknownName {
            kind: "palette",
            name: name.to_string(),
        })
}

/// Iterates over all built-in palette names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.name)
}

/// Iterates over all built-in palettes, in table order.
pub fn all() -> impl Iterator<Item = &'static BrewerPalette> {
    PALETTES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;

    #[test]
    fn lookup_is_case_insensitive() {
        let canonical = by_name("Oranges").unwrap();
        assert_eq!(by_name("oranges").unwrap(), canonical);
        assert_eq!(by_name("ORANGES").unwrap(), canonical);
    }

    #[test]
    fn unknown_palette_is_an_error() {
        let result = by_name("Viridis");
        assert!(matches!(
            result,
            Err(PatternError::UnknownName { kind: "palette", .. })
        ));
    }

    #[test]
    fn default_palettes_have_expected_endpoints() {
        let oranges = by_name("Oranges").unwrap();
        assert_eq!(oranges.first(), Some(&"#fff5eb"));
        assert_eq!(oranges.last(), Some(&"#7f2704"));

        let purples = by_name("Purples").unwrap();
        assert_eq!(purples.first(), Some(&"#fcfbfd"));
        assert_eq!(purples.last(), Some(&"#3f007d"));
    }

    #[test]
    fn every_palette_entry_parses_as_hex() {
        for palette in all() {
            for hex in palette.colors {
                assert!(
                    Srgb::from_hex(hex).is_ok(),
                    "{} contains invalid hex {hex:?}",
                    palette.name
                );
            }
        }
    }

    #[test]
    fn sequential_palettes_have_nine_stops() {
        for name in ["Oranges", "Purples", "Blues", "Greens", "Greys", "YlGnBu"] {
            assert_eq!(by_name(name).unwrap().len(), 9, "{name}");
        }
    }

    #[test]
    fn diverging_palettes_have_eleven_stops() {
        for name in ["Spectral", "RdYlBu", "RdBu", "RdYlGn"] {
            assert_eq!(by_name(name).unwrap().len(), 11, "{name}");
        }
    }

    #[test]
    fn palette_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in names() {
            assert!(
                seen.insert(name.to_ascii_lowercase()),
                "duplicate palette name {name}"
            );
        }
    }
}
