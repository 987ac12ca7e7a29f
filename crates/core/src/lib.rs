#![deny(unsafe_code)]
//! Deterministic low-poly triangle pattern generator.
//!
//! A seeded RNG jitters a regular point grid, Delaunay triangulation turns
//! the points into a mesh, and every triangle is colored from two gradient
//! scales (horizontal and vertical) mixed at its centroid. The same config
//! always produces the same pattern, down to the SVG bytes.
//!
//! Entry point: [`TrianglePattern::new`] with a [`PatternConfig`], then
//! [`TrianglePattern::draw`] onto a [`Canvas`] or [`TrianglePattern::svg`].

pub mod brewer;
pub mod canvas;
pub mod color;
pub mod colorize;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod pattern;
pub mod prng;
pub mod scale;
pub mod svg;
pub mod triangulate;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::{Canvas, RasterCanvas};
pub use color::{ColorMode, LinearRgb, OkLab, OkLch, Srgb};
pub use colorize::ColoredTriangle;
pub use config::{ColorStyle, PaletteSpec, PatternConfig, RandomizePalette};
pub use error::PatternError;
pub use geom::{Point, Triangle};
pub use pattern::TrianglePattern;
pub use prng::Xorshift64;
pub use scale::ColorScale;
pub use triangulate::{Delaunay, Triangulator};
