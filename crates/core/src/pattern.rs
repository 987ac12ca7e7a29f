//! The assembled triangle pattern.
//!
//! Construction runs the whole pipeline eagerly: validate the config, seed
//! the RNG, build the jittered point grid, triangulate, colorize. The
//! resulting instance is a read-only view over the computed data; drawing
//! and SVG export just replay it, so they can be called any number of times
//! in any order without changing the pattern.

use crate::canvas::Canvas;
use crate::colorize::{self, ColoredTriangle};
use crate::config::PatternConfig;
use crate::error::PatternError;
use crate::geom::{Point, Triangle};
use crate::grid;
use crate::prng::Xorshift64;
use crate::svg;
use crate::triangulate::{self, Delaunay, Triangulator};

/// A fully computed triangle pattern.
pub struct TrianglePattern {
    config: PatternConfig,
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    colored: Vec<ColoredTriangle>,
}

impl TrianglePattern {
    /// Builds a pattern with Delaunay triangulation.
    ///
    /// Fails with `MissingDimension` for zero dimensions and propagates
    /// palette resolution errors from the colorizer.
    pub fn new(config: PatternConfig) -> Result<Self, PatternError> {
        Self::with_triangulator(config, &Delaunay)
    }

    /// Builds a pattern with a caller-supplied triangulation strategy.
    pub fn with_triangulator(
        config: PatternConfig,
        triangulator: &dyn Triangulator,
    ) -> Result<Self, PatternError> {
        config.validate()?;
        let mut rng = Xorshift64::new(config.seed);
        let points = grid::build_points(&config, &mut rng);
        let triangles = triangulate::build_triangles(&points, triangulator);
        let colored = colorize::colorize(&config, &mut rng, &triangles)?;
        Ok(Self {
            config,
            points,
            triangles,
            colored,
        })
    }

    /// Paints every colored triangle, fill and stroke both in the triangle's
    /// color.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for colored in &self.colored {
            canvas.paint_triangle(&colored.triangle, colored.color, colored.color);
        }
    }

    /// Paints the uncolored mesh with the configured mesh fill and stroke
    /// colors, for debugging the point grid and triangulation.
    pub fn draw_mesh(&self, canvas: &mut dyn Canvas) {
        for triangle in &self.triangles {
            canvas.paint_triangle(
                triangle,
                self.config.mesh_color_fill,
                self.config.mesh_color_stroke,
            );
        }
    }

    /// Serializes the colored pattern to an SVG document string.
    pub fn svg(&self) -> String {
        svg::render_svg(self.config.width, self.config.height, &self.colored)
    }

    /// The generated point set, in generation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The triangulation, in emission order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The colored triangulation, one entry per triangle.
    pub fn colored_triangles(&self) -> &[ColoredTriangle] {
        &self.colored
    }

    /// The config this pattern was built from.
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }
}
