//! Jittered point grid construction.
//!
//! Points are produced in a fixed order: interior lattice (x-major), then a
//! jitter pass over the interior in insertion order, then border points on
//! the un-jittered lattice coordinates, then the four corners. The order and
//! the two-draws-per-point jitter schedule feed the triangulation and the
//! rest of the RNG stream, so both are part of the reproducibility contract.

use crate::config::PatternConfig;
use crate::geom::Point;
use crate::prng::Xorshift64;

/// Builds the point set for one pattern.
///
/// Interior points sit on a lattice starting at `(mesh_step_x, mesh_step_y)`
/// and stepping by the same, strictly inside the dimensions. Each is then
/// jittered by `floor(variance * (draw - 0.5) * dimension)` per axis (x draw
/// first) and clamped back into `[0, width] x [0, height]`. Border points
/// mirror the interior lattice onto the four edges; the corners close the
/// frame. A non-positive or over-sized step yields no interior points for
/// that axis, so the all-degenerate grid is just the four corners.
pub fn build_points(config: &PatternConfig, rng: &mut Xorshift64) -> Vec<Point> {
    let width = f64::from(config.width);
    let height = f64::from(config.height);
    let step_x = config.mesh_step_x;
    let step_y = config.mesh_step_y;

    let mut points = Vec::new();

    if step_x > 0.0 && step_y > 0.0 {
        let mut x = step_x;
        while x < width {
            let mut y = step_y;
            while y < height {
                points.push(Point::new(x, y));
                y += step_y;
            }
            x += step_x;
        }
    }

    for point in &mut points {
        let dx = (config.variance * (rng.next_f64() - 0.5) * width).floor();
        let dy = (config.variance * (rng.next_f64() - 0.5) * height).floor();
        point.x = (point.x + dx).clamp(0.0, width);
        point.y = (point.y + dy).clamp(0.0, height);
    }

    if step_x > 0.0 {
        let mut x = step_x;
        while x < width {
            points.push(Point::new(x, 0.0));
            points.push(Point::new(x, height));
            x += step_x;
        }
    }
    if step_y > 0.0 {
        let mut y = step_y;
        while y < height {
            points.push(Point::new(0.0, y));
            points.push(Point::new(width, y));
            y += step_y;
        }
    }

    points.push(Point::new(0.0, 0.0));
    points.push(Point::new(0.0, height));
    points.push(Point::new(width, 0.0));
    points.push(Point::new(width, height));

    points
}
