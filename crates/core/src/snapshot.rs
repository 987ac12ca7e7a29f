//! PNG snapshot of a [`RasterCanvas`].
//!
//! Feature-gated behind `png` so library consumers that only need the SVG
//! path do not pull in the `image` crate.

use crate::canvas::RasterCanvas;
use crate::error::PatternError;
use std::path::Path;

/// Writes the canvas to disk as a PNG image.
///
/// Returns `PatternError::Io` on encoding or write failure.
pub fn write_png(canvas: &RasterCanvas, path: &Path) -> Result<(), PatternError> {
    let img =
        image::RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.pixels().to_vec())
            .ok_or_else(|| PatternError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PatternError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use crate::geom::{Point, Triangle};
    use crate::Canvas;

    #[test]
    fn write_png_round_trip() {
        let mut canvas = RasterCanvas::new(16, 16);
        canvas.paint_triangle(
            &Triangle::new(
                Point::new(1.0, 1.0),
                Point::new(14.0, 1.0),
                Point::new(1.0, 14.0),
            ),
            Srgb::from_hex("#fd8d3c").unwrap(),
            Srgb::BLACK,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        // The untouched corner is still the white background.
        assert_eq!(img.get_pixel(15, 15).0, [255, 255, 255, 255]);
    }

    #[test]
    fn write_png_to_an_unwritable_path_fails_with_io() {
        let canvas = RasterCanvas::new(4, 4);
        let result = write_png(&canvas, Path::new("/no/such/directory/out.png"));
        assert!(matches!(result, Err(PatternError::Io(_))));
    }
}
