use crate::core::data::canvas::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideCanvas { point: Point, canvas: CanvasSize },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideCanvas { point, canvas } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} canvas",
                    point.x,
                    point.y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Maps a canvas pixel to its point on the complex plane.
///
/// The canvas centre lands on `offset`; one zoom unit spans half the canvas
/// height in plane units, and the width/height ratio keeps horizontal scale
/// consistent with vertical scale on non-square canvases. With `axis_swap`
/// set, x/y and width/height are transposed first, so portrait exploration
/// works without changing the canvas geometry.
pub fn pixel_to_plane_coords(
    pixel: Point,
    canvas: CanvasSize,
    offset: Complex,
    zoom: f64,
    axis_swap: bool,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !canvas.contains_point(pixel) {
        return Err(PixelToPlaneCoordsError::PointOutsideCanvas { point: pixel, canvas });
    }

    let (x, y, width, height) = if axis_swap {
        (
            f64::from(pixel.y),
            f64::from(pixel.x),
            f64::from(canvas.height()),
            f64::from(canvas.width()),
        )
    } else {
        (
            f64::from(pixel.x),
            f64::from(pixel.y),
            f64::from(canvas.width()),
            f64::from(canvas.height()),
        )
    };

    let real = offset.real + (width / height) * (x - width / 2.0) / (zoom * width / 2.0);
    let imag = offset.imag - (y - height / 2.0) / (zoom * height / 2.0);

    Ok(Complex { real, imag })
}
