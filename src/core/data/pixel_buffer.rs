use crate::core::data::canvas::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

const OPAQUE_ALPHA: u8 = 255;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, canvas: CanvasSize },
    BoundsMismatch { canvas_size: usize, buffer_size: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, canvas } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of canvas bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA image buffer, 4 bytes per pixel, alpha always opaque.
/// Pixel (x, y) lives at byte offset `(y · width + x) · 4`.
#[derive(Debug, PartialEq)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        let total_bytes = canvas_to_buffer_size(canvas);

        Self {
            canvas,
            buffer: vec![0; total_bytes],
        }
    }

    pub fn from_data(canvas: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.canvas.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                canvas: self.canvas,
            });
        }

        let index =
            (pixel.y as usize * self.canvas.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE_ALPHA;

        Ok(())
    }

    /// RGBA colour at (x, y), mainly for inspection in tests and callers
    /// verifying rendered output.
    pub fn pixel(&self, pixel: Point) -> Result<[u8; 4], PixelBufferError> {
        if !self.canvas.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                canvas: self.canvas,
            });
        }

        let index =
            (pixel.y as usize * self.canvas.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        Ok([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
            self.buffer[index + 3],
        ])
    }
}
