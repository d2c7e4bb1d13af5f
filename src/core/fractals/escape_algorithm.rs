use crate::core::actions::generate_escape_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParameters;
use crate::core::fractals::escape::{escape_time, EscapeResult};
use crate::core::util::pixel_to_plane_coords::{pixel_to_plane_coords, PixelToPlaneCoordsError};

/// Binds validated render parameters to a canvas so the grid generators can
/// drive the mapper and iterator pixel by pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    canvas: CanvasSize,
    params: RenderParameters,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(canvas: CanvasSize, params: RenderParameters) -> Self {
        Self { canvas, params }
    }

    #[must_use]
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_plane_coords(
            pixel,
            self.canvas,
            self.params.offset(),
            self.params.zoom(),
            self.params.axis_swap(),
        )?;

        Ok(escape_time(point, &self.params))
    }
}
