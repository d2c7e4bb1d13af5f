use crate::core::data::canvas::CanvasSize;
use crate::core::data::render_params::RenderParameters;

/// Everything the UI layer hands over for one frame: where to render, what
/// to render, and how to colour it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub canvas: CanvasSize,
    pub params: RenderParameters,
    pub theme_id: usize,
    pub shift_percent: f64,
    pub interpolate: bool,
}

impl RenderRequest {
    #[must_use]
    pub fn new(canvas: CanvasSize, params: RenderParameters, theme_id: usize) -> Self {
        Self {
            canvas,
            params,
            theme_id,
            shift_percent: 0.0,
            interpolate: true,
        }
    }
}
