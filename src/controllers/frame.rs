use crate::controllers::data::frame_data::FrameData;
use crate::controllers::data::render_request::RenderRequest;
use crate::controllers::errors::render::RenderError;
use crate::core::actions::generate_escape_grid::generate_escape_grid_rayon::{
    generate_escape_grid_rayon, GenerateEscapeGridError,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::colour_mapping::theme::ThemeRegistry;
use crate::core::colour_mapping::theme_colour_map::ThemeColourMap;
use crate::core::fractals::escape_algorithm::EscapeTimeAlgorithm;
use std::time::{Duration, Instant};

/// Renders one complete frame synchronously: escape grid in parallel, then
/// colour mapping into a fresh RGBA buffer.
pub fn render_frame(
    request: &RenderRequest,
    registry: &ThemeRegistry,
) -> Result<FrameData, RenderError> {
    let theme = registry.resolve(request.theme_id)?;
    let algorithm = EscapeTimeAlgorithm::new(request.canvas, request.params);

    let start = Instant::now();

    let grid = generate_escape_grid_rayon(request.canvas, &algorithm)
        .map_err(GenerateEscapeGridError::Algorithm)?;

    let colour_map = ThemeColourMap::new(
        theme,
        &request.params,
        request.shift_percent,
        request.interpolate,
    );
    let pixel_buffer = generate_pixel_buffer(grid, &colour_map, request.canvas)?;

    Ok(FrameData {
        generation: 0,
        pixel_buffer,
        render_duration: start.elapsed(),
    })
}

/// Human-readable summary of a finished frame for display next to the
/// canvas. Plain key-value pairs; not part of the computational contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStatus {
    entries: Vec<(&'static str, String)>,
}

impl RenderStatus {
    #[must_use]
    pub fn new(request: &RenderRequest, theme_name: &str, render_duration: Duration) -> Self {
        let offset = request.params.offset();

        Self {
            entries: vec![
                ("offset", format!("{:+.6}{:+.6}i", offset.real, offset.imag)),
                ("zoom", format!("{:.3e}", request.params.zoom())),
                ("iterations", request.params.max_iterations().to_string()),
                ("theme", theme_name.to_string()),
                ("duration", format!("{:?}", render_duration)),
            ],
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }
}
