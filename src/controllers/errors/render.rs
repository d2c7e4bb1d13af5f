use crate::core::actions::generate_escape_grid::generate_escape_grid_rayon::GenerateEscapeGridError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::colour_mapping::theme::ThemeRegistryError;
use crate::core::util::pixel_to_plane_coords::PixelToPlaneCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Theme(ThemeRegistryError),
    EscapeGrid(GenerateEscapeGridError<PixelToPlaneCoordsError>),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(err) => write!(f, "theme error: {}", err),
            Self::EscapeGrid(err) => write!(f, "escape grid error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Theme(err) => Some(err),
            Self::EscapeGrid(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ThemeRegistryError> for RenderError {
    fn from(err: ThemeRegistryError) -> Self {
        Self::Theme(err)
    }
}

impl From<GenerateEscapeGridError<PixelToPlaneCoordsError>> for RenderError {
    fn from(err: GenerateEscapeGridError<PixelToPlaneCoordsError>) -> Self {
        Self::EscapeGrid(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}
