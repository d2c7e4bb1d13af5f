mod controllers;
mod core;
mod storage;

pub use controllers::data::frame_data::FrameData;
pub use controllers::data::render_request::RenderRequest;
pub use controllers::errors::render::RenderError;
pub use controllers::events::render_event::RenderEvent;
pub use controllers::frame::{render_frame, RenderStatus};
pub use controllers::interactive::InteractiveRenderer;
pub use controllers::mandelbrot::mandelbrot_controller;
pub use controllers::ports::frame_sink::FrameSinkPort;

pub use crate::core::colour_mapping::gradient::{
    Gradient, GradientError, GradientInterpolation, MAX_GRADIENT_LEVELS, MIN_GRADIENT_LEVELS,
};
pub use crate::core::colour_mapping::palette::{Palette, PaletteError};
pub use crate::core::colour_mapping::procedural::ProceduralThemeKinds;
pub use crate::core::colour_mapping::theme::{
    ResolvedTheme, ThemeEntry, ThemeRegistry, ThemeRegistryError, ThemeRule,
};
pub use crate::core::data::canvas::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::{Colour, ColourHexError};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_params::{RenderParameters, RenderParametersError, MAX_ZOOM};
pub use crate::core::fractals::auto_iterations::auto_iterations;
pub use crate::core::fractals::escape::{escape_time, EscapeResult, PERIODICITY_SAMPLE_INTERVAL};
pub use crate::core::fractals::escape_algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::fractal_kinds::{FractalKinds, FractalVariants};
pub use crate::core::fractals::normalize::normalized_iterations;
