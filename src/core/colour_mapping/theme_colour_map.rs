use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::procedural::{exterior_colour, interior_colour};
use crate::core::colour_mapping::theme::ResolvedTheme;
use crate::core::data::colour::Colour;
use crate::core::data::render_params::RenderParameters;
use crate::core::fractals::escape::EscapeResult;
use crate::core::fractals::normalize::normalized_iterations;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ThemeColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for ThemeColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for ThemeColourMapError {}

/// One frame's colouring context: the resolved theme plus the iteration
/// parameters the normalizer needs. Holding the gradient snapshot here
/// keeps the render loop independent of registry appends.
#[derive(Debug, Clone)]
pub struct ThemeColourMap {
    theme: ResolvedTheme,
    max_iterations: u32,
    bailout_radius_squared: f64,
    exponent: u32,
    shift_percent: f64,
    interpolate: bool,
}

impl ThemeColourMap {
    #[must_use]
    pub fn new(
        theme: ResolvedTheme,
        params: &RenderParameters,
        shift_percent: f64,
        interpolate: bool,
    ) -> Self {
        Self {
            theme,
            max_iterations: params.max_iterations(),
            bailout_radius_squared: params.bailout_radius_squared(),
            exponent: params.exponent(),
            shift_percent,
            interpolate,
        }
    }
}

impl ColourMap<EscapeResult> for ThemeColourMap {
    fn map(&self, result: EscapeResult) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        if result.iterations > self.max_iterations {
            return Err(Box::new(ThemeColourMapError::IterationsExceedMax {
                iterations: result.iterations,
                max_iterations: self.max_iterations,
            }));
        }

        // Bound points never reach the normalizer.
        if result.iterations == self.max_iterations {
            return Ok(match &self.theme {
                ResolvedTheme::Procedural { kind, .. } => {
                    interior_colour(*kind, self.shift_percent)
                }
                ResolvedTheme::Gradient { .. } => Colour::BLACK,
            });
        }

        let normalized =
            normalized_iterations(result, self.bailout_radius_squared, self.exponent);

        Ok(match &self.theme {
            ResolvedTheme::Procedural { kind, .. } => {
                // Degenerate radius/exponent combinations can push the
                // smooth value non-finite; the raw count still colours.
                let normalized = if normalized.is_finite() {
                    normalized
                } else {
                    f64::from(result.iterations)
                };

                exterior_colour(
                    *kind,
                    result.iterations,
                    normalized,
                    self.max_iterations,
                    self.shift_percent,
                )
            }
            ResolvedTheme::Gradient { gradient, .. } => {
                gradient.colour_at(normalized, self.shift_percent, self.interpolate)
            }
        })
    }

    fn display_name(&self) -> &str {
        self.theme.name()
    }
}
