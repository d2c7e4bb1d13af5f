use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::{FractalKinds, FractalVariants};
use std::error::Error;
use std::fmt;

/// Double precision runs out of plane resolution past this zoom; requests
/// beyond it saturate rather than fail.
pub const MAX_ZOOM: f64 = 1e15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderParametersError {
    NonFiniteZoom { zoom: f64 },
    NonPositiveZoom { zoom: f64 },
    NonPositiveBailoutRadius { bailout_radius: f64 },
    ExponentTooSmall { exponent: u32 },
    ZeroMaxIterations,
}

impl fmt::Display for RenderParametersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteZoom { zoom } => {
                write!(f, "zoom must be finite, got {}", zoom)
            }
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be positive, got {}", zoom)
            }
            Self::NonPositiveBailoutRadius { bailout_radius } => {
                write!(
                    f,
                    "bailout radius must be a positive finite number, got {}",
                    bailout_radius
                )
            }
            Self::ExponentTooSmall { exponent } => {
                write!(f, "exponent must be at least 2, got {}", exponent)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for RenderParametersError {}

/// Everything one frame needs: which set, which variant rule, where on the
/// plane, and the iteration budget. Validated once here so the per-pixel
/// hot path never re-checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    kind: FractalKinds,
    variant: FractalVariants,
    exponent: u32,
    offset: Complex,
    julia_constant: Complex,
    zoom: f64,
    bailout_radius_squared: f64,
    max_iterations: u32,
    axis_swap: bool,
}

impl RenderParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: FractalKinds,
        variant: FractalVariants,
        exponent: u32,
        offset: Complex,
        julia_constant: Complex,
        zoom: f64,
        bailout_radius: f64,
        max_iterations: u32,
        axis_swap: bool,
    ) -> Result<Self, RenderParametersError> {
        if !zoom.is_finite() {
            return Err(RenderParametersError::NonFiniteZoom { zoom });
        }

        if zoom <= 0.0 {
            return Err(RenderParametersError::NonPositiveZoom { zoom });
        }

        if !bailout_radius.is_finite() || bailout_radius <= 0.0 {
            return Err(RenderParametersError::NonPositiveBailoutRadius { bailout_radius });
        }

        if exponent < 2 {
            return Err(RenderParametersError::ExponentTooSmall { exponent });
        }

        if max_iterations == 0 {
            return Err(RenderParametersError::ZeroMaxIterations);
        }

        Ok(Self {
            kind,
            variant,
            exponent,
            offset,
            julia_constant,
            zoom: zoom.min(MAX_ZOOM),
            bailout_radius_squared: bailout_radius * bailout_radius,
            max_iterations,
            axis_swap,
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.kind
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariants {
        self.variant
    }

    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn bailout_radius_squared(&self) -> f64 {
        self.bailout_radius_squared
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn axis_swap(&self) -> bool {
        self.axis_swap
    }
}

impl Default for RenderParameters {
    /// Classic full-set Mandelbrot view.
    fn default() -> Self {
        Self {
            kind: FractalKinds::Mandelbrot,
            variant: FractalVariants::Standard,
            exponent: 2,
            offset: Complex {
                real: -0.5,
                imag: 0.0,
            },
            julia_constant: Complex {
                real: -0.7,
                imag: 0.27,
            },
            zoom: 1.0,
            bailout_radius_squared: 65536.0,
            max_iterations: 256,
            axis_swap: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params(zoom: f64, bailout_radius: f64, exponent: u32, max_iterations: u32) -> Result<RenderParameters, RenderParametersError> {
        RenderParameters::new(
            FractalKinds::Mandelbrot,
            FractalVariants::Standard,
            exponent,
            Complex::ZERO,
            Complex::ZERO,
            zoom,
            bailout_radius,
            max_iterations,
            false,
        )
    }

    #[test]
    fn test_valid_constructor() {
        let params = valid_params(1.0, 2.0, 2, 256).unwrap();

        assert_eq!(params.zoom(), 1.0);
        assert_eq!(params.bailout_radius_squared(), 4.0);
        assert_eq!(params.exponent(), 2);
        assert_eq!(params.max_iterations(), 256);
    }

    #[test]
    fn test_zoom_must_be_finite() {
        assert!(matches!(
            valid_params(f64::NAN, 2.0, 2, 256),
            Err(RenderParametersError::NonFiniteZoom { .. })
        ));
        assert!(matches!(
            valid_params(f64::INFINITY, 2.0, 2, 256),
            Err(RenderParametersError::NonFiniteZoom { .. })
        ));
    }

    #[test]
    fn test_zoom_must_be_positive() {
        assert_eq!(
            valid_params(0.0, 2.0, 2, 256),
            Err(RenderParametersError::NonPositiveZoom { zoom: 0.0 })
        );
        assert_eq!(
            valid_params(-1.0, 2.0, 2, 256),
            Err(RenderParametersError::NonPositiveZoom { zoom: -1.0 })
        );
    }

    #[test]
    fn test_zoom_saturates_at_precision_ceiling() {
        let params = valid_params(1e20, 2.0, 2, 256).unwrap();

        assert_eq!(params.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_bailout_radius_must_be_positive_and_finite() {
        assert_eq!(
            valid_params(1.0, 0.0, 2, 256),
            Err(RenderParametersError::NonPositiveBailoutRadius {
                bailout_radius: 0.0
            })
        );
        assert!(matches!(
            valid_params(1.0, f64::NAN, 2, 256),
            Err(RenderParametersError::NonPositiveBailoutRadius { .. })
        ));
    }

    #[test]
    fn test_bailout_radius_is_stored_squared() {
        let params = valid_params(1.0, 256.0, 2, 256).unwrap();

        assert_eq!(params.bailout_radius_squared(), 65536.0);
    }

    #[test]
    fn test_exponent_must_be_at_least_two() {
        assert_eq!(
            valid_params(1.0, 2.0, 1, 256),
            Err(RenderParametersError::ExponentTooSmall { exponent: 1 })
        );
        assert_eq!(
            valid_params(1.0, 2.0, 0, 256),
            Err(RenderParametersError::ExponentTooSmall { exponent: 0 })
        );
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            valid_params(1.0, 2.0, 2, 0),
            Err(RenderParametersError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_default_is_classic_mandelbrot_view() {
        let params = RenderParameters::default();

        assert_eq!(params.kind(), FractalKinds::Mandelbrot);
        assert_eq!(params.variant(), FractalVariants::Standard);
        assert_eq!(params.offset().real, -0.5);
        assert_eq!(params.zoom(), 1.0);
        assert_eq!(params.bailout_radius_squared(), 65536.0);
        assert!(!params.axis_swap());
    }
}
