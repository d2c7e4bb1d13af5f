use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_escape_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Error type for cancelable grid generation.
///
/// Distinguishes cancellation from per-pixel failures so callers can treat
/// a superseded frame as expected control flow.
#[derive(Debug, PartialEq)]
pub enum GenerateEscapeGridError<F: Error> {
    Cancelled(Cancelled),
    Algorithm(F),
}

impl<F: Error> fmt::Display for GenerateEscapeGridError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
        }
    }
}

impl<F: Error + 'static> Error for GenerateEscapeGridError<F> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Algorithm(err) => Some(err),
        }
    }
}

/// Parallel grid generation on rayon's work-stealing pool.
///
/// Rows are the parallel unit; every pixel is independent, so the split
/// needs no synchronization and the collected rows concatenate back into
/// row-major order.
pub fn generate_escape_grid_rayon<Alg>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_escape_grid_rayon_cancelable(canvas, algorithm, &NeverCancel).map_err(|e| match e {
        GenerateEscapeGridError::Algorithm(err) => err,
        GenerateEscapeGridError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_escape_grid_rayon`], but checks the cancellation token
/// once per row and abandons the remaining work when it trips.
pub fn generate_escape_grid_rayon_cancelable<Alg, C>(
    canvas: CanvasSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateEscapeGridError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let rows: Vec<Vec<Alg::Success>> = (0..canvas.height() as i32)
        .into_par_iter()
        .map(|y| {
            if cancel.is_cancelled() {
                return Err(GenerateEscapeGridError::Cancelled(Cancelled));
            }

            (0..canvas.width() as i32)
                .map(|x| {
                    algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateEscapeGridError::Algorithm)
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
