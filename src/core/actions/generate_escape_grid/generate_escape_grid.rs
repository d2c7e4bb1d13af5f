use crate::core::actions::generate_escape_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::Point;

/// Runs the algorithm over every canvas pixel in row-major order on the
/// calling thread. Results line up with pixel offsets: index `y·width + x`.
pub fn generate_escape_grid<Alg>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm,
{
    let mut results = Vec::with_capacity(canvas.pixel_count() as usize);

    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.y * 100 + pixel.x) as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_generates_row_major_results() {
        let canvas = CanvasSize::new(3, 2).unwrap();
        let results = generate_escape_grid(canvas, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results, vec![0, 1, 2, 100, 101, 102]);
    }

    #[test]
    fn test_result_count_matches_pixel_count() {
        let canvas = CanvasSize::new(7, 5).unwrap();
        let results = generate_escape_grid(canvas, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results.len(), 35);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let canvas = CanvasSize::new(3, 3).unwrap();
        let result = generate_escape_grid(canvas, &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }
}
