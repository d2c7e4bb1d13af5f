use crate::core::fractals::escape::EscapeResult;

/// Continuous iteration count for smooth colour gradation.
///
/// Stretches the integer escape count by how far past the bailout radius
/// the orbit landed, so neighbouring pixels shade continuously instead of
/// banding at integer boundaries. Only meaningful for escaped points;
/// callers handle the bound set (`iterations == max_iterations`) before
/// calling, conventionally painting it a fixed interior colour.
pub fn normalized_iterations(
    result: EscapeResult,
    bailout_radius_squared: f64,
    exponent: u32,
) -> f64 {
    // ln|z| at bailout, via the squared magnitude the iterator already has.
    let lzn = result.magnitude_squared.ln();
    let ln_radius = 0.5 * bailout_radius_squared.ln();
    let nu = (lzn / ln_radius).ln() / f64::from(exponent).ln();

    f64::from(result.iterations) + 1.0 - nu
}
