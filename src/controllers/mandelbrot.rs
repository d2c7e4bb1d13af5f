use crate::controllers::data::render_request::RenderRequest;
use crate::controllers::frame::{render_frame, RenderStatus};
use crate::core::colour_mapping::theme::ThemeRegistry;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::render_params::RenderParameters;
use crate::core::fractals::auto_iterations::auto_iterations;
use crate::core::fractals::fractal_kinds::{FractalKinds, FractalVariants};
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

/// Renders one classic Mandelbrot frame with the default theme set and
/// writes it next to a printed status summary.
pub fn mandelbrot_controller() -> Result<(), Box<dyn std::error::Error>> {
    let width = 800;
    let height = 600;
    let zoom = 0.75;
    let filepath = "output/mandelbrot.ppm";

    let params = RenderParameters::new(
        FractalKinds::Mandelbrot,
        FractalVariants::Standard,
        2,
        Complex {
            real: -0.5,
            imag: 0.0,
        },
        Complex::ZERO,
        zoom,
        256.0,
        auto_iterations(zoom, FractalKinds::Mandelbrot),
        false,
    )?;

    let canvas = CanvasSize::new(width, height)?;
    let registry = ThemeRegistry::with_builtins();
    let request = RenderRequest::new(canvas, params, 0);

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", width, height);

    let frame = render_frame(&request, &registry)?;

    let theme_name = registry
        .theme(request.theme_id)
        .map(|entry| entry.name().to_string())
        .unwrap_or_default();
    let status = RenderStatus::new(&request, &theme_name, frame.render_duration);

    for (key, value) in status.entries() {
        println!("{:<12}{}", key, value);
    }

    if let Some(parent) = Path::new(filepath).parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_ppm(&frame.pixel_buffer, filepath)?;
    println!("Saved to {}", filepath);

    Ok(())
}
