fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_painter::mandelbrot_controller()
}
