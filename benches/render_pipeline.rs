use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fractal_painter::{
    render_frame, CanvasSize, Complex, FractalKinds, FractalVariants, RenderParameters,
    RenderRequest, ThemeRegistry,
};

fn classic_view(max_iterations: u32) -> RenderParameters {
    RenderParameters::new(
        FractalKinds::Mandelbrot,
        FractalVariants::Standard,
        2,
        Complex {
            real: -0.5,
            imag: 0.0,
        },
        Complex::ZERO,
        0.75,
        256.0,
        max_iterations,
        false,
    )
    .unwrap()
}

fn bench_render_pipeline(c: &mut Criterion) {
    let registry = ThemeRegistry::with_builtins();
    let canvas = CanvasSize::new(320, 240).unwrap();

    c.bench_function("render_320x240_gradient_theme", |b| {
        // Theme 7 is the first built-in gradient after the procedural set.
        let request = RenderRequest::new(canvas, classic_view(256), 7);
        b.iter(|| render_frame(black_box(&request), &registry).unwrap());
    });

    c.bench_function("render_320x240_smooth_hue_theme", |b| {
        let request = RenderRequest::new(canvas, classic_view(256), 0);
        b.iter(|| render_frame(black_box(&request), &registry).unwrap());
    });
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
