pub mod auto_iterations;
pub mod escape;
pub mod escape_algorithm;
pub mod fractal_kinds;
pub mod normalize;
