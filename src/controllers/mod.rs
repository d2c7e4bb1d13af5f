pub mod data;
pub mod errors;
pub mod events;
pub mod frame;
pub mod interactive;
pub mod mandelbrot;
pub mod ports;
