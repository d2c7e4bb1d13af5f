pub mod cancellation;
pub mod generate_escape_grid;
pub mod generate_pixel_buffer;
