pub mod generate_escape_grid;
pub mod generate_escape_grid_rayon;
pub mod ports;
