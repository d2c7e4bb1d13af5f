pub mod gradient;
pub mod hsv;
pub mod palette;
pub mod procedural;
pub mod theme;
pub mod theme_colour_map;
