use crate::core::colour_mapping::hsv::hsv_to_rgb;
use crate::core::data::colour::Colour;

pub const DEFAULT_SATURATION: f64 = 0.75;
pub const DEFAULT_VALUE: f64 = 1.0;

// Fixed-band cycle for the Bands theme.
const BAND_COLOURS: [Colour; 8] = [
    Colour { r: 66, g: 30, b: 15 },
    Colour { r: 25, g: 7, b: 26 },
    Colour { r: 9, g: 1, b: 47 },
    Colour { r: 12, g: 44, b: 138 },
    Colour { r: 24, g: 82, b: 177 },
    Colour { r: 134, g: 181, b: 229 },
    Colour { r: 241, g: 233, b: 191 },
    Colour { r: 255, g: 170, b: 0 },
];

/// Colour rules computed straight from iteration data, no gradient behind
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProceduralThemeKinds {
    HueCycle,
    #[default]
    HueSmooth,
    HueSqrt,
    HueSine,
    Bands,
    Grayscale,
    TwoTone,
}

impl ProceduralThemeKinds {
    pub const ALL: &'static [Self] = &[
        Self::HueSmooth,
        Self::HueCycle,
        Self::HueSqrt,
        Self::HueSine,
        Self::Bands,
        Self::Grayscale,
        Self::TwoTone,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HueCycle => "Hue cycle",
            Self::HueSmooth => "Smooth hue",
            Self::HueSqrt => "Square-root hue",
            Self::HueSine => "Sine hue",
            Self::Bands => "Bands",
            Self::Grayscale => "Grayscale",
            Self::TwoTone => "Two-tone",
        }
    }
}

fn shift_degrees(shift_percent: f64) -> f64 {
    shift_percent * 3.6
}

/// Colour for an escaped point under a procedural theme.
///
/// `normalized` is the smooth iteration value; rules that want the raw
/// integer count use `iterations` directly. `shift_percent` rotates hues
/// (or bands) around their cycle.
#[must_use]
pub fn exterior_colour(
    kind: ProceduralThemeKinds,
    iterations: u32,
    normalized: f64,
    max_iterations: u32,
    shift_percent: f64,
) -> Colour {
    let max = f64::from(max_iterations.max(1));

    match kind {
        ProceduralThemeKinds::HueCycle => {
            let hue = 360.0 * f64::from(iterations) / max + shift_degrees(shift_percent);
            hsv_to_rgb(hue, DEFAULT_SATURATION, DEFAULT_VALUE)
        }
        ProceduralThemeKinds::HueSmooth => {
            let hue = 360.0 * normalized / max + shift_degrees(shift_percent);
            hsv_to_rgb(hue, DEFAULT_SATURATION, DEFAULT_VALUE)
        }
        ProceduralThemeKinds::HueSqrt => {
            let hue =
                360.0 * (normalized / max).max(0.0).sqrt() + shift_degrees(shift_percent);
            hsv_to_rgb(hue, DEFAULT_SATURATION, DEFAULT_VALUE)
        }
        ProceduralThemeKinds::HueSine => {
            let phase = normalized / max * std::f64::consts::TAU;
            let hue = (phase.sin() * 0.5 + 0.5) * 360.0 + shift_degrees(shift_percent);
            hsv_to_rgb(hue, DEFAULT_SATURATION, DEFAULT_VALUE)
        }
        ProceduralThemeKinds::Bands => {
            let offset = (shift_percent * BAND_COLOURS.len() as f64 / 100.0).ceil() as usize;
            BAND_COLOURS[(iterations as usize + offset) % BAND_COLOURS.len()]
        }
        ProceduralThemeKinds::Grayscale => {
            let level = (255.0 * f64::from(iterations) / max).clamp(0.0, 255.0) as u8;
            Colour {
                r: level,
                g: level,
                b: level,
            }
        }
        ProceduralThemeKinds::TwoTone => hsv_to_rgb(
            shift_degrees(shift_percent),
            DEFAULT_SATURATION,
            DEFAULT_VALUE,
        ),
    }
}

/// Colour for a point that never escaped. Solid black for every theme
/// except two-tone, which paints the set interior in the hue opposite the
/// exterior tone.
#[must_use]
pub fn interior_colour(kind: ProceduralThemeKinds, shift_percent: f64) -> Colour {
    match kind {
        ProceduralThemeKinds::TwoTone => hsv_to_rgb(
            shift_degrees(shift_percent) + 180.0,
            DEFAULT_SATURATION,
            DEFAULT_VALUE,
        ),
        _ => Colour::BLACK,
    }
}
