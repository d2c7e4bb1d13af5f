use crate::core::colour_mapping::palette::Palette;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const MIN_GRADIENT_LEVELS: usize = 16;
pub const MAX_GRADIENT_LEVELS: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientInterpolation {
    None,
    #[default]
    Linear,
}

impl GradientInterpolation {
    pub const ALL: &'static [Self] = &[Self::Linear, Self::None];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "Stepped",
            Self::Linear => "Linear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientError {
    LevelsOutOfRange { levels: usize },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelsOutOfRange { levels } => {
                write!(
                    f,
                    "gradient levels must be between {} and {}, got {}",
                    MIN_GRADIENT_LEVELS, MAX_GRADIENT_LEVELS, levels
                )
            }
        }
    }
}

impl Error for GradientError {}

/// Densely sampled colour sequence expanded from a palette. Immutable once
/// built; looked up cyclically, so any real value indexes somewhere valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colours: Vec<Colour>,
}

impl Gradient {
    /// Expands `palette` to exactly `levels` entries by walking the key
    /// colours cyclically, holding each key flat over its span (`None`) or
    /// blending into the next key across it (`Linear`). A palette that
    /// already has at least `levels` entries is taken as-is; nothing is
    /// ever down-sampled away.
    pub fn build(
        palette: &Palette,
        levels: usize,
        interpolation: GradientInterpolation,
    ) -> Result<Self, GradientError> {
        if !(MIN_GRADIENT_LEVELS..=MAX_GRADIENT_LEVELS).contains(&levels) {
            return Err(GradientError::LevelsOutOfRange { levels });
        }

        let keys = palette.colours();

        if keys.len() >= levels {
            return Ok(Self {
                colours: keys.to_vec(),
            });
        }

        let mut colours = Vec::with_capacity(levels);

        for i in 0..levels {
            let position = i as f64 * keys.len() as f64 / levels as f64;
            let key_index = position.floor() as usize;
            let key = keys[key_index];

            let colour = match interpolation {
                GradientInterpolation::None => key,
                GradientInterpolation::Linear => {
                    // The last span wraps back to the first key.
                    let next = keys[(key_index + 1) % keys.len()];
                    key.lerp(next, position - position.floor())
                }
            };

            colours.push(colour);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Colour for a normalized iteration value.
    ///
    /// The shift rotates the gradient by a percentage of its length; the
    /// integer part of `normalized` picks the entry cyclically, and with
    /// `interpolate` the fractional part blends into the next entry.
    ///
    /// A non-finite input cannot pick an entry; rather than poisoning the
    /// frame the lookup falls back to white and leaves a diagnostic in the
    /// log.
    #[must_use]
    pub fn colour_at(&self, normalized: f64, shift_percent: f64, interpolate: bool) -> Colour {
        if !normalized.is_finite() || !shift_percent.is_finite() {
            log::warn!(
                "gradient lookup fell back to sentinel: normalized={}, shift={}",
                normalized,
                shift_percent
            );
            return Colour::WHITE;
        }

        let len = self.colours.len() as i64;
        let shift_offset = (shift_percent * self.colours.len() as f64 / 100.0).ceil() as i64;
        let index = (normalized.floor() as i64 + shift_offset).rem_euclid(len) as usize;

        if interpolate {
            let next = (index + 1) % self.colours.len();
            self.colours[index].lerp(self.colours[next], normalized - normalized.floor())
        } else {
            self.colours[index]
        }
    }
}
