use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourHexError {
    WrongLength { value_len: usize },
    MissingHashPrefix,
    InvalidHexDigit { component: String },
}

impl fmt::Display for ColourHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { value_len } => {
                write!(f, "hex colour must be 7 characters, got {}", value_len)
            }
            Self::MissingHashPrefix => {
                write!(f, "hex colour must start with '#'")
            }
            Self::InvalidHexDigit { component } => {
                write!(f, "invalid hex digits in colour component: {}", component)
            }
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Linear blend towards `other`; `t` is clamped to [0, 1].
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Formats as `#rrggbb`, the exchange format for colour-picker widgets.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_hex(value: &str) -> Result<Self, ColourHexError> {
        if value.len() != 7 {
            return Err(ColourHexError::WrongLength {
                value_len: value.len(),
            });
        }

        if !value.starts_with('#') {
            return Err(ColourHexError::MissingHashPrefix);
        }

        // get() also rejects multi-byte characters that land mid-component.
        let component = |range: std::ops::Range<usize>| -> Result<u8, ColourHexError> {
            let digits = value.get(range).ok_or_else(|| ColourHexError::InvalidHexDigit {
                component: value.to_string(),
            })?;

            u8::from_str_radix(digits, 16).map_err(|_| ColourHexError::InvalidHexDigit {
                component: digits.to_string(),
            })
        };

        Ok(Self {
            r: component(1..3)?,
            g: component(3..5)?,
            b: component(5..7)?,
        })
    }
}

impl Error for ColourHexError {}
