use std::ops::{Add, Mul};

// Value type for points on the complex plane. Copy semantics keep plane
// positions from aliasing each other: assigning a position always copies.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }

    /// Raises to an integer power. Squaring stays algebraic; higher powers go
    /// through polar form, raising the modulus and multiplying the angle.
    #[must_use]
    pub fn powi(self, exponent: u32) -> Self {
        if exponent == 2 {
            return self.square();
        }

        let (modulus, angle) = self.to_polar();
        Self::from_polar(modulus.powi(exponent as i32), angle * f64::from(exponent))
    }

    /// Rotates the point around the origin by `angle` radians.
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            real: self.real * cos - self.imag * sin,
            imag: self.real * sin + self.imag * cos,
        }
    }

    #[must_use]
    pub fn to_polar(self) -> (f64, f64) {
        (
            self.magnitude_squared().sqrt(),
            self.imag.atan2(self.real),
        )
    }

    #[must_use]
    pub fn from_polar(modulus: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            real: modulus * cos,
            imag: modulus * sin,
        }
    }

    // The one mutating operation; everything else returns a new value.
    pub fn set(&mut self, real: f64, imag: f64) {
        self.real = real;
        self.imag = imag;
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_components() {
        let c = Complex {
            real: -3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: 4.0,
        };
        let result = a + b;
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, 6.0);
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a * b;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 10.0);
    }

    #[test]
    fn test_square_matches_self_multiplication() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex {
            real: 2.0,
            imag: 3.0,
        };
        let squared = c.square();

        assert_eq!(squared.real, -5.0);
        assert_eq!(squared.imag, 12.0);
        assert_eq!(squared, c * c);
    }

    #[test]
    fn test_powi_two_uses_algebraic_square() {
        let c = Complex {
            real: -0.4,
            imag: 0.6,
        };

        assert_eq!(c.powi(2), c.square());
    }

    #[test]
    fn test_powi_three_matches_repeated_multiplication() {
        let c = Complex {
            real: 0.5,
            imag: -1.25,
        };
        let expected = c * c * c;
        let result = c.powi(3);

        assert!((result.real - expected.real).abs() < 1e-12);
        assert!((result.imag - expected.imag).abs() < 1e-12);
    }

    #[test]
    fn test_polar_round_trip() {
        let c = Complex {
            real: -1.5,
            imag: 2.5,
        };
        let (modulus, angle) = c.to_polar();
        let back = Complex::from_polar(modulus, angle);

        assert!((back.real - c.real).abs() < 1e-12);
        assert!((back.imag - c.imag).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let c = Complex {
            real: 1.0,
            imag: 0.0,
        };
        let rotated = c.rotate(std::f64::consts::FRAC_PI_2);

        assert!(rotated.real.abs() < 1e-12);
        assert!((rotated.imag - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_preserves_magnitude() {
        let c = Complex {
            real: 3.0,
            imag: -4.0,
        };
        let rotated = c.rotate(1.234);

        assert!((rotated.magnitude_squared() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut c = Complex {
            real: 1.0,
            imag: 1.0,
        };
        c.set(-0.5, 0.25);

        assert_eq!(c.real, -0.5);
        assert_eq!(c.imag, 0.25);
    }

    #[test]
    fn test_assignment_copies_rather_than_aliases() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let mut b = a;
        b.set(9.0, 9.0);

        assert_eq!(a.real, 1.0);
        assert_eq!(a.imag, 2.0);
    }
}
