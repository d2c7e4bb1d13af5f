#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

/// Structural modification applied to z before each update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalVariants {
    #[default]
    Standard,
    BurningShip,
    Tricorn,
}

impl FractalVariants {
    pub const ALL: &'static [Self] = &[Self::Standard, Self::BurningShip, Self::Tricorn];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_have_default_first() {
        assert_eq!(FractalKinds::ALL.first(), Some(&FractalKinds::default()));
        assert_eq!(
            FractalVariants::ALL.first(),
            Some(&FractalVariants::default())
        );
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = FractalVariants::ALL
            .iter()
            .map(|v| v.display_name())
            .collect();

        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
