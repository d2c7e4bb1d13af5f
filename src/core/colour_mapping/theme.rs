use crate::core::colour_mapping::gradient::{Gradient, GradientError, GradientInterpolation};
use crate::core::colour_mapping::palette::Palette;
use crate::core::colour_mapping::procedural::ProceduralThemeKinds;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

const BUILTIN_GRADIENT_LEVELS: usize = 256;

/// How a theme turns escape data into colour: computed directly, or looked
/// up in a gradient it owns by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRule {
    Procedural(ProceduralThemeKinds),
    GradientIndexed(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeEntry {
    name: String,
    rule: ThemeRule,
}

impl ThemeEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rule(&self) -> ThemeRule {
        self.rule
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRegistryError {
    UnknownTheme { theme_id: usize, theme_count: usize },
    MissingGradient { theme_id: usize, gradient_id: usize },
}

impl fmt::Display for ThemeRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme {
                theme_id,
                theme_count,
            } => {
                write!(
                    f,
                    "theme id {} out of range, registry holds {} themes",
                    theme_id, theme_count
                )
            }
            Self::MissingGradient {
                theme_id,
                gradient_id,
            } => {
                write!(
                    f,
                    "theme {} points at gradient {} which does not exist",
                    theme_id, gradient_id
                )
            }
        }
    }
}

impl Error for ThemeRegistryError {}

/// A theme's rendering rule with its gradient already snapshotted, ready to
/// colour one frame without touching the registry again.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTheme {
    Procedural { name: String, kind: ProceduralThemeKinds },
    Gradient { name: String, gradient: Arc<Gradient> },
}

impl ResolvedTheme {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Procedural { name, .. } | Self::Gradient { name, .. } => name,
        }
    }
}

/// Session-scoped collection of colour themes. Seeded with the procedural
/// rules and the built-in gradient palettes; user-painted gradients append
/// new entries. Entries are never mutated or removed, so a theme id stays
/// valid for the whole session.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: Vec<ThemeEntry>,
    gradients: Vec<Arc<Gradient>>,
}

impl ThemeRegistry {
    /// Registry with the procedural themes and built-in gradient palettes.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();

        for &kind in ProceduralThemeKinds::ALL {
            registry.themes.push(ThemeEntry {
                name: kind.display_name().to_string(),
                rule: ThemeRule::Procedural(kind),
            });
        }

        for (name, palette) in [
            ("Fire", Palette::fire()),
            ("Ocean", Palette::ocean()),
            ("Violet", Palette::violet()),
            ("Rainbow", Palette::rainbow()),
        ] {
            // Built-in palettes are small and the level count fixed, so
            // this cannot fail.
            let _ = registry.register_gradient(
                name,
                &palette,
                BUILTIN_GRADIENT_LEVELS,
                GradientInterpolation::Linear,
            );
        }

        registry
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            themes: Vec::new(),
            gradients: Vec::new(),
        }
    }

    /// Builds a gradient from `palette` and appends it with a new theme
    /// entry. Returns the theme id; earlier ids are untouched.
    pub fn register_gradient(
        &mut self,
        name: impl Into<String>,
        palette: &Palette,
        levels: usize,
        interpolation: GradientInterpolation,
    ) -> Result<usize, GradientError> {
        let gradient = Gradient::build(palette, levels, interpolation)?;

        let gradient_id = self.gradients.len();
        self.gradients.push(Arc::new(gradient));

        let theme_id = self.themes.len();
        self.themes.push(ThemeEntry {
            name: name.into(),
            rule: ThemeRule::GradientIndexed(gradient_id),
        });

        Ok(theme_id)
    }

    #[must_use]
    pub fn theme(&self, theme_id: usize) -> Option<&ThemeEntry> {
        self.themes.get(theme_id)
    }

    #[must_use]
    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|entry| entry.name()).collect()
    }

    /// Looks a theme up and snapshots its gradient so a frame can render
    /// while later registrations happen concurrently.
    pub fn resolve(&self, theme_id: usize) -> Result<ResolvedTheme, ThemeRegistryError> {
        let entry = self
            .themes
            .get(theme_id)
            .ok_or(ThemeRegistryError::UnknownTheme {
                theme_id,
                theme_count: self.themes.len(),
            })?;

        match entry.rule {
            ThemeRule::Procedural(kind) => Ok(ResolvedTheme::Procedural {
                name: entry.name.clone(),
                kind,
            }),
            ThemeRule::GradientIndexed(gradient_id) => {
                let gradient = self.gradients.get(gradient_id).ok_or(
                    ThemeRegistryError::MissingGradient {
                        theme_id,
                        gradient_id,
                    },
                )?;

                Ok(ResolvedTheme::Gradient {
                    name: entry.name.clone(),
                    gradient: Arc::clone(gradient),
                })
            }
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
