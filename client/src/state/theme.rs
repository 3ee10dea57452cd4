//! Theme preference and effective-theme values.
//!
//! DESIGN
//! ======
//! `ThemePreference` is what the user chose; `EffectiveTheme` is what gets
//! rendered after resolving `System` against the OS color-scheme signal.
//! Both are plain `Copy` values so they can live in reactive context and be
//! compared cheaply on every signal read.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// User-selected display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system's light/dark setting.
    #[default]
    System,
}

impl ThemePreference {
    /// Storage representation of this preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored preference. Matching is exact; anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Next preference in the toggle cycle `Light -> Dark -> System -> Light`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Resolve against the OS signal.
    #[must_use]
    pub fn resolve(self, os_prefers_dark: bool) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::System => EffectiveTheme::from_prefers_dark(os_prefers_dark),
        }
    }
}

/// Theme actually applied to the render target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Marker class placed on the root element for this theme.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Every marker the render target may carry.
    pub const MARKERS: [&'static str; 2] = ["light", "dark"];
}

/// Snapshot of theme state published to UI components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub effective: EffectiveTheme,
}
