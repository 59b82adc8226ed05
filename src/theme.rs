//! The two supported visual modes and their fixed string/color forms.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual mode of the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Canonical string form, as persisted and as written to the
    /// document's `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// `<meta name="theme-color">` content, matching the page background
    /// so mobile browser chrome blends in.
    #[must_use]
    pub const fn meta_color(self) -> &'static str {
        match self {
            Self::Light => "#f8fafc",
            Self::Dark => "#1a1a1d",
        }
    }

    /// Theme corresponding to a `prefers-color-scheme: dark` query result.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known theme.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
