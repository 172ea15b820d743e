use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Document attribute carrying the colour scheme.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ThemeError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Attribute name/value pair to set on the document root.
    pub fn document_attribute(&self) -> (&'static str, &'static str) {
        (THEME_ATTRIBUTE, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
