//! The two-valued theme type.

use serde::{Deserialize, Serialize};

/// A named visual variant of the interface.
///
/// The persisted form and the document-attribute form are both the
/// lowercase literals `"light"` and `"dark"`.
///
/// # Example
///
/// ```rust
/// use duotone::Theme;
///
/// assert_eq!(Theme::Light.inverse(), Theme::Dark);
/// assert_eq!(Theme::Dark.as_str(), "dark");
/// assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    ///
    /// Applying `inverse` twice returns the starting value.
    pub fn inverse(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The literal written to the document attribute and the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    /// Light is the fallback when neither a stored preference nor an
    /// ambient signal is available.
    fn default() -> Self {
        Theme::Light
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a theme from a string that is neither
/// `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError {
    value: String,
}

impl std::fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid theme '{}': expected 'light' or 'dark'", self.value)
    }
}

impl std::error::Error for ThemeParseError {}

impl std::str::FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_symmetric() {
        assert_eq!(Theme::Light.inverse(), Theme::Dark);
        assert_eq!(Theme::Dark.inverse(), Theme::Light);
    }

    #[test]
    fn test_inverse_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.inverse().inverse(), theme);
        }
    }

    #[test]
    fn test_as_str_literals() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
