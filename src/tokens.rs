//! Styling-token configuration.
//!
//! Declarative data consumed by an external styling layer: semantic token
//! names mapped to theme-variable references, plus the file globs that layer
//! scans for utility-class usage. Nothing in this crate interprets these
//! values; the contract is that the styling layer resolves each `var(--…)`
//! reference according to the document attribute set by
//! [`ThemeController::apply`](crate::ThemeController::apply).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Background color tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTokens {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

/// Text color tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTokens {
    pub primary: String,
    pub secondary: String,
}

/// Semantic color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub bg: BackgroundTokens,
    pub text: TextTokens,
    pub border: String,
    pub card: String,
    pub input: String,
}

/// Box-shadow tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub light: String,
    pub medium: String,
    pub heavy: String,
}

/// The full styling-token configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// File globs the styling layer scans for utility-class usage.
    pub content: Vec<String>,
    pub colors: ColorTokens,
    pub shadows: ShadowTokens,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            content: vec![
                "./templates/**/*.{html,js}".to_string(),
                "./static/**/*.{css,js}".to_string(),
                "./src/**/*.{js,jsx,ts,tsx}".to_string(),
                "./*.html".to_string(),
            ],
            colors: ColorTokens {
                primary: "var(--text-accent)".to_string(),
                bg: BackgroundTokens {
                    primary: "var(--bg-primary)".to_string(),
                    secondary: "var(--bg-secondary)".to_string(),
                    tertiary: "var(--bg-tertiary)".to_string(),
                },
                text: TextTokens {
                    primary: "var(--text-primary)".to_string(),
                    secondary: "var(--text-secondary)".to_string(),
                },
                border: "var(--border-color)".to_string(),
                card: "var(--card-bg)".to_string(),
                input: "var(--input-bg)".to_string(),
            },
            shadows: ShadowTokens {
                light: "0 4px 8px var(--shadow-light)".to_string(),
                medium: "0 4px 15px var(--shadow-medium)".to_string(),
                heavy: "0 6px 20px var(--shadow-heavy)".to_string(),
            },
        }
    }
}

/// Shared default configuration.
pub static DEFAULT_TOKENS: Lazy<TokenConfig> = Lazy::new(TokenConfig::default);

impl TokenConfig {
    /// Serializes the configuration as a pretty-printed JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_semantic_tokens_to_variables() {
        let config = TokenConfig::default();
        assert_eq!(config.colors.primary, "var(--text-accent)");
        assert_eq!(config.colors.bg.tertiary, "var(--bg-tertiary)");
        assert_eq!(config.colors.text.secondary, "var(--text-secondary)");
        assert_eq!(config.colors.border, "var(--border-color)");
        assert_eq!(config.shadows.heavy, "0 6px 20px var(--shadow-heavy)");
    }

    #[test]
    fn test_default_content_globs() {
        let config = TokenConfig::default();
        assert_eq!(config.content.len(), 4);
        assert!(config.content.iter().any(|g| g.contains("templates")));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TokenConfig::default();
        let text = config.to_json().unwrap();
        assert_eq!(TokenConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_shared_default_matches_fresh_default() {
        assert_eq!(*DEFAULT_TOKENS, TokenConfig::default());
    }
}
