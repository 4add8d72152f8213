//! Navigator configuration.
//!
//! Every field has a default, so hosts can ship a partial YAML or JSON file:
//!
//! ```yaml
//! languages: [dart]
//! preferred_child_names: [child, children, body]
//! include_argument_names: true
//! ranking: exact
//! ```

use crate::geometry::SizeRanking;
use outline_nav_lang::{ArgumentSyntax, builtin_profile};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading a [`NavigatorConfig`].
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    /// JSON parsing failed.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Reading the config file failed.
    Io(#[from] std::io::Error),

    #[error("unsupported config format: {0}")]
    /// The file extension is neither YAML nor JSON.
    UnsupportedFormat(String),
}

/// Tunables for the navigation commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Language ids the commands are enabled for.
    pub languages: Vec<String>,
    /// Child names preferred by navigate-to-child, in priority order.
    pub preferred_child_names: Vec<String>,
    /// Select `name: value` instead of just the value when cycling through named arguments.
    pub include_argument_names: bool,
    /// How "innermost" candidates are ranked.
    pub ranking: SizeRanking,
    /// Ask the editor to reveal the new selection.
    pub reveal: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            languages: vec!["dart".to_string()],
            preferred_child_names: vec!["child".to_string(), "children".to_string()],
            include_argument_names: false,
            ranking: SizeRanking::Exact,
            reveal: true,
        }
    }
}

impl NavigatorConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Returns `true` if the commands should run for `language_id`.
    pub fn supports_language(&self, language_id: &str) -> bool {
        self.languages.iter().any(|lang| lang == language_id)
    }

    /// Argument-list syntax for `language_id` (Dart syntax for unknown languages).
    pub fn argument_syntax(language_id: &str) -> ArgumentSyntax {
        builtin_profile(language_id)
            .map(|profile| profile.arguments)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = NavigatorConfig::from_yaml_str("include_argument_names: true\n").unwrap();
        assert!(config.include_argument_names);
        assert_eq!(config.languages, vec!["dart".to_string()]);
        assert_eq!(config.ranking, SizeRanking::Exact);
        assert!(config.reveal);
    }

    #[test]
    fn test_json_config() {
        let config = NavigatorConfig::from_json_str(
            r#"{ "languages": ["dart", "flutter"], "ranking": "approximate", "reveal": false }"#,
        )
        .unwrap();
        assert!(config.supports_language("flutter"));
        assert!(!config.supports_language("rust"));
        assert_eq!(config.ranking, SizeRanking::Approximate);
        assert!(!config.reveal);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = NavigatorConfig::from_yaml_str("ranking: sideways").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        let err = NavigatorConfig::from_json_str("{").unwrap_err();
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_unknown_language_uses_default_syntax() {
        assert_eq!(NavigatorConfig::argument_syntax("kotlin"), ArgumentSyntax::dart());
    }
}
