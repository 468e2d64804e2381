//! UI Configuration
//!
//! Display strings and log level, with defaults for everything.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid todo-config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

const CONFIG_META_SELECTOR: &str = "meta[name=todo-config]";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page heading
    pub heading: String,
    /// Placeholder for the new-item input
    pub placeholder: String,
    /// Console log level ("error", "warn", "info", "debug", "trace", "off")
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            heading: "My TODO List".to_string(),
            placeholder: "...".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse overrides; absent fields keep their defaults
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read overrides from `<meta name="todo-config" content="{...}">`.
    ///
    /// A missing tag or document yields the defaults.
    pub fn from_document() -> Result<Self, ConfigError> {
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(CONFIG_META_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        match content {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Parsed log level, falling back to `Info` on unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_json(r#"{"heading":"Groceries"}"#).unwrap();
        assert_eq!(config.heading, "Groceries");
        assert_eq!(config.placeholder, UiConfig::default().placeholder);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = UiConfig::from_json(r#"{"heading": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid todo-config JSON"));
    }

    #[test]
    fn test_level_filter() {
        let config = UiConfig { log_level: "DEBUG".to_string(), ..UiConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        let config = UiConfig { log_level: "loud".to_string(), ..UiConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
