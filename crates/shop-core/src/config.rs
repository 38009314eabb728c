//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shop_commerce::Currency;
use shop_observability::{LogFormat, LogLevel};

use crate::{CoreError, StoreContent};

/// The configuration compiled into every binary, comments included.
pub const BUNDLED_CONFIG: &str = include_str!("../store.toml");

/// Storefront configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity and catalog settings.
    #[serde(default)]
    pub store: StoreSection,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Page texts.
    #[serde(default)]
    pub content: StoreContent,
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Brand shown in the header and footer.
    pub name: String,
    /// Document title.
    pub title: String,
    /// Footer blurb.
    pub description: String,
    /// Currency of every price.
    pub currency: Currency,
    /// Number of products in the home page's featured block.
    pub featured_count: usize,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "ONLINE STORE".to_string(),
            title: "Online Store".to_string(),
            description: "Минималистичная одежда и аксессуары для современных людей".to_string(),
            currency: Currency::RUB,
            featured_count: 3,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Result of [`StoreConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// No errors (warnings allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn errors into a [`CoreError::Invalid`].
    pub fn into_result(self) -> Result<Vec<String>, CoreError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(CoreError::Invalid(self.errors))
        }
    }
}

impl StoreConfig {
    /// Parse the compiled-in `store.toml`.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_toml_str(BUNDLED_CONFIG)
    }

    /// The compiled-in config, or built-in defaults if it does not parse.
    pub fn bundled_or_default() -> Self {
        Self::bundled().unwrap_or_default()
    }

    /// Parse TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON.
    pub fn from_json_str(content: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Save config to a file, picking the format by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_toml_string()?
        };

        std::fs::write(path, content).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the config for problems.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.store.name.trim().is_empty() {
            report.errors.push("store.name is empty".to_string());
        }
        if self.store.featured_count == 0 {
            report
                .errors
                .push("store.featured_count must be at least 1".to_string());
        }

        if self.store.title.trim().is_empty() {
            report.warnings.push("store.title is empty".to_string());
        }
        if self.content.delivery.is_empty() {
            report
                .warnings
                .push("content.delivery has no sections; the delivery page will be blank".to_string());
        }
        if self.content.contacts.is_empty() {
            report
                .warnings
                .push("content.contacts has no cards; the contacts page will be blank".to_string());
        }
        for (i, section) in self.content.delivery.iter().enumerate() {
            if section.lines.is_empty() {
                report
                    .warnings
                    .push(format!("content.delivery[{}] ({}) has no lines", i, section.title));
            }
        }

        report
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_parses() {
        let config = StoreConfig::bundled().unwrap();
        assert_eq!(config.store.name, "ONLINE STORE");
        assert_eq!(config.store.currency, Currency::RUB);
        assert_eq!(config.store.featured_count, 3);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.content, StoreContent::builtin());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_partial_sections() {
        let config = StoreConfig::from_toml_str(
            r#"
            [store]
            name = "SHOP"
            currency = "USD"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.name, "SHOP");
        assert_eq!(config.store.currency, Currency::USD);
        assert_eq!(config.store.featured_count, 3);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_json_config() {
        let config = StoreConfig::from_json_str(r#"{"store": {"featured_count": 2}}"#).unwrap();
        assert_eq!(config.store.featured_count, 2);
        assert_eq!(config.store.title, "Online Store");
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = StoreConfig::from_toml_str("[store\nname = 1").unwrap_err();
        assert!(matches!(err, CoreError::Toml(_)));
    }

    #[test]
    fn test_validate_errors_and_warnings() {
        let mut config = StoreConfig::default();
        config.store.name = "  ".to_string();
        config.store.featured_count = 0;
        config.content.contacts.clear();

        let report = config.validate();
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.warnings.len(), 1);

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("featured_count"));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("shop-core-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("store.toml");

        let mut config = StoreConfig::default();
        config.store.name = "SAVED".to_string();
        config.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
