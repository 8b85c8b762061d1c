//! TOML configuration with figment layering.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::options::{OptionCatalog, SettingsKey, SettingsRecord};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(std::io::Error),
    /// Layered configuration could not be extracted
    Parse(figment::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// A default refers to a value outside the key's option set
    UnknownOption { key: SettingsKey, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Config parse error: {}", e),
            Self::Serialize(e) => write!(f, "Config serialize error: {}", e),
            Self::UnknownOption { key, value } => {
                write!(f, "Unknown {} option: {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Parse(e)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Article source
    pub article: ArticleConfig,
    /// Default settings, selected by option value
    pub defaults: DefaultSelection,
}

/// Article source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleConfig {
    /// Plain-text article file (built-in sample when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Per-key default option values. Unset keys keep the catalog default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_width: Option<String>,
}

impl DefaultSelection {
    /// Selection naming every value of `record`.
    pub fn from_record(record: &SettingsRecord) -> Self {
        let value = |key| Some(record.get(key).value.clone());
        Self {
            font_family: value(SettingsKey::FontFamily),
            font_size: value(SettingsKey::FontSize),
            font_color: value(SettingsKey::FontColor),
            background_color: value(SettingsKey::BackgroundColor),
            content_width: value(SettingsKey::ContentWidth),
        }
    }

    pub fn get(&self, key: SettingsKey) -> Option<&str> {
        match key {
            SettingsKey::FontFamily => self.font_family.as_deref(),
            SettingsKey::FontSize => self.font_size.as_deref(),
            SettingsKey::FontColor => self.font_color.as_deref(),
            SettingsKey::BackgroundColor => self.background_color.as_deref(),
            SettingsKey::ContentWidth => self.content_width.as_deref(),
        }
    }
}

impl ReaderConfig {
    /// Layer built-in defaults, an optional TOML file and CLI overrides.
    ///
    /// Overrides only replace fields they actually set.
    pub fn load(path: Option<&Path>, overrides: &ReaderConfig) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(ReaderConfig::default()));

        if let Some(path) = path {
            // Read eagerly so a missing file is an error rather than an empty layer.
            let content = std::fs::read_to_string(path)?;
            figment = figment.merge(Toml::string(&content));
        }

        let config: Self = figment
            .merge(Serialized::defaults(overrides))
            .extract()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string without other layers.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(ReaderConfig::default()))
            .merge(Toml::string(content))
            .extract()?;
        Ok(config)
    }

    /// Serialize to a TOML document loadable with `--config`.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the default record, checking each selected value against the
    /// catalog.
    pub fn resolve_defaults(&self, catalog: &OptionCatalog) -> Result<SettingsRecord, ConfigError> {
        let mut record = catalog.defaults.clone();
        for key in SettingsKey::ALL {
            let Some(value) = self.defaults.get(key) else {
                continue;
            };
            let option = catalog
                .find(key, value)
                .ok_or_else(|| ConfigError::UnknownOption {
                    key,
                    value: value.to_string(),
                })?;
            record = record.with_field(key, option.clone());
        }
        Ok(record)
    }
}
