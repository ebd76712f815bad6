use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::Locale;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// General settings: message language and watch interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

/// Cadence and rating thresholds, as operators write them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_review_cadence")]
    pub review_cadence_days: i64,
    #[serde(default = "default_review_stale")]
    pub review_stale_days: i64,
    #[serde(default = "default_news_cadence")]
    pub news_cadence_days: i64,
    #[serde(default = "default_photo_cadence")]
    pub photo_cadence_days: i64,
    #[serde(default = "default_low_rating_warn")]
    pub low_rating_warn: f64,
    #[serde(default = "default_low_rating_urgent")]
    pub low_rating_urgent: f64,
}

/// Location of the snapshot database (tilde-expanded at point of use).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

// --- Defaults ---

const fn default_interval() -> u64 {
    3600
}

const fn default_review_cadence() -> i64 {
    7
}

const fn default_review_stale() -> i64 {
    14
}

const fn default_news_cadence() -> i64 {
    14
}

const fn default_photo_cadence() -> i64 {
    14
}

const fn default_low_rating_warn() -> f64 {
    4.0
}

const fn default_low_rating_urgent() -> f64 {
    3.5
}

fn default_database_path() -> String {
    "~/.local/share/listing-health/snapshots.db".into()
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            interval_secs: default_interval(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            review_cadence_days: default_review_cadence(),
            review_stale_days: default_review_stale(),
            news_cadence_days: default_news_cadence(),
            photo_cadence_days: default_photo_cadence(),
            low_rating_warn: default_low_rating_warn(),
            low_rating_urgent: default_low_rating_urgent(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("listing-health").join("config.toml"))
    }
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        // Cadences of at least one day; the stale boundary never precedes the cadence
        let review_cadence_days = config.review_cadence_days.max(1);
        let review_stale_days = config.review_stale_days.max(review_cadence_days);

        // Ratings live on a 0-5 scale; urgent must not sit above warn
        let low_rating_warn = config.low_rating_warn.clamp(0.0, 5.0);
        let low_rating_urgent = config.low_rating_urgent.clamp(0.0, 5.0).min(low_rating_warn);

        Self {
            review_cadence_days,
            review_stale_days,
            news_cadence_days: config.news_cadence_days.max(1),
            photo_cadence_days: config.photo_cadence_days.max(1),
            low_rating_warn,
            low_rating_urgent,
        }
    }
}
