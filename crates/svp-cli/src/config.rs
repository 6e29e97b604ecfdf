//! CLI configuration.
//!
//! Read from a YAML or JSON file named by `--config` (or `SVP_CONFIG`). A
//! path that does not exist yields the defaults. Environment overrides are
//! applied on top of whatever the file set:
//!
//! - `SVP_PRETTY` (`true`/`false`/`1`/`0`)
//! - `SVP_DEFAULT_CURRENCY` (ISO 4217 code, e.g. `USD`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use svp_schema::{ArticleInput, ProductInput, PublisherInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Indent JSON output. Default: `true`.
    pub pretty: bool,
    /// Publisher used for Article inputs that have none.
    pub default_publisher: Option<PublisherInput>,
    /// Currency used for Product inputs with a price but no currency.
    pub default_currency: Option<String>,
    /// Treat warnings as failures when validating. Default: `false`.
    pub strict_warnings: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            default_publisher: None,
            default_currency: None,
            strict_warnings: false,
        }
    }
}

impl CliConfig {
    /// Load the file at `path` (if any) and apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |var| std::env::var(var).ok())
    }

    /// [`CliConfig::load`] with environment lookups supplied by the caller.
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let parsed = if is_json {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&text).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Apply `SVP_*` overrides read through `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup("SVP_PRETTY") {
            self.pretty = parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidEnv("SVP_PRETTY".to_string(), raw.clone()))?;
        }
        if let Some(currency) = lookup("SVP_DEFAULT_CURRENCY").filter(|c| !c.trim().is_empty()) {
            self.default_currency = Some(currency.trim().to_string());
        }
        Ok(())
    }

    /// Fill a missing publisher from `default_publisher`.
    pub fn apply_to_article(&self, input: &mut ArticleInput) {
        if input.publisher.is_none() {
            input.publisher = self.default_publisher.clone();
        }
    }

    /// Fill a missing currency from `default_currency` when a price is set.
    pub fn apply_to_product(&self, input: &mut ProductInput) {
        let has_price = input.price.as_deref().is_some_and(|p| !p.is_empty());
        let has_currency = input.price_currency.as_deref().is_some_and(|c| !c.is_empty());
        if has_price && !has_currency {
            input.price_currency = self.default_currency.clone();
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid value for {0}: {1:?}")]
    InvalidEnv(String, String),
}
