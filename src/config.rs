use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const API_BASE: &str = "https://api.tcgplayer.com";
pub const DEFAULT_API_VERSION: &str = "v1.39.0";
pub const CATALOG_ENDPOINT: &str = "/catalog/products";
pub const PRICING_ENDPOINT: &str = "/pricing/product/";

/// Maximum number of candidate products requested per card name.
pub const SEARCH_LIMIT: u32 = 100;

pub const SHOP_SEARCH_URL: &str = "https://shop.tcgplayer.com/yugioh/product/show";
pub const TCGPLAYER_HOME: &str = "https://www.tcgplayer.com/";
pub const DEFAULT_PARTNER: &str = "yugipedia";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_VERSION: &str = "TCGPLAYER_API_VERSION";
pub const ENV_BEARER_TOKEN: &str = "TCGPLAYER_BEARER_TOKEN";
pub const ENV_PARTNER: &str = "TCGPLAYER_PARTNER";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Connection and presentation settings for the TCGplayer integration.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides (usually just `bearer_token`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    pub api_base: String,
    pub api_version: String,
    pub bearer_token: Option<String>,
    pub partner: String,
    /// HTTP request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            bearer_token: None,
            partner: DEFAULT_PARTNER.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load settings from the default config file (if present) and apply
    /// environment overrides on top.
    pub fn load() -> Result<Self> {
        let settings = match default_config_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading settings from {}", path.display());
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };
        Ok(settings.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (normally the process environment).
    ///
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(version) = get(ENV_API_VERSION) {
            self.api_version = version;
        }
        if let Some(token) = get(ENV_BEARER_TOKEN) {
            self.bearer_token = Some(token);
        }
        if let Some(partner) = get(ENV_PARTNER) {
            self.partner = partner;
        }
        self
    }

    /// Versioned API root, e.g. `https://api.tcgplayer.com/v1.39.0`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Platform config location, e.g. `~/.config/tcgplayer-prices/config.json`
/// on Linux. `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tcgplayer-prices").join("config.json"))
}
