use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "storefront";
const CONFIG_FILE: &str = "config.json";
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub server_url: String,
    pub debounce_ms: u64,
    pub max_results: usize,
    pub max_recent: usize,
    pub product_cache_ttl_secs: u64,
    pub result_cache_ttl_secs: u64,
    pub storage_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
            debounce_ms: 300,
            max_results: 8,
            max_recent: 5,
            product_cache_ttl_secs: 300,
            result_cache_ttl_secs: 300,
            storage_path: None,
        }
    }
}

impl SearchConfig {
    pub fn load() -> Self {
        // Config file first, environment overrides on top
        let mut config = dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .and_then(|path| Self::from_file(&path))
            .unwrap_or_default();

        config.apply_env_overrides();
        config
    }

    /// Read a config file, returning `None` when it is missing or unreadable.
    pub fn from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        match serde_json::from_str::<SearchConfig>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed config file {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(server_url) = lookup("STOREFRONT_SERVER_URL") {
            self.server_url = server_url;
        }

        if let Some(raw) = lookup("STOREFRONT_DEBOUNCE_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.debounce_ms = ms,
                Err(e) => log::warn!(
                    "Invalid STOREFRONT_DEBOUNCE_MS value '{}': {}",
                    raw,
                    e
                ),
            }
        }

        if let Some(path) = lookup("STOREFRONT_STORAGE_PATH")
            && !path.trim().is_empty()
        {
            self.storage_path = Some(PathBuf::from(path));
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn product_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.product_cache_ttl_secs)
    }

    pub fn result_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.result_cache_ttl_secs)
    }

    /// Where recent searches are persisted, falling back to the data dir.
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(STORAGE_FILE))
        })
    }
}
