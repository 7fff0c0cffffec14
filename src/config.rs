//! Configuration management for imadic.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scrapers::{default_sources, DictionarySource, USER_AGENT};

/// Default output subdirectory name.
const OUTPUT_SUBDIR: &str = "dic";

/// Default cache subdirectory name.
const CACHE_SUBDIR: &str = "cache";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Directory dictionaries are written to.
    pub output_dir: PathBuf,
    /// Directory holding scraped name lists.
    pub cache_dir: PathBuf,
    /// Replace rules file, if any.
    pub replace_file: Option<PathBuf>,
    /// Insert rules file, if any.
    pub add_file: Option<PathBuf>,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Delay between requests in milliseconds.
    pub request_delay_ms: u64,
    /// Dictionaries to build.
    pub dictionaries: Vec<DictionarySource>,
}

impl Default for Settings {
    fn default() -> Self {
        // Documents dir -> Home dir -> Current dir
        let data_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("imadic");

        Self::with_data_dir(data_dir)
    }
}

impl Settings {
    /// Create settings rooted at a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            output_dir: data_dir.join(OUTPUT_SUBDIR),
            cache_dir: data_dir.join(CACHE_SUBDIR),
            data_dir,
            replace_file: None,
            add_file: None,
            user_agent: USER_AGENT.to_string(),
            request_timeout: 30,
            request_delay_ms: 500,
            dictionaries: default_sources(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Look up a configured dictionary by name.
    pub fn dictionary(&self, name: &str) -> Option<&DictionarySource> {
        self.dictionaries.iter().find(|d| d.name == name)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Output directory (default: `<data_dir>/dic`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Cache directory (default: `<data_dir>/cache`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,
    /// Replace rules file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_file: Option<String>,
    /// Insert rules file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_file: Option<String>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Delay between requests in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_delay_ms: Option<u64>,
    /// Dictionary sources; the built-in list is used when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dictionaries: Vec<DictionarySource>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no config file is found.
    pub async fn load() -> Self {
        match prefer::load("imadic").await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => match Self::load_from_path(path).await {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("Ignoring config {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                None => Self::default(),
            },
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let mut config = Self::parse(path, &contents)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, String> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e)),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e)),
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
        }
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a configured path: expand `~`, then anchor relative paths at
    /// the config file's directory.
    fn resolve_path(&self, raw: &str) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
        match self.base_dir() {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        }
    }

    /// Apply this configuration on top of default settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref data_dir) = self.data_dir {
            let data_dir = self.resolve_path(data_dir);
            settings.output_dir = data_dir.join(OUTPUT_SUBDIR);
            settings.cache_dir = data_dir.join(CACHE_SUBDIR);
            settings.data_dir = data_dir;
        }
        if let Some(ref dir) = self.output_dir {
            settings.output_dir = self.resolve_path(dir);
        }
        if let Some(ref dir) = self.cache_dir {
            settings.cache_dir = self.resolve_path(dir);
        }
        if let Some(ref file) = self.replace_file {
            settings.replace_file = Some(self.resolve_path(file));
        }
        if let Some(ref file) = self.add_file {
            settings.add_file = Some(self.resolve_path(file));
        }
        if let Some(ref ua) = self.user_agent {
            settings.user_agent = ua.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(delay) = self.request_delay_ms {
            settings.request_delay_ms = delay;
        }
        if !self.dictionaries.is_empty() {
            settings.dictionaries = self.dictionaries.clone();
        }
    }
}

/// Load settings from an explicit config file or discovered configuration,
/// then apply a data directory override.
pub async fn load_settings(
    config_path: Option<&Path>,
    data_dir_override: Option<PathBuf>,
) -> anyhow::Result<(Settings, Config)> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?,
        None => Config::load().await,
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);

    if let Some(data_dir) = data_dir_override {
        settings.output_dir = data_dir.join(OUTPUT_SUBDIR);
        settings.cache_dir = data_dir.join(CACHE_SUBDIR);
        settings.data_dir = data_dir;
    }

    Ok((settings, config))
}
