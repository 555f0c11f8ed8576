use crate::api::ANILIST_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub anilist: AniListConfig,
    pub request: RequestConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub source: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AniListConfig {
    pub endpoint: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RequestConfig {
    pub timeout_secs: Option<u64>, // unset: no deadline
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            source: "anilist".to_string(),
        }
    }
}

impl Default for AniListConfig {
    fn default() -> Self {
        Self {
            endpoint: ANILIST_URL.to_string(),
        }
    }
}

impl RequestConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub struct ConfigManager {
    pub config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "sleepy-foundry", "ani-source")
            .context("Could not determine config directory")?;

        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Self::load_from(config_dir.join("config.toml"))
    }

    /// Reads `path`, writing the defaults there first when it does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config_path = path.as_ref().to_path_buf();

        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            let default_config = Config::default();
            let toml_str = toml::to_string_pretty(&default_config)?;
            fs::write(&config_path, toml_str)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }
}
