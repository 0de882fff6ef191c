use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::category::Category;
use crate::error::FolioError;
use crate::pager::RevealTiming;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ITEMS_PER_PAGE: usize = 3;
const DEFAULT_REVEAL_DELAY_MS: u64 = 50;
const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub items_per_page: usize,
    pub initial_category: Category,
    pub reveal_delay_ms: u64,
    pub reveal_stagger_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            initial_category: Category::Academic,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
        }
    }
}

impl FolioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, FolioError> {
        let config: FolioConfig = serde_json::from_str(json)
            .map_err(|e| FolioError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Read the platform config file if there is one, defaults otherwise
    pub fn load_or_default() -> Result<Self, FolioError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            None => {
                debug!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.items_per_page == 0 {
            return Err(FolioError::Config(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn reveal_timing(&self) -> RevealTiming {
        RevealTiming {
            delay: Duration::from_millis(self.reveal_delay_ms),
            stagger: Duration::from_millis(self.reveal_stagger_ms),
        }
    }
}
