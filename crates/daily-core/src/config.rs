use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_SIZE: u32 = 1010;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_size: DEFAULT_CATALOG_SIZE,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config: Self = serde_json::from_str(&data).context("parse config")?;
        anyhow::ensure!(config.catalog_size >= 1, "catalog size must be at least 1");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project = ProjectDirs::from("com", "pokemon-daily", "pokemon-daily")
        .context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    let project = ProjectDirs::from("com", "pokemon-daily", "pokemon-daily")
        .context("resolve project dirs")?;
    Ok(project.data_local_dir().join("identity.json"))
}
