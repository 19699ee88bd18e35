use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::mute_toggle::ToggleConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub assets_dir: PathBuf,
    pub settings_path: PathBuf,
    pub toggle: ToggleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Flashcards".to_string(),
            assets_dir: PathBuf::from("assets"),
            settings_path: PathBuf::from("settings.ron"),
            toggle: ToggleConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        ron::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }
}
