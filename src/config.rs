use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::ImageOrder;

/// Extraction defaults for docx-extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory extracted images are written to
    pub image_dir: PathBuf,

    /// File the text report is written to
    pub text_output: PathBuf,

    /// How images are numbered
    pub image_order: ImageOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            image_dir: PathBuf::from("extracted_images"),
            text_output: PathBuf::from("docx_content.txt"),
            image_order: ImageOrder::Relationship,
        }
    }
}

impl Settings {
    /// Load settings from config directory
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Settings::default()),
        }
    }

    /// Load settings from a specific file, falling back to defaults if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            log::debug!("Loaded settings from {}", config_path.display());
            return Ok(settings);
        }

        Ok(Settings::default())
    }

    /// Save settings to config directory
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(config_path) = Self::get_config_path() else {
            return Ok(None);
        };
        self.save_to(&config_path)?;
        Ok(Some(config_path))
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the settings file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docx-extract").join("config.toml"))
    }

    /// Initialize default settings file
    pub fn init_default() -> Result<Option<PathBuf>> {
        Settings::default().save()
    }
}
