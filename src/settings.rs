use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::config;

/// Persisted presentation settings, stored as a flat key-value JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stack the property table under the device tree instead of beside it
    pub vertical_layout: bool,
    /// Hide the device ID column
    pub hide_device_ids: bool,
    /// Hide the property ID column
    pub hide_device_props: bool,
    /// Edit property values in place (only meaningful to graphical frontends;
    /// kept so the settings file stays compatible with them)
    pub inline_prop_edit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vertical_layout: false,
            hide_device_ids: true,
            hide_device_props: true,
            inline_prop_edit: false,
        }
    }
}

impl Settings {
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    /// Load settings from disk, falling back to defaults when the file is
    /// missing. A file that exists but fails to parse is an error, not a
    /// silent reset.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    /// Save settings, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config dir {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write settings file {}", path.display()))?;
        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Flip one setting by its JSON key name.
    pub fn set_key(&mut self, key: &str, value: bool) -> Result<()> {
        match key {
            "vertical_layout" => self.vertical_layout = value,
            "hide_device_ids" => self.hide_device_ids = value,
            "hide_device_props" => self.hide_device_props = value,
            "inline_prop_edit" => self.inline_prop_edit = value,
            other => {
                warn!(key = other, "unknown settings key");
                anyhow::bail!("unknown settings key: {other}");
            }
        }
        Ok(())
    }
}
