//! Text view configuration persistence
//!
//! Stores preferences in `~/.config/textview/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::EditConstraints;
use crate::util::text::TABULATOR_WIDTH;

/// Errors from saving or explicitly loading a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoConfigDir,
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "No config directory available"),
            Self::Io(msg) => write!(f, "Config I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Text view configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextViewConfig {
    /// Reject all buffer mutations
    pub read_only: bool,
    /// Tab/BackTab edit the text instead of moving focus
    pub allows_tab: bool,
    /// Width of one tab unit; 0 disables tab insertion
    pub tab_width: usize,
    /// Word-wrap presentation (disables undo history while on)
    pub word_wrap: bool,
    /// Enter inserts a line break
    pub allows_return: bool,
    /// Allow more than one line
    pub multiline: bool,
    /// Maximum number of undoable records; unlimited when absent
    pub history_limit: Option<usize>,
}

impl Default for TextViewConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            allows_tab: true,
            tab_width: TABULATOR_WIDTH,
            word_wrap: false,
            allows_return: true,
            multiline: true,
            history_limit: None,
        }
    }
}

impl TextViewConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| {
            ConfigError::Io(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Runtime constraints for an editor built from this config
    pub fn constraints(&self) -> EditConstraints {
        EditConstraints {
            read_only: self.read_only,
            allow_multiline: self.multiline,
            allows_return: self.allows_return,
            allows_tab: self.allows_tab,
            tab_width: self.tab_width,
        }
    }
}
