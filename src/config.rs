//! Configuration handling for the TUI

use crate::state::{SessionOptions, DEFAULT_DATE_FORMAT};
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Seed the collection with the example forms
    pub sample_forms: Option<bool>,
    /// Open new drafts with the name and email questions
    pub starter_fields: Option<bool>,
    /// chrono format string for creation dates
    pub date_format: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formcraft", "formcraft-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        if let Some(format) = &config.date_format {
            if !is_valid_date_format(format) {
                tracing::warn!("Ignoring invalid date_format {format:?} in {}", path.display());
                config.date_format = None;
            }
        }
        Ok(config)
    }

    /// Load configuration from the user's config directory, falling back
    /// to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            tracing::warn!("Using default configuration: {err:#}");
            Self::default()
        })
    }

    pub fn session_options(&self) -> SessionOptions {
        let defaults = SessionOptions::default();
        SessionOptions {
            sample_forms: self.sample_forms.unwrap_or(defaults.sample_forms),
            starter_fields: self.starter_fields.unwrap_or(defaults.starter_fields),
        }
    }

    pub fn date_format(&self) -> &str {
        self.date_format
            .as_deref()
            .filter(|f| is_valid_date_format(f))
            .unwrap_or(DEFAULT_DATE_FORMAT)
    }
}

/// Whether chrono can render every specifier in `format`
fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
