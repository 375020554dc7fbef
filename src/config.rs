//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default acknowledgment lifetime in milliseconds
const DEFAULT_NOTICE_MS: u64 = 4000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Accent color name (cyan, blue, green, magenta, yellow, white)
    pub accent: Option<String>,
    /// Overrides the placeholder resume link
    pub resume_url: Option<String>,
    /// How long the submit acknowledgment stays visible
    pub notice_duration_ms: Option<u64>,
}

impl UiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "cderico", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: UiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolved accent color (defaults to cyan)
    pub fn accent_color(&self) -> Color {
        match self.accent.as_deref() {
            Some("blue") => Color::Blue,
            Some("green") => Color::Green,
            Some("magenta") => Color::Magenta,
            Some("yellow") => Color::Yellow,
            Some("white") => Color::White,
            _ => Color::Cyan,
        }
    }

    /// Resolved acknowledgment lifetime
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms.unwrap_or(DEFAULT_NOTICE_MS))
    }

    /// Resolved resume link target
    pub fn resume_url(&self) -> &str {
        self.resume_url
            .as_deref()
            .unwrap_or(crate::content::RESUME_URL)
    }
}
