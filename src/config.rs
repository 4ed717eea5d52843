//! Configuration handling for the TUI

use crate::utm::{OTHER_MEDIUM, OTHER_SOURCE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Source tags offered when the config does not list its own
pub const DEFAULT_SOURCES: &[&str] = &[
    "newsletter",
    "line",
    "x.com",
    "facebook",
    "instagram",
    "youtube",
    "qrcode",
    "app",
    "message",
    "yahoo",
    "google",
    "ads",
    "signage",
    "news",
];

/// Medium tags offered when the config does not list its own
pub const DEFAULT_MEDIUMS: &[&str] = &[
    "email",
    "social",
    "video",
    "maps",
    "life",
    "referral",
    "notification",
    "paid",
    "sms",
    "cpc",
    "cpv",
    "display",
];

const DEFAULT_NOTIFICATION_MILLIS: u64 = 2500;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Source preselected in a fresh form
    pub default_source: Option<String>,
    /// Medium preselected in a fresh form
    pub default_medium: Option<String>,
    /// Source tags to offer
    pub sources: Option<Vec<String>>,
    /// Medium tags to offer
    pub mediums: Option<Vec<String>>,
    /// How long copy notifications stay on screen
    pub notification_millis: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "utm-tui", "utm-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config = Self::from_json(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load configuration, falling back to defaults on a broken file
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            Self::default()
        })
    }

    /// Selectable source tags, always ending with the "other" sentinel
    pub fn source_options(&self) -> Vec<String> {
        with_other(self.sources.as_deref(), DEFAULT_SOURCES, OTHER_SOURCE)
    }

    /// Selectable medium tags, always ending with the "other" sentinel
    pub fn medium_options(&self) -> Vec<String> {
        with_other(self.mediums.as_deref(), DEFAULT_MEDIUMS, OTHER_MEDIUM)
    }

    /// Initial source, falling back to the first option
    pub fn initial_source(&self) -> String {
        initial(self.default_source.as_deref(), &self.source_options())
    }

    /// Initial medium, falling back to the first option
    pub fn initial_medium(&self) -> String {
        initial(self.default_medium.as_deref(), &self.medium_options())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(
            self.notification_millis
                .unwrap_or(DEFAULT_NOTIFICATION_MILLIS),
        )
    }
}

fn with_other(configured: Option<&[String]>, defaults: &[&str], sentinel: &str) -> Vec<String> {
    let mut options: Vec<String> = match configured {
        Some(list) if !list.is_empty() => list.to_vec(),
        _ => defaults.iter().map(|s| s.to_string()).collect(),
    };
    let mut seen = HashSet::new();
    options.retain(|tag| !tag.is_empty() && tag != sentinel && seen.insert(tag.clone()));
    options.push(sentinel.to_string());
    options
}

fn initial(configured: Option<&str>, options: &[String]) -> String {
    configured
        .filter(|tag| options.iter().any(|o| o == tag))
        .map(str::to_string)
        .or_else(|| options.first().cloned())
        .unwrap_or_default()
}
