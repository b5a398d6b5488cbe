//! Config service
//!
//! The TUI keeps its own preferences (theme, date-filter day boundary, what
//! closing a detail view does) in `<config_dir>/intered-admin/config.json`.
//! Platform settings live in the core settings store, not here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use intered_admin_core::list::{CloseBehavior, DayBoundary};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

const CONFIG_FILE: &str = "config.json";

/// Application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// Calendar the date filters compare in
    pub day_boundary: DayBoundary,
    /// Whether the selected row stays highlighted after its detail closes
    pub detail_close: CloseBehavior,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// How long a "Copied" marker stays visible
    pub copy_feedback_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            day_boundary: DayBoundary::Utc,
            detail_close: CloseBehavior::Retain,
            log_level: "info".to_string(),
            copy_feedback_ms: 2000,
        }
    }
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    /// Loads the config
    fn load(&self) -> Result<AppConfig>;

    /// Saves the config
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON file config service
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// Service over the platform config directory.
    pub fn new() -> Self {
        let dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(dir.join("intered-admin").join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // unreadable content falls back to defaults
                log::warn!(
                    "Ignoring malformed config {}: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

/// Config held in memory; clones share the same slot.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryConfigService {
    saved: std::sync::Arc<std::sync::Mutex<Option<AppConfig>>>,
}

#[cfg(test)]
impl MemoryConfigService {
    pub fn saved(&self) -> Option<AppConfig> {
        self.saved.lock().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
impl ConfigService for MemoryConfigService {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Ok(mut slot) = self.saved.lock() {
            *slot = Some(config.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            day_boundary: DayBoundary::Fixed { offset_minutes: 330 },
            detail_close: CloseBehavior::Clear,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme":"light"}"#).unwrap();
        let config = JsonConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.day_boundary, DayBoundary::Utc);
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let config = JsonConfigService::with_path(&path).load().unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
