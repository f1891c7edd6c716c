//! Persistent application configuration.
//!
//! Stored as JSON in a platform-appropriate config directory. On first run
//! the defaults are written out so users have a file to edit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Font files tried before the built-in fallback list.
    pub font_paths: Vec<PathBuf>,

    /// Long-edge cap applied to inputs before compositing.
    pub max_long_edge: u32,

    /// JPEG quality for encoded outputs.
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_paths: Vec::new(),
            max_long_edge: 2048,
            jpeg_quality: 95,
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("config_dir() unavailable")?;
        Ok(base.join("bannerbot.json"))
    }

    /// Load configuration from disk, falling back to defaults on failure.
    /// A missing file is not a failure: the defaults are saved back so the
    /// next run finds a file.
    pub fn load_or_default() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(error = %err, "no config directory; using defaults");
                return Self::default();
            }
        };
        match Self::try_load_from(&path) {
            Ok(Some(cfg)) => cfg,
            Ok(None) => {
                let cfg = Self::default();
                if let Err(err) = cfg.save_to(&path) {
                    tracing::warn!(error = %err, "failed to write default config");
                }
                cfg
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load config; using defaults");
                Self::default()
            }
        }
    }

    /// Read and parse the file at `path`; `Ok(None)` when it does not exist.
    fn try_load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
        let cfg = serde_json::from_str(&json).with_context(|| format!("parse {:?}", path))?;
        Ok(Some(cfg))
    }

    /// Save configuration to `path`, creating parent directories.
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, json).with_context(|| format!("write {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bannerbot-test-{}-{}", std::process::id(), name))
            .join("bannerbot.json")
    }

    #[test]
    fn missing_file_loads_as_none() {
        let path = temp_config_path("missing");
        assert!(Config::try_load_from(&path).unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_config_path("roundtrip");
        let cfg = Config {
            font_paths: vec![PathBuf::from("/tmp/custom.ttf")],
            max_long_edge: 1600,
            jpeg_quality: 88,
        };
        cfg.save_to(&path).unwrap();
        let loaded = Config::try_load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, cfg);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn malformed_file_is_an_error_not_a_default() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        assert!(Config::try_load_from(&path).is_err());
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
