//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages all user-editable settings for the carousel viewer. Loads and
//! saves settings as TOML from the proper cross-platform config path using
//! the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Light,

    Dark,

    Custom(String),
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,

    /// Text rendered by the animated title banner.
    pub banner_title: String,

    /// UI tick driving banner animation, autoplay and playback clocks.
    #[serde(with = "humantime_serde")]
    pub tick_rate: Duration,

    /// When set, the focused carousel advances on this interval.
    #[serde(default, with = "humantime_serde::option")]
    pub autoplay_interval: Option<Duration>,

    /// Hide the caption row entirely when false.
    pub show_captions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            banner_title: "CARAVEL".to_string(),
            tick_rate: Duration::from_millis(250),
            autoplay_interval: None,
            show_captions: true,
        }
    }
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/Caravel/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path).await?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str).await?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "caravel", "Caravel")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.theme, Theme::Default);
        assert_eq!(cfg.tick_rate, Duration::from_millis(250));
        assert!(cfg.autoplay_interval.is_none());
        assert!(cfg.show_captions);
    }

    #[test]
    fn roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.autoplay_interval = Some(Duration::from_secs(5));
        cfg.banner_title = "LOCOMOTION".to_string();

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");

        assert_eq!(back.banner_title, "LOCOMOTION");
        assert_eq!(back.autoplay_interval, Some(Duration::from_secs(5)));
    }

    #[test]
    fn autoplay_accepts_humantime_strings() {
        let text = r#"
            theme = "default"
            banner_title = "CARAVEL"
            tick_rate = "250ms"
            autoplay_interval = "5s"
            show_captions = true
        "#;
        let cfg: Config = toml::from_str(text).expect("parse");
        assert_eq!(cfg.autoplay_interval, Some(Duration::from_secs(5)));
    }
}
