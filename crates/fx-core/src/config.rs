//! Settings document boundary.
//!
//! The document is JSON with camelCase keys. Every field has a default, so a
//! partial file loads cleanly; `validate` clamps values into the ranges the
//! engine assumes before a snapshot ever reaches it.

use crate::constants::DEFAULT_COLORS;
use log::{info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for next to the executable and in the working directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize settings document: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "MouseFX".to_string(),
            icon: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectsConfig {
    pub enabled: bool,
    pub performance_mode: bool,
    #[serde(deserialize_with = "whole_u32")]
    pub density: u32,
    /// Burst particle lifetime in seconds before per-type scaling.
    pub duration: f32,
    pub colors: Vec<String>,
    pub size_range: [f32; 2],
    pub speed_range: [f32; 2],
    pub types: Vec<String>,
    pub random_pick: bool,
    pub trail_enabled: bool,
    #[serde(deserialize_with = "whole_u32")]
    pub trail_density: u32,
    pub trail_life: f32,
    #[serde(deserialize_with = "whole_u64")]
    pub trail_min_interval_ms: u64,
    pub trail_size_range: [f32; 2],
    pub trail_flower_chance: f32,
    pub trail_flower_size_range: [f32; 2],
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            performance_mode: false,
            density: 6,
            duration: 1.6,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            size_range: [14.0, 28.0],
            speed_range: [150.0, 420.0],
            types: vec!["heart".to_string()],
            random_pick: true,
            trail_enabled: true,
            trail_density: 2,
            trail_life: 0.5,
            trail_min_interval_ms: 18,
            trail_size_range: [5.0, 10.0],
            trail_flower_chance: 0.15,
            trail_flower_size_range: [8.0, 14.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotkeysConfig {
    pub toggle_effects: String,
    pub quit: String,
}

impl Default for HotkeysConfig {
    fn default() -> Self {
        Self {
            toggle_effects: "ctrl+alt+h".to_string(),
            quit: "ctrl+alt+q".to_string(),
        }
    }
}

/// The whole settings document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FxConfig {
    pub app: AppConfig,
    pub debug: bool,
    pub effects: EffectsConfig,
    pub hotkeys: HotkeysConfig,
}

impl FxConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(s).map_err(ConfigError::Parse)?;
        config.validate();
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Strict load: any I/O or parse failure is reported.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Load configuration from `path`.
    /// Returns defaults if the file is missing or invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_json_string()?).map_err(io_err)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolve the settings file: an explicit path wins, then the executable's
    /// directory, then the working directory.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(p) = explicit {
            return Some(p.to_path_buf());
        }
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        exe_dir
            .into_iter()
            .chain(std::env::current_dir().ok())
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|p| p.is_file())
    }

    /// Clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.effects.validate();
    }
}

impl EffectsConfig {
    pub fn validate(&mut self) {
        self.density = self.density.min(64);
        self.duration = finite_or(self.duration, 1.6).clamp(0.05, 10.0);
        self.size_range = ordered(self.size_range, [14.0, 28.0]);
        self.speed_range = ordered(self.speed_range, [150.0, 420.0]);

        self.trail_density = self.trail_density.min(64);
        self.trail_life = finite_or(self.trail_life, 0.5).clamp(0.05, 10.0);
        self.trail_min_interval_ms = self.trail_min_interval_ms.max(1);
        self.trail_size_range = ordered(self.trail_size_range, [5.0, 10.0]);
        self.trail_flower_chance = finite_or(self.trail_flower_chance, 0.15).clamp(0.0, 1.0);
        self.trail_flower_size_range = ordered(self.trail_flower_size_range, [8.0, 14.0]);

        self.colors.retain(|c| !c.trim().is_empty());
        if self.colors.is_empty() {
            self.colors = DEFAULT_COLORS.iter().map(|c| c.to_string()).collect();
        }
    }
}

// Counts and intervals accept any JSON number (`6.0`, `-5`) so one sloppy
// value can't reject the whole document; `validate` clamps afterwards.
fn whole_number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let v = f64::deserialize(d)?;
    Ok(if v.is_finite() { v.round().max(0.0) } else { 0.0 })
}

fn whole_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    whole_number(d).map(|v| v.min(u32::MAX as f64) as u32)
}

fn whole_u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    whole_number(d).map(|v| v.min(u64::MAX as f64) as u64)
}

fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

fn ordered(range: [f32; 2], fallback: [f32; 2]) -> [f32; 2] {
    if !range.iter().all(|v| v.is_finite()) {
        return fallback;
    }
    let lo = range[0].max(0.0);
    let hi = range[1].max(0.0);
    if lo <= hi {
        [lo, hi]
    } else {
        [hi, lo]
    }
}
