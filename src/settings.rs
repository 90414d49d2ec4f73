//! Settings with persistence
//!
//! Settings are saved to `~/.config/smooth-shift-lock/settings.toml`

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shiftlock_control::ShiftLockConfig;
use shiftlock_core::TimeConfig;
use tracing::{info, warn};

use crate::camera::OrbitCameraConfig;

/// All settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub shift_lock: ShiftLockConfig,
    pub camera: OrbitCameraConfig,
    pub time: TimeConfig,
    pub session: SessionSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("smooth-shift-lock"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("Failed to parse settings: {}, using defaults", e);
                Self::default()
            }),
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(path)
    }
}

/// Scripted session parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Frame index at which a single long frame is injected (lag spike)
    pub hitch_frame: Option<u32>,
    /// Length of the injected frame in seconds
    pub hitch_seconds: f32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            hitch_frame: Some(150),
            hitch_seconds: 1.5,
        }
    }
}

impl SessionSettings {
    /// Raw delta for a frame, before the clock clamps it
    pub fn frame_delta(&self, frame: u32) -> f32 {
        if self.hitch_frame == Some(frame) {
            self.hitch_seconds
        } else {
            1.0 / self.frame_rate.max(1.0)
        }
    }
}
