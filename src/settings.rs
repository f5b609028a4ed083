//! Session settings
//!
//! Loaded from JSON by the host. Gameplay constants are deliberately not
//! here; only presentation, audio and session knobs are.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, MIN_SCREEN_SIDE};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("screen {width}x{height} is smaller than {min}x{min}")]
    ScreenTooSmall { width: u32, height: u32, min: u32 },
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    OutOfRange { name: &'static str, value: f32 },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen (= world) width in pixels
    pub screen_width: u32,
    /// Screen (= world) height in pixels
    pub screen_height: u32,
    /// RNG seed; `None` lets the host pick one
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Session ===
    /// Time factor while slow motion is toggled on
    pub slow_motion_factor: f32,
    /// Frames the headless runner simulates before exiting
    pub demo_frames: u32,
    /// Frame time the headless runner feeds the simulation (seconds)
    pub demo_frame_time: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            slow_motion_factor: 0.1,
            demo_frames: 60 * 60,
            demo_frame_time: 1.0 / 60.0,
        }
    }
}

impl Settings {
    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width < MIN_SCREEN_SIDE || self.screen_height < MIN_SCREEN_SIDE {
            return Err(SettingsError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                min: MIN_SCREEN_SIDE,
            });
        }
        for (name, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::OutOfRange { name, value });
            }
        }
        // A zero factor would freeze the simulation while slowed
        if !(self.slow_motion_factor > 0.0 && self.slow_motion_factor <= 1.0) {
            return Err(SettingsError::OutOfRange {
                name: "slow_motion_factor",
                value: self.slow_motion_factor,
            });
        }
        Ok(())
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
