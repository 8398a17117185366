//! Game settings and preferences
//!
//! Built-in defaults only; there is no settings file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sim::Tuning;

/// Where the game looks for its assets, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPaths {
    /// Field image (required)
    pub background: PathBuf,
    pub goal_sound: PathBuf,
    pub collision_sound: PathBuf,
    /// Looped for the whole run
    pub music: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("images").join("football_pitch.png"),
            goal_sound: PathBuf::from("sounds").join("goal.wav"),
            collision_sound: PathBuf::from("sounds").join("collision.wav"),
            music: PathBuf::from("sounds").join("background.wav"),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Player and ball speeds
    pub tuning: Tuning,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Extra scale on the collision sound, which fires constantly
    pub collision_volume: f32,
    pub muted: bool,

    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            collision_volume: 0.1,
            muted: false,

            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// Settings for this run
    pub fn load() -> Self {
        let settings = Self::default();
        log::debug!("Using default settings: {:?}", settings);
        settings
    }

    /// Effective sound effect volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }
}
