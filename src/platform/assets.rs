//! Asset loading
//!
//! The field image is required. Sounds are best-effort: a missing or broken
//! clip is logged once and left out.

use std::path::Path;

use macroquad::audio::{Sound, load_sound};
use macroquad::texture::{Texture2D, load_texture};
use thiserror::Error;

use crate::audio::SoundBank;
use crate::settings::AssetPaths;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load background image {path}")]
    Background {
        path: String,
        #[source]
        source: macroquad::Error,
    },
}

/// Everything loaded once at startup
pub struct Assets {
    pub background: Texture2D,
    pub sounds: SoundBank,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let background = load_background(&paths.background).await?;
        let sounds = SoundBank {
            goal: load_optional_sound(&paths.goal_sound).await,
            collision: load_optional_sound(&paths.collision_sound).await,
            music: load_optional_sound(&paths.music).await,
        };
        Ok(Self { background, sounds })
    }
}

async fn load_background(path: &Path) -> Result<Texture2D, AssetError> {
    let display = path.display().to_string();
    let texture = load_texture(&display)
        .await
        .map_err(|source| AssetError::Background {
            path: display.clone(),
            source,
        })?;
    log::info!("Loaded background {}", display);
    Ok(texture)
}

async fn load_optional_sound(path: &Path) -> Option<Sound> {
    let display = path.display().to_string();
    if !path.is_file() {
        log::warn!("Sound {} not found - disabled", display);
        return None;
    }
    match load_sound(&display).await {
        Ok(sound) => {
            log::info!("Loaded sound {}", display);
            Some(sound)
        }
        Err(e) => {
            log::warn!("Failed to load sound {}: {:?} - disabled", display, e);
            None
        }
    }
}
