//! Audio intents and playback
//!
//! The simulation reports `GameEvent`s; this module decides which of them
//! make a sound and plays the loaded clips through macroquad. Any clip that
//! failed to load stays `None` and its sound is skipped for the whole run.

use macroquad::audio::{PlaySoundParams, Sound, play_sound, stop_sound};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hit a wall or a player
    Collision,
    /// Ball went into a goal; cuts off any collision or goal clip still playing
    Goal,
}

impl SoundEffect {
    /// The sound an event asks for, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce | GameEvent::PlayerHit(_) => Some(SoundEffect::Collision),
            GameEvent::Goal { .. } => Some(SoundEffect::Goal),
            GameEvent::Kickoff | GameEvent::FullTime => None,
        }
    }

    /// Effects whose in-flight clips are stopped before this one plays
    pub fn interrupts(&self) -> &'static [SoundEffect] {
        match self {
            SoundEffect::Collision => &[],
            SoundEffect::Goal => &[SoundEffect::Collision, SoundEffect::Goal],
        }
    }
}

/// Loaded audio clips
#[derive(Default)]
pub struct SoundBank {
    pub goal: Option<Sound>,
    pub collision: Option<Sound>,
    pub music: Option<Sound>,
}

/// Audio manager for the game
pub struct AudioManager {
    sounds: SoundBank,
    sfx_volume: f32,
    collision_volume: f32,
    music_volume: f32,
}

impl AudioManager {
    pub fn new(sounds: SoundBank, settings: &Settings) -> Self {
        Self {
            sounds,
            sfx_volume: settings.effective_sfx_volume(),
            collision_volume: settings.collision_volume.clamp(0.0, 1.0),
            music_volume: settings.effective_music_volume(),
        }
    }

    /// Loop background music, if present
    pub fn start_music(&self) {
        let Some(music) = &self.sounds.music else {
            return;
        };
        if self.music_volume <= 0.0 {
            return;
        }
        play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: self.music_volume,
            },
        );
        log::info!("Background music started");
    }

    fn clip(&self, effect: SoundEffect) -> Option<&Sound> {
        match effect {
            SoundEffect::Collision => self.sounds.collision.as_ref(),
            SoundEffect::Goal => self.sounds.goal.as_ref(),
        }
    }

    /// Playback volume for an effect (0.0 when muted)
    pub fn effect_volume(&self, effect: SoundEffect) -> f32 {
        match effect {
            SoundEffect::Collision => self.sfx_volume * self.collision_volume,
            SoundEffect::Goal => self.sfx_volume,
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let volume = self.effect_volume(effect);
        if volume <= 0.0 {
            return;
        }
        let Some(clip) = self.clip(effect) else { return };

        for cut in effect.interrupts() {
            if let Some(playing) = self.clip(*cut) {
                stop_sound(playing);
            }
        }
        play_sound(
            clip,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }

    /// Play the sounds for a batch of events, in order
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_event_to_sound_mapping() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::WallBounce),
            Some(SoundEffect::Collision)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PlayerHit(Side::Away)),
            Some(SoundEffect::Collision)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Goal {
                scorer: Side::Home
            }),
            Some(SoundEffect::Goal)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::Kickoff), None);
        assert_eq!(SoundEffect::for_event(&GameEvent::FullTime), None);
    }

    #[test]
    fn test_goal_cuts_off_collision_and_goal_clips() {
        assert_eq!(
            SoundEffect::Goal.interrupts(),
            &[SoundEffect::Collision, SoundEffect::Goal]
        );
        assert!(SoundEffect::Collision.interrupts().is_empty());
    }

    #[test]
    fn test_effect_volumes_follow_settings() {
        let audio = AudioManager::new(SoundBank::default(), &Settings::default());
        assert!((audio.effect_volume(SoundEffect::Goal) - 0.8).abs() < 1e-6);
        assert!((audio.effect_volume(SoundEffect::Collision) - 0.08).abs() < 1e-6);

        let muted = Settings {
            muted: true,
            ..Settings::default()
        };
        let audio = AudioManager::new(SoundBank::default(), &muted);
        assert_eq!(audio.effect_volume(SoundEffect::Goal), 0.0);
        assert_eq!(audio.effect_volume(SoundEffect::Collision), 0.0);
        // No clips loaded: nothing reaches the backend
        audio.play_events(&[GameEvent::WallBounce, GameEvent::Goal { scorer: Side::Away }]);
    }
}
