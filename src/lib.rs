//! Pitch Duel - a tiny two-player football match
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, clock)
//! - `renderer`: Draw intents built from the match state
//! - `audio`: Sound intents and playback
//! - `platform`: Window, assets and input via macroquad
//! - `settings`: Tuning, volumes and asset paths

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep (one step per frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field dimensions (logical units, also the window size)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Players are square
    pub const PLAYER_SIZE: i32 = 50;
    /// Home player speed per step and axis
    pub const HOME_SPEED: i32 = 5;
    /// AI vertical tracking speed per step
    pub const AWAY_SPEED: i32 = 3;

    /// Ball box (drawn as an inscribed ellipse)
    pub const BALL_SIZE: i32 = 30;
    /// Per-axis speed of a fresh kickoff
    pub const BALL_SPEED: i32 = 5;
    /// Vertical speed range after a player hit is [-MAX_SPIN, MAX_SPIN]
    pub const MAX_SPIN: i32 = 5;

    /// Goal zones sit on the left/right edges, vertically centered
    pub const GOAL_WIDTH: i32 = 10;
    pub const GOAL_HEIGHT: i32 = 200;

    /// Match length in seconds
    pub const MATCH_DURATION_SECS: f64 = 90.0;
}
