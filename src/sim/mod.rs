//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call
//! - Randomness only through `RandomSource`
//! - Time only as a timestamp handed in by the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{WallContact, goal_scorer, player_contacts, wall_contact};
pub use rect::Rect;
pub use rng::{RandomSource, RngState};
pub use state::{
    Ball, Field, GameEvent, MatchClock, MatchPhase, MatchState, Outcome, Score, Side, Tuning,
};
pub use tick::{Flow, TickInput, move_away, move_home, step_ball, tick, update_clock};
