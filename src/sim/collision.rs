//! Collision detection for boxes
//!
//! Pure contact tests; the response (velocity changes, scoring) lives in
//! `tick`.

use super::rect::Rect;
use super::state::{Field, MatchState, Side};

/// Which field edges the ball touched this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    /// Left or right edge reached: horizontal velocity must flip
    pub flip_x: bool,
    /// Top or bottom edge reached: vertical velocity must flip
    pub flip_y: bool,
}

impl WallContact {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }
}

/// Edge test: reaching an edge counts, not only crossing it
pub fn wall_contact(ball: &Rect, field: &Field) -> WallContact {
    WallContact {
        flip_x: ball.left() <= 0 || ball.right() >= field.width,
        flip_y: ball.top() <= 0 || ball.bottom() >= field.height,
    }
}

/// Players the ball overlaps, home first
pub fn player_contacts(ball: &Rect, state: &MatchState) -> Vec<Side> {
    [Side::Home, Side::Away]
        .into_iter()
        .filter(|side| ball.overlaps(state.player(*side)))
        .collect()
}

/// Side that scores if the ball is inside a goal zone.
///
/// The home goal is checked first; a ball overlapping both (only possible on a
/// degenerate field) scores once for away.
pub fn goal_scorer(ball: &Rect, state: &MatchState) -> Option<Side> {
    [Side::Home, Side::Away]
        .into_iter()
        .find(|defender| ball.overlaps(state.goal(*defender)))
        .map(Side::opponent)
}
