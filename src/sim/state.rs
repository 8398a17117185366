//! Match state and core simulation types
//!
//! Everything the simulation mutates lives in one `MatchState` value.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::RandomSource;
use crate::consts::*;

/// Which team a player, goal or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled, plays from the left half
    Home,
    /// AI-controlled, plays from the right half
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Clock running, players and ball moving
    Playing,
    /// Full time; waiting for restart or quit
    Ended,
}

/// Something that happened during a step, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball placed at the center with a fresh velocity (match start/restart)
    Kickoff,
    /// Ball reflected off one or more field edges
    WallBounce,
    /// Ball hit a player
    PlayerHit(Side),
    /// Ball entered a goal zone; `scorer` got the point
    Goal { scorer: Side },
    /// Clock ran out
    FullTime,
}

/// Playing area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }
}

/// Speeds that shape the feel of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    /// Home player step per axis
    pub home_speed: i32,
    /// AI vertical step
    pub away_speed: i32,
    /// Per-axis ball speed at kickoff
    pub ball_speed: i32,
    /// Bound of the vertical speed drawn after a player hit
    pub max_spin: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            home_speed: HOME_SPEED,
            away_speed: AWAY_SPEED,
            ball_speed: BALL_SPEED,
            max_spin: MAX_SPIN,
        }
    }
}

/// The ball: a box and a per-step velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    /// Ball at the field center, moving diagonally in a random direction
    pub fn kickoff(field: &Field, speed: i32, rng: &mut impl RandomSource) -> Self {
        let mut ball = Self {
            rect: Rect::centered_at(field.center(), BALL_SIZE, BALL_SIZE),
            vel: IVec2::ZERO,
        };
        ball.reset(field, speed, rng);
        ball
    }

    /// Re-center and draw a fresh velocity sign on each axis
    pub fn reset(&mut self, field: &Field, speed: i32, rng: &mut impl RandomSource) {
        self.rect.recenter(field.center());
        let sx = rng.sign();
        let sy = rng.sign();
        self.vel = IVec2::new(speed * sx, speed * sy);
    }

    /// One Euler step
    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }
}

/// Final or running result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// Goals per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Award one goal to `side`
    pub fn credit(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.home.cmp(&self.away) {
            Ordering::Greater => Outcome::Winner(Side::Home),
            Ordering::Less => Outcome::Winner(Side::Away),
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Countdown measured against a monotonic start timestamp (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchClock {
    pub started_at: f64,
    pub duration: f64,
}

impl MatchClock {
    pub fn new(started_at: f64) -> Self {
        Self {
            started_at,
            duration: MATCH_DURATION_SECS,
        }
    }

    pub fn ends_at(&self) -> f64 {
        self.started_at + self.duration
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.ends_at()
    }

    /// Whole seconds left as shown on the countdown (elapsed time is floored)
    pub fn remaining_secs(&self, now: f64) -> u32 {
        (self.duration - self.elapsed(now).floor()).max(0.0) as u32
    }
}

/// Complete match state (single owner, mutated once per step)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub field: Field,
    pub tuning: Tuning,
    /// Human player box
    pub home: Rect,
    /// AI player box
    pub away: Rect,
    pub ball: Ball,
    /// Goal zone defended by home (left edge)
    pub home_goal: Rect,
    /// Goal zone defended by away (right edge)
    pub away_goal: Rect,
    pub score: Score,
    pub clock: MatchClock,
    pub phase: MatchPhase,
    /// Events from the latest steps, drained by the platform
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Fresh match on a `field_width`×`field_height` field with default tuning
    pub fn new_match(
        field_width: i32,
        field_height: i32,
        started_at: f64,
        rng: &mut impl RandomSource,
    ) -> Self {
        Self::with_tuning(
            Field::new(field_width, field_height),
            Tuning::default(),
            started_at,
            rng,
        )
    }

    pub fn with_tuning(
        field: Field,
        tuning: Tuning,
        started_at: f64,
        rng: &mut impl RandomSource,
    ) -> Self {
        let mid_y = field.height / 2;
        let home = Rect::centered_at(IVec2::new(field.width / 4, mid_y), PLAYER_SIZE, PLAYER_SIZE);
        let away = Rect::centered_at(
            IVec2::new(3 * field.width / 4, mid_y),
            PLAYER_SIZE,
            PLAYER_SIZE,
        );
        let goal_y = mid_y - GOAL_HEIGHT / 2;

        Self {
            field,
            tuning,
            home,
            away,
            ball: Ball::kickoff(&field, tuning.ball_speed, rng),
            home_goal: Rect::new(0, goal_y, GOAL_WIDTH, GOAL_HEIGHT),
            away_goal: Rect::new(field.width - GOAL_WIDTH, goal_y, GOAL_WIDTH, GOAL_HEIGHT),
            score: Score::default(),
            clock: MatchClock::new(started_at),
            phase: MatchPhase::Playing,
            events: vec![GameEvent::Kickoff],
        }
    }

    /// A brand-new match on the same field with the same tuning
    pub fn restart(&self, now: f64, rng: &mut impl RandomSource) -> Self {
        Self::with_tuning(self.field, self.tuning, now, rng)
    }

    pub fn player(&self, side: Side) -> &Rect {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// The goal zone `side` defends
    pub fn goal(&self, side: Side) -> &Rect {
        match side {
            Side::Home => &self.home_goal,
            Side::Away => &self.away_goal,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    #[test]
    fn test_initial_layout() {
        let mut rng = ScriptedRng { sign: -1, spin: 0 };
        let state = MatchState::new_match(800, 600, 0.0, &mut rng);

        assert_eq!(state.home, Rect::new(175, 275, 50, 50));
        assert_eq!(state.away, Rect::new(575, 275, 50, 50));
        assert_eq!(state.ball.rect, Rect::new(385, 285, 30, 30));
        assert_eq!(state.ball.rect.center(), IVec2::new(400, 300));
        assert_eq!(state.ball.vel, IVec2::new(-5, -5));
        assert_eq!(state.home_goal, Rect::new(0, 200, 10, 200));
        assert_eq!(state.away_goal, Rect::new(790, 200, 10, 200));
        assert_eq!(state.score, Score::default());
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.events, vec![GameEvent::Kickoff]);
    }

    #[test]
    fn test_kickoff_velocity_has_fixed_magnitude() {
        let mut rng = crate::sim::rng::RngState::new(5).to_rng();
        for _ in 0..50 {
            let ball = Ball::kickoff(&Field::default(), BALL_SPEED, &mut rng);
            assert_eq!(ball.vel.x.abs(), 5);
            assert_eq!(ball.vel.y.abs(), 5);
        }
    }

    #[test]
    fn test_restart_matches_fresh_match() {
        let mut rng = ScriptedRng { sign: 1, spin: 3 };
        let mut state = MatchState::new_match(800, 600, 0.0, &mut rng);
        state.score = Score { home: 3, away: 2 };
        state.home.translate(IVec2::new(-40, 90));
        state.away.translate(IVec2::new(0, -120));
        state.ball.rect = Rect::new(12, 34, 30, 30);
        state.ball.vel = IVec2::new(-5, 2);
        state.phase = MatchPhase::Ended;
        state.events.push(GameEvent::FullTime);

        let restarted = state.restart(123.5, &mut rng);
        let fresh = MatchState::new_match(800, 600, 123.5, &mut rng);
        assert_eq!(restarted, fresh);
        assert_eq!(restarted.clock.elapsed(123.5), 0.0);
    }

    #[test]
    fn test_restart_keeps_tuning() {
        let tuning = Tuning {
            home_speed: 4,
            ..Tuning::default()
        };
        let mut rng = ScriptedRng { sign: 1, spin: 0 };
        let state = MatchState::with_tuning(Field::default(), tuning, 0.0, &mut rng);
        assert_eq!(state.restart(10.0, &mut rng).tuning.home_speed, 4);
    }

    #[test]
    fn test_clock_boundaries() {
        let clock = MatchClock::new(12.25);
        assert!(!clock.is_expired(12.25 + 89.999));
        assert!(clock.is_expired(12.25 + 90.0));
        assert!(clock.is_expired(500.0));

        assert_eq!(clock.remaining_secs(12.25), 90);
        assert_eq!(clock.remaining_secs(12.25 + 0.9), 90);
        assert_eq!(clock.remaining_secs(12.25 + 1.0), 89);
        assert_eq!(clock.remaining_secs(12.25 + 89.5), 1);
        assert_eq!(clock.remaining_secs(12.25 + 120.0), 0);
        // Before the start timestamp counts as no time elapsed
        assert_eq!(clock.remaining_secs(0.0), 90);
    }

    #[test]
    fn test_score_outcome() {
        let mut score = Score::default();
        assert_eq!(score.outcome(), Outcome::Draw);
        score.credit(Side::Away);
        assert_eq!(score.get(Side::Away), 1);
        assert_eq!(score.outcome(), Outcome::Winner(Side::Away));
        score.credit(Side::Home);
        score.credit(Side::Home);
        assert_eq!(score.outcome(), Outcome::Winner(Side::Home));
    }

    #[test]
    fn test_state_snapshot_skips_events() {
        let mut rng = ScriptedRng { sign: 1, spin: 0 };
        let state = MatchState::new_match(800, 600, 0.0, &mut rng);
        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert!(back.events.is_empty());
        assert_eq!(back.ball, state.ball);
        assert_eq!(back.score, state.score);
    }
}
