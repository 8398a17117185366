//! Fixed timestep simulation tick
//!
//! One call advances the match by one frame: player movement, ball physics,
//! then the clock. Order matters when several things happen in one step.

use glam::IVec2;

use super::collision::{goal_scorer, player_contacts, wall_contact};
use super::rng::RandomSource;
use super::state::{GameEvent, MatchPhase, MatchState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held direction keys for the home player
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Start a new match (only honoured at full time)
    pub restart: bool,
    /// Leave the game (only honoured at full time)
    pub quit: bool,
}

/// What the game loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Advance the match by one fixed step.
///
/// `now` is the platform's monotonic time in seconds, used only by the clock
/// and to stamp a restarted match.
pub fn tick(
    state: &mut MatchState,
    input: &TickInput,
    now: f64,
    rng: &mut impl RandomSource,
) -> Flow {
    match state.phase {
        MatchPhase::Playing => {
            move_home(state, input);
            move_away(state);
            step_ball(state, rng);
            update_clock(state, now);
            Flow::Continue
        }
        MatchPhase::Ended => {
            if input.quit {
                log::info!("Quit requested at full time");
                return Flow::Quit;
            }
            if input.restart {
                let mut pending = state.drain_events();
                *state = state.restart(now, rng);
                pending.append(&mut state.events);
                state.events = pending;
                log::info!("Match restarted");
            }
            Flow::Continue
        }
    }
}

/// Move the home player by held keys, one axis step at a time.
///
/// A step that would leave the field is skipped, not shortened.
pub fn move_home(state: &mut MatchState, input: &TickInput) {
    let speed = state.tuning.home_speed;
    let bounds = state.field.bounds();
    let steps = [
        (input.left, IVec2::new(-speed, 0)),
        (input.right, IVec2::new(speed, 0)),
        (input.up, IVec2::new(0, -speed)),
        (input.down, IVec2::new(0, speed)),
    ];

    for (held, delta) in steps {
        if !held {
            continue;
        }
        let moved = state.home.translated(delta);
        if moved.inside(&bounds) {
            state.home = moved;
        }
    }
}

/// Track the ball vertically with the away player.
///
/// Compares the ball's top edge with the player's top and bottom edges, so the
/// AI lags the ball by up to one player height.
pub fn move_away(state: &mut MatchState) {
    let speed = state.tuning.away_speed;
    let ball_top = state.ball.rect.top();
    let max_y = state.field.height - state.away.h;
    let away = &mut state.away;

    if ball_top < away.top() {
        away.y -= speed;
    } else if ball_top > away.bottom() {
        away.y += speed;
    }
    away.y = away.y.clamp(0, max_y);
}

/// Move the ball and resolve walls, players and goals, in that order
pub fn step_ball(state: &mut MatchState, rng: &mut impl RandomSource) {
    state.ball.advance();

    let walls = wall_contact(&state.ball.rect, &state.field);
    if walls.flip_x {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if walls.flip_y {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if walls.any() {
        state.events.push(GameEvent::WallBounce);
    }

    // Touching both players at once is one contact: a single flip and spin
    let touched = player_contacts(&state.ball.rect, state);
    if !touched.is_empty() {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y = rng.spin(state.tuning.max_spin);
        for side in touched {
            log::debug!("Ball hit {} player, vel now {}", side.label(), state.ball.vel);
            state.events.push(GameEvent::PlayerHit(side));
        }
    }

    if let Some(scorer) = goal_scorer(&state.ball.rect, state) {
        state.score.credit(scorer);
        state.ball.reset(&state.field, state.tuning.ball_speed, rng);
        log::info!(
            "Goal for {}! Home {} - {} Away",
            scorer.label(),
            state.score.home,
            state.score.away
        );
        state.events.push(GameEvent::Goal { scorer });
    }
}

/// End the match once the clock has run out (one-way)
pub fn update_clock(state: &mut MatchState, now: f64) {
    if state.phase == MatchPhase::Playing && state.clock.is_expired(now) {
        state.phase = MatchPhase::Ended;
        log::info!(
            "Full time: Home {} - {} Away",
            state.score.home,
            state.score.away
        );
        state.events.push(GameEvent::FullTime);
    }
}
