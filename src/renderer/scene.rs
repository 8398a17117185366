//! Draw intents for one frame
//!
//! `compose` turns the match state into an ordered list of commands. The
//! platform layer executes them; nothing here touches the window.

use glam::IVec2;

use crate::sim::{MatchPhase, MatchState, Outcome, Rect, Side};

/// Font size for every HUD and menu line
pub const FONT_SIZE: u16 = 40;

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HOME: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const AWAY: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = BLACK;
    pub const GOAL: [f32; 4] = BLACK;
    pub const PANEL: [f32; 4] = WHITE;
    pub const TEXT: [f32; 4] = BLACK;
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    TopCenter,
    /// Centered both ways
    Center,
}

/// One drawing action, executed in list order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Field image stretched over the whole window
    Background,
    FillRect { rect: Rect, color: [f32; 4] },
    OutlineRect { rect: Rect, thickness: f32, color: [f32; 4] },
    /// Ellipse inscribed in `rect`
    Ellipse { rect: Rect, color: [f32; 4] },
    Text {
        content: String,
        pos: IVec2,
        size: u16,
        anchor: Anchor,
        color: [f32; 4],
    },
}

impl DrawCommand {
    fn text(content: impl Into<String>, pos: IVec2, anchor: Anchor) -> Self {
        DrawCommand::Text {
            content: content.into(),
            pos,
            size: FONT_SIZE,
            anchor,
            color: colors::TEXT,
        }
    }

    /// White panel with a thin black border
    fn panel(rect: Rect, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::FillRect {
            rect,
            color: colors::PANEL,
        });
        out.push(DrawCommand::OutlineRect {
            rect,
            thickness: 2.0,
            color: colors::BLACK,
        });
    }
}

/// Build the draw list for the current phase
pub fn compose(state: &MatchState, now: f64) -> Vec<DrawCommand> {
    match state.phase {
        MatchPhase::Playing => compose_playing(state, now),
        MatchPhase::Ended => compose_full_time(state),
    }
}

fn compose_playing(state: &MatchState, now: f64) -> Vec<DrawCommand> {
    let mid_x = state.field.width / 2;
    let mut out = Vec::with_capacity(16);
    out.push(DrawCommand::Background);

    // Countdown
    let time_box = Rect::new(mid_x - 40, 10, 80, 50);
    DrawCommand::panel(time_box, &mut out);
    out.push(DrawCommand::text(
        state.clock.remaining_secs(now).to_string(),
        time_box.center(),
        Anchor::Center,
    ));

    // Scoreboard
    let board = Rect::new(mid_x - 150, 70, 300, 100);
    DrawCommand::panel(board, &mut out);
    out.push(DrawCommand::text(
        Side::Home.label(),
        IVec2::new(board.left() + 20, board.top() + 20),
        Anchor::TopLeft,
    ));
    out.push(DrawCommand::text(
        state.score.home.to_string(),
        IVec2::new(board.left() + 20, board.top() + 60),
        Anchor::TopLeft,
    ));
    out.push(DrawCommand::text(
        Side::Away.label(),
        IVec2::new(board.right() - 20, board.top() + 20),
        Anchor::TopRight,
    ));
    out.push(DrawCommand::text(
        state.score.away.to_string(),
        IVec2::new(board.right() - 60, board.top() + 60),
        Anchor::TopRight,
    ));

    out.push(DrawCommand::FillRect {
        rect: state.home,
        color: colors::HOME,
    });
    out.push(DrawCommand::FillRect {
        rect: state.away,
        color: colors::AWAY,
    });
    out.push(DrawCommand::Ellipse {
        rect: state.ball.rect,
        color: colors::BALL,
    });
    for goal in [state.home_goal, state.away_goal] {
        out.push(DrawCommand::FillRect {
            rect: goal,
            color: colors::GOAL,
        });
    }
    out
}

fn compose_full_time(state: &MatchState) -> Vec<DrawCommand> {
    let center = state.field.center();
    let line = |dy: i32| IVec2::new(center.x, center.y + dy);

    let verdict = match state.score.outcome() {
        Outcome::Winner(side) => format!("{} wins!", side.label()),
        Outcome::Draw => "It's a draw!".to_string(),
    };

    vec![
        DrawCommand::Background,
        DrawCommand::text(
            format!("Final Score: {} - {}", state.score.home, state.score.away),
            line(-50),
            Anchor::TopCenter,
        ),
        DrawCommand::text(verdict, line(50), Anchor::TopCenter),
        DrawCommand::text("1. Restart", line(150), Anchor::TopCenter),
        DrawCommand::text("2. Quit", line(200), Anchor::TopCenter),
    ]
}
