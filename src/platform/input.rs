//! Keyboard polling

use macroquad::input::{KeyCode, is_key_down, is_key_pressed};

use crate::sim::TickInput;

/// Read this frame's keyboard state
pub fn poll() -> TickInput {
    from_keys(is_key_down, is_key_pressed)
}

/// Map key state to tick input.
///
/// Arrows are read as held; the menu digits as fresh presses so one key press
/// restarts only once.
pub fn from_keys(held: impl Fn(KeyCode) -> bool, pressed: impl Fn(KeyCode) -> bool) -> TickInput {
    TickInput {
        left: held(KeyCode::Left),
        right: held(KeyCode::Right),
        up: held(KeyCode::Up),
        down: held(KeyCode::Down),
        restart: pressed(KeyCode::Key1) || pressed(KeyCode::Kp1),
        quit: pressed(KeyCode::Key2) || pressed(KeyCode::Kp2),
    }
}
