//! Rendering module
//!
//! Produces draw intents only; `platform::draw` executes them.

pub mod scene;

pub use scene::{Anchor, DrawCommand, FONT_SIZE, colors, compose};
