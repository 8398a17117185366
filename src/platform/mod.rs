//! Platform layer
//!
//! Thin macroquad adapter for the things the simulation never does itself:
//! - Asset loading (image and sounds)
//! - Keyboard input
//! - Executing draw intents

pub mod assets;
pub mod draw;
pub mod input;

pub use assets::{AssetError, Assets};
