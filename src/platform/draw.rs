//! Executes draw intents with macroquad

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{draw_ellipse, draw_rectangle, draw_rectangle_lines};
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{DrawTextureParams, Texture2D, draw_texture_ex};
use macroquad::window::{screen_height, screen_width};

use crate::renderer::{Anchor, DrawCommand};
use crate::sim::Rect;

fn color(c: [f32; 4]) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// Top-left corner of a `width`×`height` text box anchored at `pos`
pub fn text_origin(anchor: Anchor, pos: glam::IVec2, width: f32, height: f32) -> (f32, f32) {
    let (x, y) = (pos.x as f32, pos.y as f32);
    match anchor {
        Anchor::TopLeft => (x, y),
        Anchor::TopRight => (x - width, y),
        Anchor::TopCenter => (x - width / 2.0, y),
        Anchor::Center => (x - width / 2.0, y - height / 2.0),
    }
}

fn rect_f32(rect: &Rect) -> (f32, f32, f32, f32) {
    (rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
}

/// Draw a frame's commands in order
pub fn execute(commands: &[DrawCommand], background: &Texture2D) {
    for command in commands {
        match command {
            DrawCommand::Background => draw_texture_ex(
                background,
                0.0,
                0.0,
                Color::new(1.0, 1.0, 1.0, 1.0),
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            ),
            DrawCommand::FillRect { rect, color: c } => {
                let (x, y, w, h) = rect_f32(rect);
                draw_rectangle(x, y, w, h, color(*c));
            }
            DrawCommand::OutlineRect {
                rect,
                thickness,
                color: c,
            } => {
                let (x, y, w, h) = rect_f32(rect);
                draw_rectangle_lines(x, y, w, h, *thickness, color(*c));
            }
            DrawCommand::Ellipse { rect, color: c } => {
                let (x, y, w, h) = rect_f32(rect);
                // Center plus semi-axes
                draw_ellipse(x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0, 0.0, color(*c));
            }
            DrawCommand::Text {
                content,
                pos,
                size,
                anchor,
                color: c,
            } => {
                let dims = measure_text(content, None, *size, 1.0);
                let (x, top) = text_origin(*anchor, *pos, dims.width, dims.height);
                // draw_text takes the baseline
                draw_text(content, x, top + dims.offset_y, *size as f32, color(*c));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_text_origin_per_anchor() {
        let pos = IVec2::new(400, 35);
        assert_eq!(text_origin(Anchor::TopLeft, pos, 40.0, 20.0), (400.0, 35.0));
        assert_eq!(text_origin(Anchor::TopRight, pos, 40.0, 20.0), (360.0, 35.0));
        assert_eq!(text_origin(Anchor::TopCenter, pos, 40.0, 20.0), (380.0, 35.0));
        assert_eq!(text_origin(Anchor::Center, pos, 40.0, 20.0), (380.0, 25.0));
    }
}
