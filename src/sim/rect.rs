//! Axis-aligned boxes
//!
//! Players, the ball and both goal zones are hitboxes of this one shape.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in field units (top-left origin, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` box whose center lands on `center`
    pub fn centered_at(center: IVec2, w: i32, h: i32) -> Self {
        Self::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Move the box so its center is `center`, keeping its size
    pub fn recenter(&mut self, center: IVec2) {
        *self = Self::centered_at(center, self.w, self.h);
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Copy of the box shifted by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        let mut moved = *self;
        moved.translate(delta);
        moved
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if this box lies fully inside `bounds` (edges may touch)
    pub fn inside(&self, bounds: &Rect) -> bool {
        self.left() >= bounds.left()
            && self.right() <= bounds.right()
            && self.top() >= bounds.top()
            && self.bottom() <= bounds.bottom()
    }
}
