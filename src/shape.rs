//! Axis-aligned rectangle geometry.
//!
//! [`Rect`] is the geometry primitive shared by the camera viewport, the
//! boundary walls, and movement bounds. Edges are always derived from
//! `(x, y, width, height)`, never stored separately, so they can not drift
//! out of sync with the position.

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// Width and height are expected to be non-negative, but this is not
/// validated; degenerate zero-size rectangles are valid and used as
/// "stay on this line" movement bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge, an alias of `x`.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Top edge, an alias of `y`.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge, `x + width`.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge, `y + height`.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner as a vector.
    pub fn position(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Move the rectangle so its top-left corner sits at `position`.
    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Point containment, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// A uniformly-random point within the rectangle's bounds.
    ///
    /// Degenerate rectangles are fine: a zero-width rectangle yields points
    /// on a vertical line, a zero-size one always yields its own corner.
    pub fn random_point_on(&self) -> Vec2 {
        vec2(
            self.x + fastrand::f32() * self.width,
            self.y + fastrand::f32() * self.height,
        )
    }
}
