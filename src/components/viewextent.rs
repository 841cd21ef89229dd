//! Rendered bounding box of an actor.
//!
//! The view extent is the axis-aligned box the actor occupies on screen,
//! possibly offset from its logical [`MapPosition`](super::mapposition::MapPosition).
//! Camera boundary policies (bounce, wrap, fully-on) compare this box, not
//! the logical position, against the viewport edges.

use bevy_ecs::prelude::Component;
use glam::{Vec2, vec2};

/// Rendered bounding box relative to an actor's logical position.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct ViewExtent {
    /// Size of the rendered box in world units.
    pub size: Vec2,
    /// Offset of the box's top-left corner from the logical position.
    pub offset: Vec2,
}

impl ViewExtent {
    /// Create a ViewExtent with given size and zero offset.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: vec2(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Modify ViewExtent with a visual offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Left edge of the view for an actor at `position`.
    pub fn min_x(&self, position: Vec2) -> f32 {
        position.x + self.offset.x
    }

    /// Right edge of the view for an actor at `position`.
    pub fn max_x(&self, position: Vec2) -> f32 {
        self.min_x(position) + self.size.x
    }

    /// Top edge of the view for an actor at `position`.
    pub fn min_y(&self, position: Vec2) -> f32 {
        position.y + self.offset.y
    }

    /// Bottom edge of the view for an actor at `position`.
    pub fn max_y(&self, position: Vec2) -> f32 {
        self.min_y(position) + self.size.y
    }

    /// Returns (min, max) of the view AABB for a given actor position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let min = position + self.offset;
        (min, min + self.size)
    }
}
