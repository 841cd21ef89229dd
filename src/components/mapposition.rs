//! World-space position component.
//!
//! Stores the actor's logical position and the position it had after the
//! previous movement integration. The previous position is what
//! velocity-dependent gameplay code compares against, so camera policies
//! that teleport-free reposition an actor (fully-on) shift both fields by
//! the same delta.

use bevy_ecs::prelude::Component;
use glam::{Vec2, vec2};

/// World-space position (pivot) of an actor.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    /// Current position in world units.
    pub pos: Vec2,
    /// Position at the end of the previous movement integration.
    pub prev: Vec2,
}

impl MapPosition {
    /// Create a position with `prev` starting at the same point.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: vec2(x, y),
            prev: vec2(x, y),
        }
    }
}
