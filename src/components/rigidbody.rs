//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity consumed by the
//! movement system and negated per-axis by the camera's bounce policy.

use bevy_ecs::prelude::Component;
use glam::{Vec2, vec2};

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody with the given velocity.
    pub fn with_velocity(vx: f32, vy: f32) -> Self {
        Self {
            velocity: vec2(vx, vy),
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}
