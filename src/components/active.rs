//! Liveness flag for pooled actors.
//!
//! Actor pools deactivate entities instead of despawning them, so "alive"
//! means the entity exists *and* its [`Active`] flag is true. The camera
//! follow logic and the group counting system both treat a missing
//! component as active; only an explicit `Active(false)` marks an actor
//! as recycled.

use bevy_ecs::prelude::Component;

/// Liveness flag. `Active(false)` marks a pooled, currently unused actor.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Active(true)
    }
}
