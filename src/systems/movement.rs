//! Movement integration system.
//!
//! Advances every actor with a position and a rigid body by its velocity,
//! recording the previous position first so camera policies and gameplay
//! code can reason about frame-to-frame motion.

use bevy_ecs::prelude::*;

use crate::components::active::Active;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate `pos += velocity * delta` for all active actors.
///
/// Pooled actors flagged `Active(false)` are skipped; their positions are
/// owned by the pool until reactivation.
pub fn movement(
    mut query: Query<(&mut MapPosition, &RigidBody, Option<&Active>)>,
    time: Res<WorldTime>,
) {
    for (mut position, rigidbody, active) in query.iter_mut() {
        if let Some(Active(false)) = active {
            continue;
        }
        position.prev = position.pos;
        let delta = rigidbody.velocity * time.delta;
        position.pos = position.pos + delta;
    }
}
