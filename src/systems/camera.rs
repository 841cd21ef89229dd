//! Camera tick systems.
//!
//! [`camera_update`] runs the camera's per-tick state transition and must
//! execute once per simulation tick, before any system that reads
//! camera-derived positions. [`stage_sync`] then mirrors the camera into
//! the visual scroll layer.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::active::Active;
use crate::components::mapposition::MapPosition;
use crate::resources::camera::Camera;
use crate::resources::stage::StageOffset;

/// Per-tick camera update.
///
/// Records the previous position, then:
/// - not following: the camera does not move;
/// - followed actor despawned or inactive: silently stop following, this
///   tick performs no further movement;
/// - otherwise: clamp the camera so the actor stays inside the movement
///   bounds, per axis. Wall positions cascade inside the camera mutators,
///   so walls are correct when this system returns.
pub fn camera_update(
    mut camera: ResMut<Camera>,
    actors: Query<(&MapPosition, Option<&Active>)>,
) {
    camera.begin_frame();

    let Some(target) = camera.following() else {
        return;
    };

    match actors.get(target) {
        Ok((position, active)) if active.map(|a| a.0).unwrap_or(true) => {
            let target_pos = position.pos;
            camera.track(target_pos);
        }
        _ => {
            // Despawned and deactivated both read as inactive; this is a
            // normal transition, not a fault.
            debug!("camera target {target:?} no longer active, disengaging");
            camera.stop_following();
        }
    }
}

/// Mirror the camera position into the visual scroll layer.
///
/// Runs after [`camera_update`] so the stage never lags the camera by a
/// tick.
pub fn stage_sync(camera: Res<Camera>, mut stage: ResMut<StageOffset>) {
    stage.offset = -camera.position();
}
