//! Visual scroll-layer offset resource.
//!
//! The stage is the root visual layer the scene renders into. Scrolling is
//! implemented by offsetting the stage opposite to the camera: the
//! [`stage_sync`](crate::systems::camera::stage_sync) system keeps
//! `offset == -camera.position` every tick, after the camera update.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Offset applied to the root visual layer, in world units.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct StageOffset {
    pub offset: Vec2,
}
