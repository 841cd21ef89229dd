//! Scene lifecycle events and observers.
//!
//! The host engine triggers [`SceneRestartEvent`] when the game restarts
//! and [`ScreenResizedEvent`] when the screen dimensions or scale change.
//! The observers here apply the corresponding camera lifecycle hooks:
//! restart zeroes the camera and disengages following; resize updates the
//! viewport and re-derives the wall offsets.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::camera::Camera;
use crate::resources::screensize::ScreenSize;
use crate::resources::stage::StageOffset;
use glam::Vec2;

/// Event fired when the game restarts.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneRestartEvent {}

/// Event fired when the screen dimensions change.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScreenResizedEvent {
    pub width: f32,
    pub height: f32,
}

/// Observer that resets the camera on restart.
///
/// Stops following, zeroes the camera position (cascading to the walls),
/// and re-centers the stage. Movement bounds are kept; a later follow call
/// decides whether to replace them.
pub fn observe_scene_restart(
    _trigger: On<SceneRestartEvent>,
    camera: Option<ResMut<Camera>>,
    stage: Option<ResMut<StageOffset>>,
) {
    let Some(mut camera) = camera else {
        warn!("SceneRestartEvent with no Camera resource");
        return;
    };

    info!("scene restart: resetting camera");
    camera.stop_following();
    camera.set_position(0.0, 0.0);

    if let Some(mut stage) = stage {
        stage.offset = Vec2::ZERO;
    }
}

/// Observer that resizes the camera when the screen dimensions change.
///
/// Updates [`ScreenSize`] and calls [`Camera::resize`], which recomputes
/// wall offsets and re-runs the position cascade so walls reflect the new
/// size immediately, even if the camera did not move.
pub fn observe_screen_resized(
    trigger: On<ScreenResizedEvent>,
    camera: Option<ResMut<Camera>>,
    screen: Option<ResMut<ScreenSize>>,
) {
    let event = trigger.event();

    let Some(mut camera) = camera else {
        warn!("ScreenResizedEvent with no Camera resource");
        return;
    };

    info!("screen resized to {}x{}", event.width, event.height);
    camera.resize(event.width, event.height);

    if let Some(mut screen) = screen {
        screen.w = event.width as i32;
        screen.h = event.height as i32;
    }
}
