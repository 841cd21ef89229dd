//! Scenekit headless demo.
//!
//! Drives the scene-composition layer without a renderer: builds an ECS
//! world, sizes a camera from the scene configuration, spawns a drifting
//! actor, follows it, and runs a fixed number of simulation ticks while
//! logging what the camera does.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 300
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::vec2;
use std::path::PathBuf;

use scenekit::components::active::Active;
use scenekit::components::group::Group;
use scenekit::components::mapposition::MapPosition;
use scenekit::components::rigidbody::RigidBody;
use scenekit::components::viewextent::ViewExtent;
use scenekit::events::scene::{observe_scene_restart, observe_screen_resized};
use scenekit::resources::background::{BackgroundConfig, BackgroundLayer};
use scenekit::resources::camera::Camera;
use scenekit::resources::group::TrackedGroups;
use scenekit::resources::sceneconfig::SceneConfig;
use scenekit::resources::screensize::ScreenSize;
use scenekit::resources::stage::StageOffset;
use scenekit::resources::worldtime::WorldTime;
use scenekit::systems::camera::{camera_update, stage_sync};
use scenekit::systems::group::update_group_counts;
use scenekit::systems::movement::movement;
use scenekit::systems::time::update_world_time;

/// Scenekit demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the scenekit scene-composition layer")]
struct Cli {
    /// Path to the scene INI configuration.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of simulation frames to run.
    #[arg(long, default_value_t = 300)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // SceneConfig - load from the INI file, fall back to defaults
    let mut config = match cli.config {
        Some(path) => SceneConfig::with_path(path),
        None => SceneConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let (width, height) = config.screen_size();
    log::info!("scenekit demo: {}x{} viewport, {} frames", width, height, cli.frames);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: width as i32,
        h: height as i32,
    });
    world.insert_resource(Camera::new(width as f32, height as f32));
    world.insert_resource(StageOffset::default());

    // A vertically-scrolling background, jump-game style.
    let mut background = BackgroundConfig::default();
    background.push_layer(BackgroundLayer {
        x_can_spawn: false,
        y_can_spawn: true,
    });
    world.insert_resource(background);

    let mut tracked = TrackedGroups::default();
    tracked.add_group("player");
    world.insert_resource(tracked);

    world.insert_resource(config);

    world.add_observer(observe_scene_restart);
    world.add_observer(observe_screen_resized);
    world.flush();

    // --------------- Demo actor ---------------
    let player = world
        .spawn((
            Group::new("player"),
            MapPosition::new(width as f32 / 2.0, height as f32 / 2.0),
            RigidBody::with_velocity(40.0, -120.0),
            ViewExtent::new(32.0, 32.0).with_offset(vec2(-16.0, -16.0)),
            Active(true),
        ))
        .id();

    {
        let scroll = world.resource::<BackgroundConfig>().scroll_axes();
        let mut camera = world.resource_mut::<Camera>();
        camera.follow_with_default_bounds(player, scroll);
    }

    // --------------- Main loop ---------------
    let dt = 1.0 / config_fps(&world);
    let mut schedule = Schedule::default();
    schedule.add_systems((movement, camera_update, stage_sync, update_group_counts).chain());

    for frame in 0..cli.frames {
        update_world_time(&mut world, dt);
        schedule.run(&mut world);

        // Keep the actor on screen horizontally, torus-style.
        {
            let camera = world.resource::<Camera>().clone();
            let view = world.get::<ViewExtent>(player).copied();
            if let Some(view) = view {
                if let Some(mut pos) = world.get_mut::<MapPosition>(player) {
                    if camera.wrap_x(&mut pos, &view) {
                        log::debug!("frame {frame}: wrapped player around the x axis");
                    }
                }
            }
        }

        if frame % 60 == 0 {
            let camera = world.resource::<Camera>();
            log::info!(
                "frame {frame}: camera at ({:.1}, {:.1}), delta ({:.2}, {:.2})",
                camera.x(),
                camera.y(),
                camera.delta_x(),
                camera.delta_y()
            );
        }
    }

    let camera = world.resource::<Camera>();
    log::info!(
        "done after {} frames, camera ended at ({:.1}, {:.1})",
        cli.frames,
        camera.x(),
        camera.y()
    );
}

fn config_fps(world: &World) -> f32 {
    let fps = world.resource::<SceneConfig>().target_fps;
    if fps == 0 { 60.0 } else { fps as f32 }
}
