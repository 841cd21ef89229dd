//! Scene tick integration tests for movement, camera follow, lifecycle
//! observers, and group counting.

use bevy_ecs::prelude::*;
use glam::vec2;

use scenekit::components::active::Active;
use scenekit::components::group::Group;
use scenekit::components::mapposition::MapPosition;
use scenekit::components::rigidbody::RigidBody;
use scenekit::components::viewextent::ViewExtent;
use scenekit::events::scene::{
    SceneRestartEvent, ScreenResizedEvent, observe_scene_restart, observe_screen_resized,
};
use scenekit::resources::background::{BackgroundConfig, BackgroundLayer};
use scenekit::resources::camera::Camera;
use scenekit::resources::group::TrackedGroups;
use scenekit::resources::screensize::ScreenSize;
use scenekit::resources::stage::StageOffset;
use scenekit::resources::worldtime::WorldTime;
use scenekit::shape::Rect;
use scenekit::systems::camera::{camera_update, stage_sync};
use scenekit::systems::group::update_group_counts;
use scenekit::systems::movement::movement;
use scenekit::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 100, h: 100 });
    world.insert_resource(Camera::new(100.0, 100.0));
    world.insert_resource(StageOffset::default());
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((camera_update, stage_sync).chain());
    schedule.run(world);
}

fn tick_group_counts(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_group_counts);
    schedule.run(world);
}

/// Walls must sit flush against their viewport edge, whatever was done to
/// the camera beforehand.
fn assert_walls_flush(camera: &Camera) {
    assert!(
        approx_eq(camera.left_wall().rect.right(), camera.left()),
        "left wall detached from viewport"
    );
    assert!(
        approx_eq(camera.right_wall().rect.left(), camera.right()),
        "right wall detached from viewport"
    );
    assert!(
        approx_eq(camera.top_wall().rect.bottom(), camera.top()),
        "top wall detached from viewport"
    );
    assert!(
        approx_eq(camera.bottom_wall().rect.top(), camera.bottom()),
        "bottom wall detached from viewport"
    );
}

// ==================== MOVEMENT TESTS ====================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.0);
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::with_velocity(10.0, 0.0),
        ))
        .id();

    update_world_time(&mut world, 0.5);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn movement_records_previous_position() {
    let mut world = make_world(0.0);
    let entity = world
        .spawn((
            MapPosition::new(3.0, 4.0),
            RigidBody::with_velocity(10.0, 10.0),
        ))
        .id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.prev.x, 3.0));
    assert!(approx_eq(pos.prev.y, 4.0));
    assert!(approx_eq(pos.pos.x, 13.0));
    assert!(approx_eq(pos.pos.y, 14.0));
}

#[test]
fn movement_skips_inactive_actors() {
    let mut world = make_world(0.0);
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::with_velocity(100.0, 100.0),
            Active(false),
        ))
        .id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

// ==================== CAMERA UPDATE TESTS ====================

#[test]
fn camera_without_target_does_not_move() {
    let mut world = make_world(1.0 / 60.0);
    tick_camera(&mut world);

    let camera = world.resource::<Camera>();
    assert!(approx_eq(camera.delta_x(), 0.0));
    assert!(approx_eq(camera.delta_y(), 0.0));
    assert!(!camera.has_changed());
}

#[test]
fn camera_clamps_target_to_bounds_right_edge() {
    let mut world = make_world(1.0 / 60.0);
    let actor = world.spawn((MapPosition::new(150.0, 0.0), Active(true))).id();

    world
        .resource_mut::<Camera>()
        .follow(actor, Rect::new(-100.0, 0.0, 200.0, 0.0));
    tick_camera(&mut world);

    let camera = world.resource::<Camera>();
    assert!(approx_eq(camera.x(), 50.0));
    assert!(camera.has_changed());
    assert_walls_flush(camera);
}

#[test]
fn camera_ignores_target_inside_bounds() {
    let mut world = make_world(1.0 / 60.0);
    let actor = world.spawn((MapPosition::new(30.0, 0.0), Active(true))).id();

    world
        .resource_mut::<Camera>()
        .follow(actor, Rect::new(-100.0, 0.0, 200.0, 0.0));
    tick_camera(&mut world);

    let camera = world.resource::<Camera>();
    assert!(approx_eq(camera.x(), 0.0));
    assert!(!camera.has_changed());
}

#[test]
fn camera_disengages_from_inactive_target() {
    let mut world = make_world(1.0 / 60.0);
    let actor = world
        .spawn((MapPosition::new(500.0, 500.0), Active(true)))
        .id();

    world
        .resource_mut::<Camera>()
        .follow(actor, Rect::new(0.0, 0.0, 0.0, 0.0));
    world.get_mut::<Active>(actor).unwrap().0 = false;
    tick_camera(&mut world);

    let camera = world.resource::<Camera>();
    assert!(camera.following().is_none());
    assert!(approx_eq(camera.x(), 0.0));
    assert!(approx_eq(camera.y(), 0.0));
    assert!(!camera.has_changed());
}

#[test]
fn camera_disengages_from_despawned_target() {
    let mut world = make_world(1.0 / 60.0);
    let actor = world.spawn((MapPosition::new(0.0, 0.0), Active(true))).id();

    world
        .resource_mut::<Camera>()
        .follow(actor, Rect::new(0.0, 0.0, 100.0, 100.0));
    world.despawn(actor);
    tick_camera(&mut world);

    let camera = world.resource::<Camera>();
    assert!(camera.following().is_none());
    assert!(!camera.has_changed());
}

#[test]
fn camera_tracks_moving_actor_and_keeps_walls_synced() {
    let mut world = make_world(0.0);
    let actor = world
        .spawn((
            MapPosition::new(50.0, 50.0),
            RigidBody::with_velocity(0.0, -30.0),
            Active(true),
        ))
        .id();

    // Pin the actor to the vertical center line, jump-game style.
    let bounds = {
        let camera = world.resource::<Camera>();
        camera.default_movement_bounds(scenekit::resources::background::ScrollAxes {
            x: false,
            y: true,
        })
    };
    world.resource_mut::<Camera>().follow(actor, bounds);

    for _ in 0..10 {
        update_world_time(&mut world, 0.1);
        tick_movement(&mut world);
        tick_camera(&mut world);
        assert_walls_flush(world.resource::<Camera>());
    }

    // Actor climbed 30 units; the camera followed it upward, holding it on
    // the center line.
    let camera = world.resource::<Camera>();
    let pos = world.get::<MapPosition>(actor).unwrap();
    assert!(approx_eq(pos.pos.y, 20.0));
    assert!(approx_eq(camera.y(), pos.pos.y - 50.0));
    assert!(approx_eq(camera.x(), 0.0));
}

// ==================== STAGE SYNC TESTS ====================

#[test]
fn stage_mirrors_camera_position() {
    let mut world = make_world(1.0 / 60.0);
    let actor = world
        .spawn((MapPosition::new(150.0, 120.0), Active(true)))
        .id();

    world
        .resource_mut::<Camera>()
        .follow(actor, Rect::new(0.0, 0.0, 0.0, 0.0));
    tick_camera(&mut world);

    let camera = world.resource::<Camera>();
    let stage = world.resource::<StageOffset>();
    assert!(approx_eq(stage.offset.x, -camera.x()));
    assert!(approx_eq(stage.offset.y, -camera.y()));
}

// ==================== LIFECYCLE OBSERVER TESTS ====================

#[test]
fn restart_resets_camera_and_stage() {
    let mut world = make_world(1.0 / 60.0);
    world.add_observer(observe_scene_restart);
    world.flush();

    let actor = world.spawn((MapPosition::new(0.0, 0.0), Active(true))).id();
    {
        let mut camera = world.resource_mut::<Camera>();
        camera.follow(actor, Rect::new(0.0, 0.0, 100.0, 100.0));
        camera.set_position(40.0, -70.0);
    }
    world.resource_mut::<StageOffset>().offset = vec2(-40.0, 70.0);

    world.trigger(SceneRestartEvent {});
    world.flush();

    let camera = world.resource::<Camera>();
    assert!(camera.following().is_none());
    assert!(approx_eq(camera.x(), 0.0));
    assert!(approx_eq(camera.y(), 0.0));
    assert_walls_flush(camera);

    let stage = world.resource::<StageOffset>();
    assert!(approx_eq(stage.offset.x, 0.0));
    assert!(approx_eq(stage.offset.y, 0.0));
}

#[test]
fn resize_updates_camera_and_screen_size() {
    let mut world = make_world(1.0 / 60.0);
    world.add_observer(observe_screen_resized);
    world.flush();

    world.resource_mut::<Camera>().set_position(25.0, 35.0);

    world.trigger(ScreenResizedEvent {
        width: 640.0,
        height: 360.0,
    });
    world.flush();

    let camera = world.resource::<Camera>();
    assert!(approx_eq(camera.width(), 640.0));
    assert!(approx_eq(camera.height(), 360.0));
    // Position survives the resize, and walls pick up the new offsets.
    assert!(approx_eq(camera.x(), 25.0));
    assert!(approx_eq(camera.y(), 35.0));
    assert_walls_flush(camera);

    let screen = world.resource::<ScreenSize>();
    assert_eq!(screen.w, 640);
    assert_eq!(screen.h, 360);
}

// ==================== FOLLOW DEFAULT BOUNDS TESTS ====================

#[test]
fn default_bounds_come_from_background_scroll_flags() {
    let mut world = make_world(1.0 / 60.0);
    let mut background = BackgroundConfig::default();
    background.push_layer(BackgroundLayer {
        x_can_spawn: false,
        y_can_spawn: true,
    });
    world.insert_resource(background);

    let actor = world.spawn((MapPosition::new(50.0, 50.0), Active(true))).id();

    let scroll = world.resource::<BackgroundConfig>().scroll_axes();
    let mut camera = world.resource_mut::<Camera>();
    camera.follow_with_default_bounds(actor, scroll);

    let bounds = camera.movement_bounds().unwrap();
    // x is not scrollable: full viewport span. y is: centered line.
    assert!(approx_eq(bounds.x, 0.0));
    assert!(approx_eq(bounds.width, 100.0));
    assert!(approx_eq(bounds.y, 50.0));
    assert!(approx_eq(bounds.height, 0.0));
}

// ==================== GROUP COUNT TESTS ====================

#[test]
fn group_counts_track_active_entities() {
    let mut world = make_world(1.0 / 60.0);
    let mut tracked = TrackedGroups::default();
    tracked.add_group("platforms");
    tracked.add_group("enemies");
    world.insert_resource(tracked);

    world.spawn((Group::new("platforms"), Active(true)));
    world.spawn((Group::new("platforms"), Active(false)));
    world.spawn(Group::new("platforms"));
    world.spawn(Group::new("untracked"));

    tick_group_counts(&mut world);

    let tracked = world.resource::<TrackedGroups>();
    assert_eq!(tracked.count("platforms"), Some(2));
    assert_eq!(tracked.count("enemies"), Some(0));
    assert_eq!(tracked.count("untracked"), None);
}

// ==================== POLICY + TICK TESTS ====================

#[test]
fn bounced_actor_moves_back_into_view_next_tick() {
    let mut world = make_world(0.0);
    let actor = world
        .spawn((
            MapPosition::new(88.0, 50.0),
            RigidBody::with_velocity(40.0, 0.0),
            ViewExtent::new(10.0, 10.0),
            Active(true),
        ))
        .id();

    update_world_time(&mut world, 0.1);
    tick_movement(&mut world);

    // View now reaches the right edge; gameplay applies the bounce policy.
    let camera = world.resource::<Camera>().clone();
    {
        let pos = *world.get::<MapPosition>(actor).unwrap();
        let view = *world.get::<ViewExtent>(actor).unwrap();
        let mut body = world.get_mut::<RigidBody>(actor).unwrap();
        assert!(camera.bounce_x(&pos, &view, &mut body));
        assert!(approx_eq(body.velocity.x, -40.0));
    }

    tick_movement(&mut world);
    let pos = world.get::<MapPosition>(actor).unwrap();
    assert!(approx_eq(pos.pos.x, 88.0));

    // Moving away from the wall now; a second bounce check does not fire.
    let pos = *world.get::<MapPosition>(actor).unwrap();
    let view = *world.get::<ViewExtent>(actor).unwrap();
    let mut body = *world.get::<RigidBody>(actor).unwrap();
    assert!(!camera.bounce_x(&pos, &view, &mut body));
    assert!(approx_eq(body.velocity.x, -40.0));
}

#[test]
fn wrapped_actor_reenters_from_the_other_side() {
    let mut world = make_world(0.0);
    let actor = world
        .spawn((
            MapPosition::new(95.0, 50.0),
            RigidBody::with_velocity(100.0, 0.0),
            ViewExtent::new(10.0, 10.0),
            Active(true),
        ))
        .id();

    update_world_time(&mut world, 0.1);
    tick_movement(&mut world);

    let camera = world.resource::<Camera>().clone();
    {
        let view = *world.get::<ViewExtent>(actor).unwrap();
        let mut pos = world.get_mut::<MapPosition>(actor).unwrap();
        assert!(camera.wrap_x(&mut pos, &view));
        // Flush against the left edge, about to scroll on.
        assert!(approx_eq(view.max_x(pos.pos), camera.left()));
        // Re-applying the policy immediately is a no-op.
        assert!(!camera.wrap_x(&mut pos, &view));
    }
}
