//! Scene camera resource.
//!
//! The [`Camera`] is the rectangular region of world space currently visible
//! to the player. It owns four oversized boundary walls whose positions are
//! slaved to the camera, an optional followed actor, and the movement bounds
//! that actor must stay inside. It also provides the per-axis boundary
//! policies (bounce, wrap, fully-on) gameplay code applies to actors that
//! reach a viewport edge.
//!
//! # Wall sync invariant
//!
//! Every wall's position equals `camera position + wall offset` at all
//! times. The only mutators of camera position are [`Camera::set_x`],
//! [`Camera::set_y`], and [`Camera::set_position`]; each repositions the
//! walls in the same call, so no caller can observe camera and walls out of
//! sync. External code must never move a wall directly, which is why the
//! wall array is only exposed by shared reference.
//!
//! # Related
//!
//! - [`crate::systems::camera::camera_update`] – per-tick follow transition
//! - [`crate::events::scene`] – restart/resize lifecycle observers

use bevy_ecs::prelude::{Entity, Resource};
use glam::{Vec2, vec2};
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::viewextent::ViewExtent;
use crate::resources::background::ScrollAxes;
use crate::shape::Rect;

/// Extent of each boundary wall on both axes. Large enough that no actor
/// at realistic world coordinates can pass beyond a wall undetected.
pub const MAX_SIZE: f32 = 32767.0;

/// Identity of a boundary wall relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Left,
    Top,
    Right,
    Bottom,
}

impl WallSide {
    /// All four sides, in wall-array order.
    pub const ALL: [WallSide; 4] = [
        WallSide::Left,
        WallSide::Top,
        WallSide::Right,
        WallSide::Bottom,
    ];

    /// Lowercase name of the side.
    pub fn as_str(&self) -> &'static str {
        match self {
            WallSide::Left => "left",
            WallSide::Top => "top",
            WallSide::Right => "right",
            WallSide::Bottom => "bottom",
        }
    }

    fn index(&self) -> usize {
        match self {
            WallSide::Left => 0,
            WallSide::Top => 1,
            WallSide::Right => 2,
            WallSide::Bottom => 3,
        }
    }
}

/// A collidable element representing the entire space beyond one edge of
/// the camera.
///
/// Walls have no update logic of their own; the camera repositions them
/// whenever its own position or size changes.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    /// Oversized collision rectangle ([`MAX_SIZE`] on both axes).
    pub rect: Rect,
    /// Which viewport edge this wall stands beyond.
    pub side: WallSide,
    /// Walls are never moved by collision resolution.
    pub fixed: bool,
}

impl Wall {
    fn new(side: WallSide) -> Self {
        Self {
            rect: Rect::from_size(MAX_SIZE, MAX_SIZE),
            side,
            fixed: true,
        }
    }
}

/// The scene camera.
///
/// Origin at top left; all coordinates are world positions, not screen
/// positions. Created once per session, resized on screen dimension
/// changes, reset on restart, and updated once per simulation tick by
/// [`camera_update`](crate::systems::camera::camera_update).
#[derive(Resource, Debug, Clone)]
pub struct Camera {
    viewport: Rect,
    prev: Vec2,
    /// Per-wall position relative to the camera's own position, in
    /// wall-array order. Recomputed on resize.
    wall_offsets: [Vec2; 4],
    walls: [Wall; 4],
    following: Option<Entity>,
    movement_bounds: Option<Rect>,
}

impl Camera {
    /// Create a camera sized to the screen, positioned at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        let mut camera = Self {
            viewport: Rect::from_size(width, height),
            prev: Vec2::ZERO,
            wall_offsets: [Vec2::ZERO; 4],
            walls: WallSide::ALL.map(Wall::new),
            following: None,
            movement_bounds: None,
        };
        camera.resize(width, height);
        camera
    }

    /// Update the camera with a new width and height.
    ///
    /// Each wall extends from one edge of the viewport outward, with the
    /// perpendicular axis centered so the walls overlap at the corners and
    /// never leave a seam. Non-positive sizes are accepted and produce a
    /// degenerate viewport; callers are trusted.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;

        self.wall_offsets[WallSide::Left.index()] = vec2(-MAX_SIZE, -MAX_SIZE / 2.0);
        self.wall_offsets[WallSide::Top.index()] = vec2(-MAX_SIZE / 2.0, -MAX_SIZE);
        self.wall_offsets[WallSide::Right.index()] = vec2(width, -MAX_SIZE / 2.0);
        self.wall_offsets[WallSide::Bottom.index()] = vec2(-MAX_SIZE / 2.0, height);

        // Re-run the cascade so wall positions pick up the new offsets.
        self.set_position(self.viewport.x, self.viewport.y);
    }

    // ---------------------------------------------------------------
    // Viewport accessors
    // ---------------------------------------------------------------

    /// World-space x of the viewport's top-left corner.
    pub fn x(&self) -> f32 {
        self.viewport.x
    }

    /// World-space y of the viewport's top-left corner.
    pub fn y(&self) -> f32 {
        self.viewport.y
    }

    /// Viewport width.
    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    /// Viewport height.
    pub fn height(&self) -> f32 {
        self.viewport.height
    }

    /// Left edge of the viewport.
    pub fn left(&self) -> f32 {
        self.viewport.left()
    }

    /// Top edge of the viewport.
    pub fn top(&self) -> f32 {
        self.viewport.top()
    }

    /// Right edge of the viewport.
    pub fn right(&self) -> f32 {
        self.viewport.right()
    }

    /// Bottom edge of the viewport.
    pub fn bottom(&self) -> f32 {
        self.viewport.bottom()
    }

    /// Top-left corner as a vector.
    pub fn position(&self) -> Vec2 {
        self.viewport.position()
    }

    /// The viewport rectangle.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Set the camera x and reposition all four walls on that axis.
    pub fn set_x(&mut self, x: f32) {
        self.viewport.x = x;
        for wall in self.walls.iter_mut() {
            wall.rect.x = self.wall_offsets[wall.side.index()].x + x;
        }
    }

    /// Set the camera y and reposition all four walls on that axis.
    pub fn set_y(&mut self, y: f32) {
        self.viewport.y = y;
        for wall in self.walls.iter_mut() {
            wall.rect.y = self.wall_offsets[wall.side.index()].y + y;
        }
    }

    /// Set both camera coordinates, cascading to the walls.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.set_x(x);
        self.set_y(y);
    }

    /// Delta x since the start of the last update.
    pub fn delta_x(&self) -> f32 {
        self.viewport.x - self.prev.x
    }

    /// Delta y since the start of the last update.
    pub fn delta_y(&self) -> f32 {
        self.viewport.y - self.prev.y
    }

    /// Whether the camera position has moved since the last update began.
    pub fn has_changed(&self) -> bool {
        self.prev.x != self.viewport.x || self.prev.y != self.viewport.y
    }

    /// Translate a screen-space point to world coordinates.
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        point + self.position()
    }

    // ---------------------------------------------------------------
    // Walls
    // ---------------------------------------------------------------

    /// All four walls, in [`WallSide::ALL`] order.
    pub fn walls(&self) -> &[Wall; 4] {
        &self.walls
    }

    /// The wall standing beyond the given viewport edge.
    pub fn wall(&self, side: WallSide) -> &Wall {
        &self.walls[side.index()]
    }

    /// The wall covering the space left of the camera.
    pub fn left_wall(&self) -> &Wall {
        self.wall(WallSide::Left)
    }

    /// The wall covering the space above the camera.
    pub fn top_wall(&self) -> &Wall {
        self.wall(WallSide::Top)
    }

    /// The wall covering the space right of the camera.
    pub fn right_wall(&self) -> &Wall {
        self.wall(WallSide::Right)
    }

    /// The wall covering the space below the camera.
    pub fn bottom_wall(&self) -> &Wall {
        self.wall(WallSide::Bottom)
    }

    // ---------------------------------------------------------------
    // Following
    // ---------------------------------------------------------------

    /// The actor currently being followed, if any.
    pub fn following(&self) -> Option<Entity> {
        self.following
    }

    /// The movement bounds the followed actor is held inside, if any.
    pub fn movement_bounds(&self) -> Option<Rect> {
        self.movement_bounds
    }

    /// Follow `target`, keeping it inside `bounds`.
    ///
    /// `bounds` is expressed in camera-relative coordinates. A degenerate
    /// bound (zero width or height) pins the actor to a line; the actor
    /// drifting outside the bounds moves the camera, never the actor.
    pub fn follow(&mut self, target: Entity, bounds: Rect) {
        debug!("camera following {target:?} inside {bounds:?}");
        self.following = Some(target);
        self.movement_bounds = Some(bounds);
    }

    /// Follow `target` with bounds derived from the background scroll
    /// configuration: a scrollable axis pins the actor to the viewport
    /// center line, a non-scrollable axis lets it roam the full viewport.
    pub fn follow_with_default_bounds(&mut self, target: Entity, scroll: ScrollAxes) {
        let bounds = self.default_movement_bounds(scroll);
        self.follow(target, bounds);
    }

    /// The default movement bounds for the given scroll configuration.
    pub fn default_movement_bounds(&self, scroll: ScrollAxes) -> Rect {
        Rect {
            x: if scroll.x { self.width() / 2.0 } else { 0.0 },
            y: if scroll.y { self.height() / 2.0 } else { 0.0 },
            width: if scroll.x { 0.0 } else { self.width() },
            height: if scroll.y { 0.0 } else { self.height() },
        }
    }

    /// Stop the camera from following an actor. No-op when not following.
    pub fn stop_following(&mut self) {
        self.following = None;
    }

    /// Remove the current movement bounds. No-op when none are set.
    pub fn clear_movement_bounds(&mut self) {
        self.movement_bounds = None;
    }

    /// Record the current position as the previous-tick position.
    ///
    /// Called once at the start of every update; [`Camera::delta_x`],
    /// [`Camera::delta_y`], and [`Camera::has_changed`] are relative to
    /// this snapshot.
    pub fn begin_frame(&mut self) {
        self.prev = self.position();
    }

    /// Move the camera so the followed actor at `target` sits inside the
    /// movement bounds, clamping each axis independently.
    ///
    /// Without movement bounds this is a no-op: following without bounds
    /// does not move the camera. Updating x/y here cascades to the walls,
    /// so they are correct by the time the update returns.
    pub fn track(&mut self, target: Vec2) {
        let Some(bounds) = self.movement_bounds else {
            return;
        };

        let rel = target - self.position();

        if rel.x < bounds.x {
            self.set_x(target.x - bounds.x);
        } else if rel.x > bounds.right() {
            self.set_x(target.x - bounds.right());
        }

        if rel.y < bounds.y {
            self.set_y(target.y - bounds.y);
        } else if rel.y > bounds.bottom() {
            self.set_y(target.y - bounds.bottom());
        }
    }

    // ---------------------------------------------------------------
    // Boundary policies
    // ---------------------------------------------------------------

    /// Invert the actor's velocity on each axis whose wall its view has
    /// reached. Returns whether a bounce occurred on either axis.
    ///
    /// An actor exactly flush with an edge counts as touching it.
    pub fn bounce(&self, pos: &MapPosition, view: &ViewExtent, body: &mut RigidBody) -> bool {
        let flag_x = self.bounce_x(pos, view, body);
        let flag_y = self.bounce_y(pos, view, body);
        flag_x || flag_y
    }

    /// [`Camera::bounce`] in only the x direction.
    pub fn bounce_x(&self, pos: &MapPosition, view: &ViewExtent, body: &mut RigidBody) -> bool {
        if view.max_x(pos.pos) >= self.right() || view.min_x(pos.pos) <= self.left() {
            body.velocity.x = -body.velocity.x;
            return true;
        }
        false
    }

    /// [`Camera::bounce`] in only the y direction.
    pub fn bounce_y(&self, pos: &MapPosition, view: &ViewExtent, body: &mut RigidBody) -> bool {
        if view.max_y(pos.pos) >= self.bottom() || view.min_y(pos.pos) <= self.top() {
            body.velocity.y = -body.velocity.y;
            return true;
        }
        false
    }

    /// Teleport the actor to the opposite side of the screen on each axis
    /// whose view has moved entirely past an edge. Returns whether a wrap
    /// occurred on either axis.
    pub fn wrap(&self, pos: &mut MapPosition, view: &ViewExtent) -> bool {
        let flag_x = self.wrap_x(pos, view);
        let flag_y = self.wrap_y(pos, view);
        flag_x || flag_y
    }

    /// [`Camera::wrap`] in only the x direction.
    ///
    /// The comparisons are strict: the view must be entirely past the edge,
    /// so an actor just wrapped flush against an edge is not wrapped again.
    pub fn wrap_x(&self, pos: &mut MapPosition, view: &ViewExtent) -> bool {
        if view.min_x(pos.pos) > self.right() {
            pos.pos.x = self.left() - view.offset.x - view.size.x;
            return true;
        } else if view.max_x(pos.pos) < self.x() {
            pos.pos.x = self.right() - view.offset.x;
            return true;
        }
        false
    }

    /// [`Camera::wrap`] in only the y direction.
    pub fn wrap_y(&self, pos: &mut MapPosition, view: &ViewExtent) -> bool {
        if view.min_y(pos.pos) > self.bottom() {
            pos.pos.y = self.top() - view.offset.y - view.size.y;
            return true;
        } else if view.max_y(pos.pos) < self.top() {
            pos.pos.y = self.bottom() - view.offset.y;
            return true;
        }
        false
    }

    /// Push the actor back inside the viewport on each axis where its view
    /// sticks out, shifting the recorded previous position by the same
    /// delta so velocity-dependent code does not observe a teleport.
    /// Returns whether a correction occurred on either axis.
    pub fn fully_on(&self, pos: &mut MapPosition, view: &ViewExtent) -> bool {
        let flag_x = self.fully_on_x(pos, view);
        let flag_y = self.fully_on_y(pos, view);
        flag_x || flag_y
    }

    /// [`Camera::fully_on`] in only the x direction.
    pub fn fully_on_x(&self, pos: &mut MapPosition, view: &ViewExtent) -> bool {
        let actor_left = view.min_x(pos.pos);
        if actor_left < self.left() {
            let dx = self.left() - actor_left;
            pos.pos.x += dx;
            pos.prev.x += dx;
            return true;
        }

        let actor_right = view.max_x(pos.pos);
        if actor_right > self.right() {
            let dx = self.right() - actor_right;
            pos.pos.x += dx;
            pos.prev.x += dx;
            return true;
        }
        false
    }

    /// [`Camera::fully_on`] in only the y direction.
    pub fn fully_on_y(&self, pos: &mut MapPosition, view: &ViewExtent) -> bool {
        let actor_top = view.min_y(pos.pos);
        if actor_top < self.top() {
            let dy = self.top() - actor_top;
            pos.pos.y += dy;
            pos.prev.y += dy;
            return true;
        }

        let actor_bottom = view.max_y(pos.pos);
        if actor_bottom > self.bottom() {
            let dy = self.bottom() - actor_bottom;
            pos.pos.y += dy;
            pos.prev.y += dy;
            return true;
        }
        false
    }
}
