//! Scenekit library.
//!
//! A 2D scene-composition layer: a camera viewport over an unbounded world,
//! four synthetic boundary walls that track the camera, group tagging for
//! actors, and the axis-aligned rectangle geometry used for view bounding.
//!
//! This module exposes the ECS components, resources, systems, and events
//! for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod resources;
pub mod shape;
pub mod systems;
