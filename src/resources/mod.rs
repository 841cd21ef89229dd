//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the camera and its walls, timing,
//! scene configuration, and group tracking. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `background` – background layer scroll flags used for default follow bounds
//! - `camera` – the scene camera, its boundary walls, and follow state
//! - `group` – tracked group names and their live entity counts
//! - `sceneconfig` – screen dimensions and loop settings loaded from an INI file
//! - `screensize` – current framebuffer dimensions in pixels
//! - `stage` – visual scroll-layer offset synchronized to the camera
//! - `worldtime` – simulation time and delta

pub mod background;
pub mod camera;
pub mod group;
pub mod sceneconfig;
pub mod screensize;
pub mod stage;
pub mod worldtime;
