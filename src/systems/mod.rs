//! Scene systems.
//!
//! This module groups the ECS systems that advance the simulation each
//! tick.
//!
//! Submodules overview
//! - [`camera`] – per-tick camera follow transition and stage synchronization
//! - [`group`] – count active entities for each tracked group
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod group;
pub mod movement;
pub mod time;
