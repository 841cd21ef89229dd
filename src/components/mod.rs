//! ECS components for actors.
//!
//! This module groups all component types that can be attached to actor
//! entities in the scene world. Components define the data the camera and
//! simulation systems consume: position, velocity, view extent, liveness,
//! and grouping.
//!
//! Submodules overview:
//! - [`active`] – liveness flag for pooled actors
//! - [`group`] – tag component for grouping actors by name
//! - [`mapposition`] – world-space position plus previous-frame position
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`viewextent`] – rendered bounding box relative to the logical position

pub mod active;
pub mod group;
pub mod mapposition;
pub mod rigidbody;
pub mod viewextent;
