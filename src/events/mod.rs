//! Event types and observers used by the scene layer.
//!
//! This module groups the lifecycle events the host engine fires at the
//! scene and the observers that react to them. Events provide a decoupled
//! way for the host to drive camera construction-time concerns (restart,
//! screen dimension changes) without reaching into camera internals.
//!
//! Submodules:
//! - [`scene`] – restart and screen-resize notifications and their observers

pub mod scene;
