//! Screen size resource.
//!
//! Stores the current screen dimensions in pixels. The camera viewport is
//! sized from this on init and kept in step by the resize observer in
//! [`crate::events::scene`].

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
