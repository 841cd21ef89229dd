//! Simulation time resource.

use bevy_ecs::prelude::Resource;

/// Simulation clock: elapsed time, last frame delta, and time scale.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total scaled time elapsed, in seconds.
    pub elapsed: f32,
    /// Scaled delta of the last frame, in seconds.
    pub delta: f32,
    /// Multiplier applied to incoming frame deltas.
    pub time_scale: f32,
    /// Number of completed simulation frames.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Builder method to set the time scale.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
