//! Background layer configuration resource.
//!
//! Describes the parallax background layers of the current scene. The
//! camera only consumes one bit per axis from this: whether any layer
//! scrolls on that axis, which decides the default movement bounds when
//! [`Camera::follow_with_default_bounds`](crate::resources::camera::Camera::follow_with_default_bounds)
//! is used. Layer definitions are data-driven and can be loaded from JSON.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Per-axis scrollability, OR-ed over all background layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollAxes {
    pub x: bool,
    pub y: bool,
}

/// One background layer's spawn/scroll flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BackgroundLayer {
    /// Whether this layer repeats/scrolls horizontally.
    #[serde(default)]
    pub x_can_spawn: bool,
    /// Whether this layer repeats/scrolls vertically.
    #[serde(default)]
    pub y_can_spawn: bool,
}

/// Resource holding the scene's background layer configuration.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackgroundConfig {
    pub layers: Vec<BackgroundLayer>,
}

impl BackgroundConfig {
    /// Parse a layer list from a JSON document.
    ///
    /// Returns an error string if the document cannot be parsed.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse background config: {}", e))
    }

    /// Add a layer to the configuration.
    pub fn push_layer(&mut self, layer: BackgroundLayer) {
        self.layers.push(layer);
    }

    /// Per-axis scrollability of the scene, OR-ed over all layers.
    ///
    /// A scene with no layers scrolls on neither axis.
    pub fn scroll_axes(&self) -> ScrollAxes {
        let mut axes = ScrollAxes::default();
        for layer in &self.layers {
            axes.x = axes.x || layer.x_can_spawn;
            axes.y = axes.y || layer.y_can_spawn;
        }
        axes
    }
}
