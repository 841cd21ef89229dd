//! Scene configuration resource.
//!
//! Manages scene settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 576
//! height = 1024
//!
//! [loop]
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 576;
const DEFAULT_SCREEN_HEIGHT: u32 = 1024;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./scene.ini";

/// Scene configuration resource.
///
/// Stores the screen dimensions the camera is initially sized to and the
/// simulation loop rate. Missing file or missing values fall back to
/// defaults; callers decide whether a load failure matters.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Target simulation frames per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [loop] section
        if let Some(fps) = config.getuint("loop", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: {}x{} screen, fps={}",
            self.screen_width, self.screen_height, self.target_fps
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));
        config.set("loop", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the screen size.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}
