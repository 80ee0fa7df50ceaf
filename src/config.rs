//! Scene and view configuration
//!
//! Both structs default to the values the still life was laid out with.
//! The binary overrides the texture directory from `COUNTERTOP_TEXTURES`.

use std::path::{Path, PathBuf};

use cgmath::Vector3;

/// Environment variable naming the texture directory
pub const TEXTURE_DIR_ENV: &str = "COUNTERTOP_TEXTURES";

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Directory the scene's image files are read from
    pub texture_dir: PathBuf,
    /// Texture units available to the fragment stage
    pub max_texture_units: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("textures"),
            max_texture_units: 16,
        }
    }
}

impl SceneConfig {
    /// Defaults, with the texture directory taken from the environment if set
    pub fn from_env() -> Self {
        match std::env::var_os(TEXTURE_DIR_ENV) {
            Some(dir) => Self::default().with_texture_dir(dir),
            None => Self::default(),
        }
    }

    pub fn with_texture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.texture_dir = dir.into();
        self
    }

    pub fn with_max_texture_units(mut self, units: usize) -> Self {
        self.max_texture_units = units;
        self
    }

    pub fn texture_path(&self, file_name: &str) -> PathBuf {
        self.texture_dir.join(file_name)
    }

    pub fn texture_dir(&self) -> &Path {
        &self.texture_dir
    }
}

/// Window size, initial camera pose and input tuning
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub position: Vector3<f32>,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in degrees
    pub zoom: f32,
    pub zoom_step: f32,
    /// World units per second
    pub movement_speed: f32,
    pub speed_step: f32,
    pub mouse_sensitivity: f32,
    /// Applied to raw cursor deltas before the camera sensitivity
    pub mouse_multiplier: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 800,
            position: Vector3::new(2.0, 5.5, 9.0),
            front: Vector3::new(0.0, -0.9, -4.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            zoom: 60.0,
            zoom_step: 0.01,
            movement_speed: 2.5,
            speed_step: 0.5,
            mouse_sensitivity: 0.1,
            mouse_multiplier: 2.5,
        }
    }
}

impl ViewConfig {
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_pose(
        mut self,
        position: Vector3<f32>,
        front: Vector3<f32>,
        up: Vector3<f32>,
    ) -> Self {
        self.position = position;
        self.front = front;
        self.up = up;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Width over height; a zero-area window counts as square
    pub fn aspect_ratio(&self) -> f32 {
        if self.window_width == 0 || self.window_height == 0 {
            return 1.0;
        }
        self.window_width as f32 / self.window_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_path_joins_dir() {
        let config = SceneConfig::default().with_texture_dir("/srv/images");
        assert_eq!(config.texture_path("tile.jpg"), PathBuf::from("/srv/images/tile.jpg"));
        assert_eq!(config.max_texture_units, 16);
    }

    #[test]
    fn test_view_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.aspect_ratio(), 1.25);
        assert_eq!(config.position, Vector3::new(2.0, 5.5, 9.0));
        assert_eq!(config.zoom, 60.0);

        assert_eq!(config.clone().with_window_size(800, 0).aspect_ratio(), 1.0);
        assert_eq!(config.with_window_size(0, 600).aspect_ratio(), 1.0);
    }
}
