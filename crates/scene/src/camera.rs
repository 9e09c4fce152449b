use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Perspective camera placement and the limits of the orbit controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 0.8, 2.5),
            target: Vec3::ZERO,
            min_distance: 1.2,
            max_distance: 4.5,
            enable_pan: false,
            enable_zoom: true,
        }
    }
}

impl CameraParams {
    /// Distance from the camera to its orbit target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}
