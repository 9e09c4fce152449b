use glam::Vec3;
use holocard_common::Rgb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

/// Light arriving from `position` toward the origin, without falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface toward the light.
    pub fn direction(&self) -> Vec3 {
        let dir = self.position.normalize_or_zero();
        if dir == Vec3::ZERO { Vec3::Y } else { dir }
    }
}

/// Omni light with a hard cutoff distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
    /// Distance at which the light reaches zero. `0` means unlimited.
    pub distance: f32,
    pub decay: f32,
}

impl PointLight {
    /// Falloff factor at `d` units from the light.
    pub fn attenuation(&self, d: f32) -> f32 {
        if self.distance > 0.0 && self.decay > 0.0 {
            (1.0 - d / self.distance).clamp(0.0, 1.0).powf(self.decay)
        } else {
            1.0
        }
    }
}

/// Ambient fill, a white key light and a violet rim light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    pub ambient: AmbientLight,
    pub key: DirectionalLight,
    pub rim: PointLight,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::WHITE,
                intensity: 0.6,
            },
            key: DirectionalLight {
                color: Rgb::WHITE,
                intensity: 0.8,
                position: Vec3::new(5.0, 10.0, 7.0),
            },
            rim: PointLight {
                color: Rgb::from_hex(0x8b5cf6),
                intensity: 1.2,
                position: Vec3::new(-1.5, 0.8, 1.0),
                distance: 6.0,
                decay: 1.0,
            },
        }
    }
}
