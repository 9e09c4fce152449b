use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier of a node in a scene. Allocated sequentially, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Build a transform from Euler angles applied in XYZ order.
    pub fn from_euler_xyz(position: Vec3, euler: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z),
            scale,
        }
    }

    /// Euler angles (XYZ order) of the rotation.
    pub fn euler_xyz(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    pub fn matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn euler_round_trip_keeps_pitch_and_yaw() {
        let t = Transform::from_euler_xyz(Vec3::ZERO, Vec3::new(-0.12, 0.3, 0.0), Vec3::ONE);
        let e = t.euler_xyz();
        assert!((e.x + 0.12).abs() < 1e-5);
        assert!((e.y - 0.3).abs() < 1e-5);
        assert!(e.z.abs() < 1e-5);
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}
