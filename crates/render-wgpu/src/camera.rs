use glam::{Mat4, Vec2, Vec3};
use holocard_scene::CameraParams;

/// Keeps the polar angle away from the poles so the view never flips.
const POLAR_EPSILON: f32 = 1e-6;

/// Perspective camera orbiting a target point.
///
/// Input accumulates into pending deltas; `update` applies them once per frame,
/// clamps the distance to the orbit limits and the polar angle to the open
/// interval (0, PI).
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    radius: f32,
    /// Azimuth around +Y, zero looking down -Z from +Z.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pending_rotation: Vec2,
    pending_scale: f32,
    pending_pan: Vec3,
}

impl OrbitCamera {
    pub fn from_params(params: &CameraParams, aspect: f32) -> Self {
        let offset = params.position - params.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut camera = Self {
            target: params.target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            fov_y: params.fov_degrees.to_radians(),
            aspect,
            near: params.near,
            far: params.far,
            min_distance: params.min_distance,
            max_distance: params.max_distance,
            enable_zoom: params.enable_zoom,
            enable_pan: params.enable_pan,
            pending_rotation: Vec2::ZERO,
            pending_scale: 1.0,
            pending_pan: Vec3::ZERO,
        };
        camera.update();
        camera
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Queue an orbit by (azimuth, polar) radians; dragging right and down
    /// swings the camera left and up.
    pub fn rotate(&mut self, delta: Vec2) {
        self.pending_rotation -= delta;
    }

    /// Queue a distance change; factors below 1 move closer.
    pub fn dolly(&mut self, factor: f32) {
        if self.enable_zoom && factor > 0.0 {
            self.pending_scale *= factor;
        }
    }

    /// Queue a pan by a pixel delta, scaled so the target point follows the pointer.
    pub fn pan(&mut self, delta: Vec2, viewport_height: u32) {
        if !self.enable_pan || viewport_height == 0 {
            return;
        }
        let world_per_pixel = 2.0 * self.radius * (self.fov_y / 2.0).tan() / viewport_height as f32;
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.pending_pan += (-right * delta.x + up * delta.y) * world_per_pixel;
    }

    /// Apply pending input. Returns true if the camera moved.
    pub fn update(&mut self) -> bool {
        let before = (self.theta, self.phi, self.radius, self.target);

        self.theta += self.pending_rotation.x;
        self.phi = (self.phi + self.pending_rotation.y)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pending_pan;

        self.pending_rotation = Vec2::ZERO;
        self.pending_scale = 1.0;
        self.pending_pan = Vec3::ZERO;

        before != (self.theta, self.phi, self.radius, self.target)
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::from_params(&CameraParams::default(), 16.0 / 9.0)
    }

    #[test]
    fn starts_at_configured_position() {
        let cam = camera();
        let p = cam.position();
        assert!((p - Vec3::new(0.0, 0.8, 2.5)).length() < 1e-4);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut cam = camera();
        for _ in 0..100 {
            cam.dolly(0.95);
        }
        cam.update();
        assert!((cam.distance() - 1.2).abs() < 1e-6);

        for _ in 0..200 {
            cam.dolly(1.0 / 0.95);
        }
        cam.update();
        assert!((cam.distance() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn zoom_disabled_keeps_distance() {
        let mut cam = camera();
        cam.enable_zoom = false;
        let d = cam.distance();
        cam.dolly(0.5);
        assert!(!cam.update());
        assert_eq!(cam.distance(), d);
    }

    #[test]
    fn pan_disabled_by_default() {
        let mut cam = camera();
        cam.pan(Vec2::new(100.0, 50.0), 600);
        cam.update();
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn pan_moves_target_when_enabled() {
        let mut cam = camera();
        cam.enable_pan = true;
        cam.pan(Vec2::new(100.0, 0.0), 600);
        cam.update();
        // dragging right moves the target left
        assert!(cam.target.x < 0.0);
    }

    #[test]
    fn orbit_keeps_distance_and_clamps_polar() {
        let mut cam = camera();
        let d = cam.distance();
        cam.rotate(Vec2::new(0.7, 0.0));
        assert!(cam.update());
        assert!((cam.position().length() - d).abs() < 1e-4);
        // dragging right swings the camera to the left (negative x)
        assert!(cam.position().x < 0.0);

        cam.rotate(Vec2::new(0.0, 10.0));
        cam.update();
        assert!(cam.position().y > d * 0.999);
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn aspect_survives_zero_height() {
        let mut cam = camera();
        cam.set_aspect(800, 0);
        assert_eq!(cam.aspect, 800.0);
    }
}
