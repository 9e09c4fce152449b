use glam::{Vec2, Vec3};
use holocard_common::Transform;
use holocard_scene::Showcase;
use serde::{Deserialize, Serialize};

use crate::clock::MotionClock;
use crate::ease::{ease_toward, ease_vec3};

/// Tuning of the card's tilt, hover and bob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Fraction of the remaining distance covered per tick.
    pub smoothing: f32,
    pub hover_scale: f32,
    pub bob_amplitude: f32,
    /// Angular speed of the bob in radians per second.
    pub bob_speed: f32,
    /// Yaw at the horizontal viewport edge.
    pub yaw_range: f32,
    /// Pitch added at the vertical viewport edge.
    pub pitch_range: f32,
    pub tick_rate: f64,
    pub max_frame_delta: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            smoothing: 0.08,
            hover_scale: 1.05,
            bob_amplitude: 0.03,
            bob_speed: 0.6,
            yaw_range: 0.35,
            pitch_range: 0.12,
            tick_rate: 60.0,
            max_frame_delta: 0.1,
        }
    }
}

/// Eased tilt and scale of the card plus the idle bob.
#[derive(Debug, Clone)]
pub struct CardMotion {
    params: MotionParams,
    rest_pitch: f32,
    clock: MotionClock,
    /// Current (pitch, yaw).
    rotation: Vec2,
    target_rotation: Vec2,
    scale: Vec3,
    hovering: bool,
}

impl CardMotion {
    pub fn new(params: MotionParams, rest_pitch: f32) -> Self {
        Self {
            params,
            rest_pitch,
            clock: MotionClock::new(params.tick_rate, params.max_frame_delta),
            rotation: Vec2::new(rest_pitch, 0.0),
            target_rotation: Vec2::new(rest_pitch, 0.0),
            scale: Vec3::ONE,
            hovering: false,
        }
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Retarget the tilt from a pointer position normalized to `[-1, 1]`
    /// across the viewport (`-1` = left/top edge). Values past the edges are
    /// passed through unclamped.
    pub fn set_pointer(&mut self, normalized: Vec2) {
        self.target_rotation = Vec2::new(
            self.rest_pitch + normalized.y * self.params.pitch_range,
            normalized.x * self.params.yaw_range,
        );
    }

    pub fn set_hover(&mut self, hovering: bool) {
        if self.hovering != hovering {
            tracing::debug!(hovering, "card hover changed");
        }
        self.hovering = hovering;
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn target_scale(&self) -> f32 {
        if self.hovering {
            self.params.hover_scale
        } else {
            1.0
        }
    }

    /// Advance by a frame delta in seconds. Returns the number of easing ticks run.
    pub fn advance(&mut self, dt: f64) -> u32 {
        let ticks = self.clock.advance(dt);
        let factor = self.params.smoothing;
        let target_scale = Vec3::splat(self.target_scale());
        for _ in 0..ticks {
            self.rotation.x = ease_toward(self.rotation.x, self.target_rotation.x, factor);
            self.rotation.y = ease_toward(self.rotation.y, self.target_rotation.y, factor);
            self.scale = ease_vec3(self.scale, target_scale, factor);
        }
        ticks
    }

    /// Current (pitch, yaw) in radians.
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn target_rotation(&self) -> Vec2 {
        self.target_rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Vertical offset of the card at the current time.
    pub fn bob_offset(&self) -> f32 {
        (self.clock.elapsed() as f32 * self.params.bob_speed).sin() * self.params.bob_amplitude
    }

    /// Card transform for the current state.
    pub fn card_transform(&self) -> Transform {
        Transform::from_euler_xyz(
            Vec3::new(0.0, self.bob_offset(), 0.0),
            Vec3::new(self.rotation.x, self.rotation.y, 0.0),
            self.scale,
        )
    }

    /// Write the card pose into the showcase; the glow follows the card's height.
    pub fn apply(&self, showcase: &mut Showcase) {
        let card = self.card_transform();
        showcase.scene.set_transform(showcase.card, card);

        let mut glow = showcase.glow_rest;
        glow.position.y = card.position.y;
        showcase.scene.set_transform(showcase.glow, glow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocard_scene::{ShowcaseParams, StarfieldParams};

    const FRAME: f64 = 1.0 / 60.0 + 1e-9;

    fn motion() -> CardMotion {
        CardMotion::new(MotionParams::default(), -0.12)
    }

    fn run_frames(m: &mut CardMotion, frames: usize) {
        for _ in 0..frames {
            m.advance(FRAME);
        }
    }

    #[test]
    fn starts_at_rest() {
        let m = motion();
        assert_eq!(m.rotation(), Vec2::new(-0.12, 0.0));
        assert_eq!(m.scale(), Vec3::ONE);
        assert_eq!(m.bob_offset(), 0.0);
    }

    #[test]
    fn pointer_targets_follow_viewport_mapping() {
        let mut m = motion();
        m.set_pointer(Vec2::new(1.0, -1.0));
        let t = m.target_rotation();
        assert!((t.y - 0.35).abs() < 1e-6);
        assert!((t.x - (-0.12 - 0.12)).abs() < 1e-6);

        m.set_pointer(Vec2::ZERO);
        assert_eq!(m.target_rotation(), Vec2::new(-0.12, 0.0));
    }

    #[test]
    fn one_tick_moves_eight_percent() {
        let mut m = motion();
        m.set_pointer(Vec2::new(1.0, 0.0));
        assert_eq!(m.advance(FRAME), 1);
        assert!((m.rotation().y - 0.35 * 0.08).abs() < 1e-6);
        assert!((m.rotation().x + 0.12).abs() < 1e-6);
    }

    #[test]
    fn rotation_converges_to_target() {
        let mut m = motion();
        m.set_pointer(Vec2::new(-0.5, 0.5));
        run_frames(&mut m, 300);
        let target = m.target_rotation();
        assert!((m.rotation() - target).abs().max_element() < 1e-4);
    }

    #[test]
    fn hover_scales_up_and_back() {
        let mut m = motion();
        m.set_hover(true);
        run_frames(&mut m, 300);
        assert!((m.scale().x - 1.05).abs() < 1e-4);
        assert_eq!(m.scale().x, m.scale().z);

        m.set_hover(false);
        run_frames(&mut m, 300);
        assert!((m.scale().y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn easing_is_frame_rate_independent() {
        let mut fast = motion();
        let mut slow = motion();
        fast.set_pointer(Vec2::new(1.0, 1.0));
        slow.set_pointer(Vec2::new(1.0, 1.0));
        for _ in 0..120 {
            fast.advance(1.0 / 120.0 + 1e-9);
        }
        for _ in 0..30 {
            slow.advance(1.0 / 30.0 + 1e-9);
        }
        assert_eq!(fast.ticks(), slow.ticks());
        assert!((fast.rotation() - slow.rotation()).abs().max_element() < 1e-6);
    }

    #[test]
    fn bob_stays_within_amplitude() {
        let mut m = motion();
        for _ in 0..600 {
            m.advance(FRAME);
            assert!(m.bob_offset().abs() <= 0.03 + 1e-6);
        }
        // a quarter period of sin(0.6 t) peaks at t = pi / 1.2
        let mut m = motion();
        let quarter = std::f64::consts::PI / 1.2;
        while m.elapsed() < quarter - 0.05 {
            m.advance(0.05);
        }
        m.advance(quarter - m.elapsed());
        assert!((m.bob_offset() - 0.03).abs() < 1e-4);
    }

    #[test]
    fn apply_moves_card_and_glow_together() {
        let mut showcase = Showcase::build(&ShowcaseParams {
            stars: StarfieldParams {
                count: 1,
                seed: Some(3),
                ..StarfieldParams::default()
            },
            ..ShowcaseParams::default()
        });
        let mut m = motion();
        m.set_hover(true);
        for _ in 0..30 {
            m.advance(0.05);
        }
        m.apply(&mut showcase);

        let card = showcase.scene.transform(showcase.card).unwrap();
        let glow = showcase.scene.transform(showcase.glow).unwrap();
        assert!(card.position.y != 0.0);
        assert_eq!(card.position.y, glow.position.y);
        assert_eq!(glow.position.z, showcase.glow_rest.position.z);
        assert_eq!(glow.scale, Vec3::ONE);
        assert!(card.scale.x > 1.0);
    }
}
