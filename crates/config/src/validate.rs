use crate::{ConfigError, HolocardConfig};
use holocard_scene::StarfieldParams;

impl HolocardConfig {
    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let card = &self.scene.card;
        if !(card.width > 0.0 && card.height > 0.0 && card.thickness > 0.0) {
            return Err(ConfigError::CardSize {
                width: card.width,
                height: card.height,
                thickness: card.thickness,
            });
        }

        let camera = &self.scene.camera;
        if !(camera.min_distance.is_finite()
            && camera.max_distance.is_finite()
            && camera.min_distance <= camera.max_distance)
        {
            return Err(ConfigError::DistanceLimits {
                min: camera.min_distance,
                max: camera.max_distance,
            });
        }
        let distance = camera.distance();
        // small slack so a camera placed exactly on a limit survives float rounding
        if distance < camera.min_distance - 1e-4 || distance > camera.max_distance + 1e-4 {
            return Err(ConfigError::CameraDistance {
                distance,
                min: camera.min_distance,
                max: camera.max_distance,
            });
        }

        let smoothing = self.motion.smoothing;
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(smoothing));
        }
        if !(self.motion.tick_rate > 0.0) {
            return Err(ConfigError::TickRate(self.motion.tick_rate));
        }

        if !matches!(self.render.msaa_samples, 1 | 4) {
            return Err(ConfigError::Msaa(self.render.msaa_samples));
        }

        if !is_valid_base_path(&self.export.base_path) {
            return Err(ConfigError::BasePath(self.export.base_path.clone()));
        }

        let glow = &self.scene.glow;
        if !(glow.offset_z < 0.0) {
            return Err(ConfigError::GlowOffset(glow.offset_z));
        }
        if glow.texture_size == 0 {
            return Err(ConfigError::GlowTextureSize(glow.texture_size));
        }
        if !(glow.inner_radius >= 0.0
            && glow.inner_radius < glow.outer_radius
            && glow.outer_radius <= 0.5)
        {
            return Err(ConfigError::GlowRadii {
                inner: glow.inner_radius,
                outer: glow.outer_radius,
            });
        }

        let stars = &self.scene.stars;
        if !(stars.spread.is_finite() && stars.spread >= 0.0) {
            return Err(ConfigError::StarSpread(stars.spread));
        }
        if !(3..=StarfieldParams::MAX_SEGMENTS).contains(&stars.segments) {
            return Err(ConfigError::StarSegments {
                segments: stars.segments,
                max: StarfieldParams::MAX_SEGMENTS,
            });
        }

        Ok(())
    }
}

/// Empty, or `/segment(/segment)*` with URL-safe segments.
fn is_valid_base_path(path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    rest.split('/').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn default_is_valid() {
        HolocardConfig::default().validate().unwrap();
    }

    #[test]
    fn base_paths() {
        for ok in ["", "/3d-card", "/a/b_c/v1.2"] {
            assert!(is_valid_base_path(ok), "{ok}");
        }
        for bad in ["/", "3d-card", "/3d-card/", "//x", "/a b", "/a?b"] {
            assert!(!is_valid_base_path(bad), "{bad}");
        }
    }

    #[test]
    fn rejects_flat_card() {
        let mut config = HolocardConfig::default();
        config.scene.card.thickness = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::CardSize { .. })));
    }

    #[test]
    fn rejects_negative_star_spread() {
        let err =
            HolocardConfig::from_yaml_str("scene:\n  stars:\n    spread: -4.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::StarSpread(_)));

        let mut config = HolocardConfig::default();
        config.scene.stars.spread = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::StarSpread(_))));
    }

    #[test]
    fn rejects_dense_star_spheres() {
        let mut config = HolocardConfig::default();
        config.scene.stars.segments = 300;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StarSegments { segments: 300, .. })
        ));
        config.scene.stars.segments = StarfieldParams::MAX_SEGMENTS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_glow_texture() {
        let mut config = HolocardConfig::default();
        config.scene.glow.texture_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::GlowTextureSize(0))));
    }

    #[test]
    fn rejects_glow_radii_out_of_order() {
        let mut config = HolocardConfig::default();
        config.scene.glow.inner_radius = 0.3;
        config.scene.glow.outer_radius = 0.2;
        assert!(matches!(config.validate(), Err(ConfigError::GlowRadii { .. })));
    }

    #[test]
    fn rejects_nan_distance_limits() {
        for (min, max) in [(f32::NAN, 4.5), (1.2, f32::NAN)] {
            let mut config = HolocardConfig::default();
            config.scene.camera.min_distance = min;
            config.scene.camera.max_distance = max;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DistanceLimits { .. })
            ));
        }
    }

    #[test]
    fn rejects_inverted_distance_limits() {
        let mut config = HolocardConfig::default();
        config.scene.camera.min_distance = 5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DistanceLimits { .. })
        ));
    }

    #[test]
    fn rejects_camera_outside_limits() {
        let mut config = HolocardConfig::default();
        config.scene.camera.position = Vec3::new(0.0, 0.0, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CameraDistance { .. })
        ));
    }

    #[test]
    fn rejects_bad_smoothing() {
        for smoothing in [0.0, -0.1, 1.5, f32::NAN] {
            let mut config = HolocardConfig::default();
            config.motion.smoothing = smoothing;
            assert!(matches!(config.validate(), Err(ConfigError::Smoothing(_))));
        }
        let mut config = HolocardConfig::default();
        config.motion.smoothing = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_glow_in_front() {
        let mut config = HolocardConfig::default();
        config.scene.glow.offset_z = 0.1;
        assert!(matches!(config.validate(), Err(ConfigError::GlowOffset(_))));
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let mut config = HolocardConfig::default();
        config.motion.tick_rate = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::TickRate(_))));
    }
}
