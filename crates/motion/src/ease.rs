use glam::Vec3;

/// Move `value` the fraction `factor` of the way toward `target`.
pub fn ease_toward(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

/// Component-wise `ease_toward`.
pub fn ease_vec3(value: Vec3, target: Vec3, factor: f32) -> Vec3 {
    value + (target - value) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step() {
        assert!((ease_toward(0.0, 1.0, 0.08) - 0.08).abs() < 1e-6);
        assert!((ease_toward(1.0, 0.0, 0.08) - 0.92).abs() < 1e-6);
    }

    #[test]
    fn at_target_stays_put() {
        assert_eq!(ease_toward(0.35, 0.35, 0.08), 0.35);
    }

    #[test]
    fn converges_geometrically() {
        let mut v = 0.0;
        for _ in 0..60 {
            v = ease_toward(v, 1.0, 0.08);
        }
        // 1 - 0.92^60
        assert!((v - (1.0 - 0.92f32.powi(60))).abs() < 1e-4);
        assert!(v < 1.0);
    }

    #[test]
    fn vec3_matches_scalar() {
        let v = ease_vec3(Vec3::ONE, Vec3::splat(1.05), 0.08);
        assert!((v.x - ease_toward(1.0, 1.05, 0.08)).abs() < 1e-6);
        assert_eq!(v.x, v.z);
    }
}
