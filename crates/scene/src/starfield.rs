use glam::Vec3;
use holocard_common::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters of the background star cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldParams {
    pub count: usize,
    /// Edge length of the cube the stars are scattered in, centered at the origin.
    pub spread: f32,
    pub radius: f32,
    /// Sphere tessellation, used for both width and height segments.
    pub segments: u32,
    pub color: Rgb,
    /// Fixed seed for a reproducible field. `None` scatters differently every run.
    pub seed: Option<u64>,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 200,
            spread: 20.0,
            radius: 0.01,
            segments: 8,
            color: Rgb::WHITE,
            seed: None,
        }
    }
}

/// A group of identical small spheres at fixed positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    pub positions: Vec<Vec3>,
    pub radius: f32,
    pub segments: u32,
    pub color: Rgb,
}

impl StarfieldParams {
    /// Largest tessellation whose sphere still fits 16-bit vertex indices.
    pub const MAX_SEGMENTS: u32 = 254;
}

impl Starfield {
    pub fn generate(params: &StarfieldParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // an empty sampling range panics, so a bad spread collapses to the origin
        let half = if params.spread.is_finite() {
            params.spread.abs() * 0.5
        } else {
            0.0
        };
        let positions = (0..params.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                )
            })
            .collect();

        tracing::debug!(count = params.count, seed = ?params.seed, "generated starfield");

        Self {
            positions,
            radius: params.radius,
            segments: params.segments.min(StarfieldParams::MAX_SEGMENTS),
            color: params.color,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_inside_the_cube() {
        let params = StarfieldParams {
            seed: Some(1),
            ..StarfieldParams::default()
        };
        let field = Starfield::generate(&params);
        assert_eq!(field.len(), 200);
        assert!(
            field
                .positions
                .iter()
                .all(|p| p.abs().max_element() <= 10.0)
        );
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let params = StarfieldParams {
            seed: Some(42),
            ..StarfieldParams::default()
        };
        assert_eq!(Starfield::generate(&params), Starfield::generate(&params));

        let other = StarfieldParams {
            seed: Some(43),
            ..params
        };
        assert_ne!(Starfield::generate(&params), Starfield::generate(&other));
    }

    #[test]
    fn empty_field() {
        let params = StarfieldParams {
            count: 0,
            ..StarfieldParams::default()
        };
        assert!(Starfield::generate(&params).is_empty());
    }

    #[test]
    fn degenerate_spread_does_not_panic() {
        for spread in [-4.0, f32::NAN, f32::INFINITY] {
            let params = StarfieldParams {
                spread,
                seed: Some(3),
                ..StarfieldParams::default()
            };
            let field = Starfield::generate(&params);
            assert_eq!(field.len(), 200);
            assert!(field.positions.iter().all(|p| p.is_finite()));
        }

        let negative = StarfieldParams {
            spread: -4.0,
            seed: Some(3),
            ..StarfieldParams::default()
        };
        let field = Starfield::generate(&negative);
        assert!(field.positions.iter().all(|p| p.abs().max_element() <= 2.0));
    }

    #[test]
    fn segments_are_capped() {
        let params = StarfieldParams {
            segments: 300,
            count: 1,
            ..StarfieldParams::default()
        };
        assert_eq!(Starfield::generate(&params).segments, StarfieldParams::MAX_SEGMENTS);
    }
}
