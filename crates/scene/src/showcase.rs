use glam::{Vec2, Vec3};
use holocard_common::{ColorStop, NodeId, Rgb, Transform};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::camera::CameraParams;
use crate::light::LightingParams;
use crate::material::CardFaces;
use crate::scene::{CardNode, GlowNode, NodeKind, Scene};
use crate::starfield::{Starfield, StarfieldParams};

/// Card geometry, look and resting pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardParams {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    /// Pitch (radians about X) the card settles at when the pointer is centered.
    pub rest_pitch: f32,
    /// Image shown on the front face. Relative paths resolve against the working
    /// directory; the default points at the sample image shipped in `assets/`.
    pub texture: PathBuf,
    pub faces: CardFaces,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            width: 1.2,
            height: 1.6,
            thickness: 0.04,
            rest_pitch: -0.12,
            texture: PathBuf::from("assets/card-image.png"),
            faces: CardFaces::default(),
        }
    }
}

/// Halo quad drawn behind the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowParams {
    /// Quad size relative to the card size.
    pub scale: f32,
    /// Z offset from the card; negative places the quad behind it.
    pub offset_z: f32,
    /// Side length of the generated gradient texture in pixels.
    pub texture_size: u32,
    /// Radius, as a fraction of the texture size, inside which the first stop is solid.
    pub inner_radius: f32,
    /// Radius, as a fraction of the texture size, beyond which the last stop is solid.
    pub outer_radius: f32,
    pub color: Rgb,
    pub core_alpha: f32,
    pub halo_alpha: f32,
    pub halo_offset: f32,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            scale: 1.8,
            offset_z: -0.12,
            texture_size: 512,
            inner_radius: 0.05,
            outer_radius: 0.5,
            color: Rgb::from_hex(0x8b5cf6),
            core_alpha: 0.9,
            halo_alpha: 0.25,
            halo_offset: 0.35,
        }
    }
}

impl GlowParams {
    /// Gradient stops from the center outward, fading to transparent black.
    pub fn stops(&self) -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, self.color.with_alpha(self.core_alpha)),
            ColorStop::new(self.halo_offset, self.color.with_alpha(self.halo_alpha)),
            ColorStop::new(1.0, Rgb::BLACK.with_alpha(0.0)),
        ]
    }
}

/// Everything needed to build the showcase scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseParams {
    pub card: CardParams,
    pub glow: GlowParams,
    pub stars: StarfieldParams,
    pub lighting: LightingParams,
    pub camera: CameraParams,
}

/// The card showcase scene and handles to its animated nodes.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub scene: Scene,
    pub card: NodeId,
    pub glow: NodeId,
    pub stars: NodeId,
    /// Resting pose of the glow, whose y tracks the card.
    pub glow_rest: Transform,
}

impl Showcase {
    pub fn build(params: &ShowcaseParams) -> Self {
        let _span = tracing::info_span!("build_showcase").entered();
        let mut scene = Scene::with_environment(params.lighting, params.camera);

        let stars = scene.spawn(
            "stars",
            NodeKind::Starfield(Starfield::generate(&params.stars)),
            Transform::default(),
        );

        let card_params = &params.card;
        let card = scene.spawn(
            "card",
            NodeKind::Card(CardNode {
                width: card_params.width,
                height: card_params.height,
                thickness: card_params.thickness,
                faces: card_params.faces,
            }),
            Transform::from_euler_xyz(
                Vec3::ZERO,
                Vec3::new(card_params.rest_pitch, 0.0, 0.0),
                Vec3::ONE,
            ),
        );

        let glow_rest = Transform::from_position(Vec3::new(0.0, 0.0, params.glow.offset_z));
        let glow = scene.spawn(
            "glow",
            NodeKind::Glow(GlowNode {
                size: Vec2::new(card_params.width, card_params.height) * params.glow.scale,
                inner_radius: params.glow.inner_radius,
                outer_radius: params.glow.outer_radius,
                stops: params.glow.stops(),
            }),
            glow_rest,
        );

        tracing::info!(nodes = scene.node_count(), "showcase scene built");

        Self {
            scene,
            card,
            glow,
            stars,
            glow_rest,
        }
    }

    pub fn card_node(&self) -> Option<&CardNode> {
        match &self.scene.get(self.card)?.kind {
            NodeKind::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn glow_node(&self) -> Option<&GlowNode> {
        match &self.scene.get(self.glow)?.kind {
            NodeKind::Glow(glow) => Some(glow),
            _ => None,
        }
    }

    pub fn starfield(&self) -> Option<&Starfield> {
        match &self.scene.get(self.stars)?.kind {
            NodeKind::Starfield(stars) => Some(stars),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ShowcaseParams {
        ShowcaseParams {
            stars: StarfieldParams {
                seed: Some(7),
                ..StarfieldParams::default()
            },
            ..ShowcaseParams::default()
        }
    }

    #[test]
    fn showcase_has_three_named_nodes() {
        let showcase = Showcase::build(&seeded());
        assert_eq!(showcase.scene.node_count(), 3);
        assert_eq!(showcase.scene.find("card"), Some(showcase.card));
        assert_eq!(showcase.scene.find("glow"), Some(showcase.glow));
        assert_eq!(showcase.scene.find("stars"), Some(showcase.stars));
        assert_eq!(showcase.starfield().unwrap().len(), 200);
    }

    #[test]
    fn card_starts_at_rest_pitch() {
        let showcase = Showcase::build(&seeded());
        let t = showcase.scene.transform(showcase.card).unwrap();
        let euler = t.euler_xyz();
        assert!((euler.x + 0.12).abs() < 1e-5);
        assert!(euler.y.abs() < 1e-5);
        assert_eq!(t.position, Vec3::ZERO);
    }

    #[test]
    fn glow_is_behind_and_larger_than_card() {
        let showcase = Showcase::build(&seeded());
        let glow = showcase.glow_node().unwrap();
        let card = showcase.card_node().unwrap();
        assert!((glow.size.x - card.width * 1.8).abs() < 1e-6);
        assert!((glow.size.y - card.height * 1.8).abs() < 1e-6);
        let z = showcase.scene.transform(showcase.glow).unwrap().position.z;
        assert!((z + 0.12).abs() < 1e-6);
    }

    #[test]
    fn glow_stops_fade_out() {
        let stops = GlowParams::default().stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color.a, 0.9);
        assert_eq!(stops[1].offset, 0.35);
        assert_eq!(stops[2].color.a, 0.0);
        assert!(stops.windows(2).all(|w| w[0].offset < w[1].offset));
    }
}
