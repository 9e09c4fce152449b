//! Scene graph for the card showcase.
//!
//! The scene owns every renderable object of the widget: the starfield group,
//! the card and the glow plane, plus the lights and the camera parameters.
//!
//! # Invariants
//! - Node ids are unique and never reused within a scene.
//! - Scene construction is pure: no GPU or file access happens here.

mod camera;
mod light;
mod material;
mod scene;
mod showcase;
mod starfield;

pub use camera::CameraParams;
pub use light::{AmbientLight, DirectionalLight, LightingParams, PointLight};
pub use material::{CardFaces, FaceSlot, PhysicalMaterial};
pub use scene::{CardNode, GlowNode, Node, NodeKind, Scene};
pub use showcase::{CardParams, GlowParams, Showcase, ShowcaseParams};
pub use starfield::{Starfield, StarfieldParams};

pub fn crate_info() -> &'static str {
    "holocard-scene v0.1.0"
}
