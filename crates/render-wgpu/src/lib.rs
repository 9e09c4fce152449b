//! wgpu render backend for the card showcase.
//!
//! Draws the star spheres, the textured card box with physically based
//! faces, and the alpha-blended glow quad behind it. The camera orbits
//! the card with pointer drag and wheel zoom.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Camera motion is independent of card motion.
//! - `CardRenderer::dispose` releases every GPU resource it created.

mod camera;
mod gpu;
pub mod mesh;
mod shaders;
mod texture;

pub use camera::OrbitCamera;
pub use gpu::{CardRenderer, ShowcaseTextures, SurfaceTarget};
pub use texture::{GpuTexture, texture_format};
