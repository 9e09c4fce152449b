//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - Native render resources are disposed exactly once, when the widget unmounts.

mod lifecycle;
mod renderer;
mod settings;

pub use lifecycle::{Listener, Mount, MountState, Teardown};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use settings::RenderSettings;

pub fn crate_info() -> &'static str {
    "holocard-render v0.1.0"
}
