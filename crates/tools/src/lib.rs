//! Developer tooling: scene inspector, motion report, static export.
//!
//! # Invariants
//! - Inspectors are read-only.
//! - An export either writes the whole bundle or reports the first failure.

mod export;
mod inspector;

pub use export::{ExportError, ExportManifest, ExportedAsset, StaticExport};
pub use inspector::{MotionReport, NodeInfo, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "holocard-tools v0.1.0"
}
