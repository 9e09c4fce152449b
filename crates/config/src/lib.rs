//! Configuration file for the card widget.
//!
//! A single YAML document groups every tunable block. Missing fields take
//! their defaults, so an empty file is a valid configuration.
//!
//! # Invariants
//! - `HolocardConfig::default()` always validates.
//! - Loading never applies a configuration that failed validation.

mod file;
mod validate;

pub use file::{ExportParams, HolocardConfig};

use std::path::PathBuf;

/// Errors from loading, saving or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("card size must be positive, got {width}x{height}x{thickness}")]
    CardSize { width: f32, height: f32, thickness: f32 },
    #[error("camera distance limits must be finite with min <= max, got [{min}, {max}]")]
    DistanceLimits { min: f32, max: f32 },
    #[error("initial camera distance {distance} is outside [{min}, {max}]")]
    CameraDistance { distance: f32, min: f32, max: f32 },
    #[error("smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),
    #[error("tick rate must be positive, got {0}")]
    TickRate(f64),
    #[error("MSAA sample count must be 1 or 4, got {0}")]
    Msaa(u32),
    #[error("base path must be empty or start with '/' and have no trailing slash, got {0:?}")]
    BasePath(String),
    #[error("glow must sit behind the card (offset_z < 0), got {0}")]
    GlowOffset(f32),
    #[error("glow texture size must be at least 1 pixel, got {0}")]
    GlowTextureSize(u32),
    #[error("glow radii must satisfy 0 <= inner < outer <= 0.5, got {inner} and {outer}")]
    GlowRadii { inner: f32, outer: f32 },
    #[error("star spread must be finite and non-negative, got {0}")]
    StarSpread(f32),
    #[error("star sphere segments must be in [3, {max}], got {segments}")]
    StarSegments { segments: u32, max: u32 },
}

pub fn crate_info() -> &'static str {
    "holocard-config v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("config"));
    }
}
