//! Shared value types used by every holocard crate.

mod color;
mod types;

pub use color::{ColorParseError, ColorStop, Rgb, Rgba};
pub use types::{NodeId, Transform};

pub fn crate_info() -> &'static str {
    "holocard-common v0.1.0"
}
