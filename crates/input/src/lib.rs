//! Input mapping: raw pointer and window events become [`Action`]s.
//!
//! # Invariants
//! - Consumers (card motion, orbit camera) see actions, never raw events.
//! - A zero-sized viewport never produces tilt or orbit actions.

pub mod action;
pub mod pointer;

pub use action::Action;
pub use pointer::{PointerButton, PointerMapper, PointerParams};

pub fn crate_info() -> &'static str {
    "holocard-input v0.1.0"
}
