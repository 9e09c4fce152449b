//! Card motion.
//!
//! Every tick the card's pitch, yaw and scale move a fixed fraction of the way
//! toward targets derived from the pointer and hover state, while an idle sine
//! bob lifts the card and its glow.
//!
//! # Invariants
//! - Easing runs on fixed ticks, so convergence does not depend on frame rate.
//! - The bob is a function of continuous elapsed time only.
//! - Motion only writes transforms of the card and glow nodes.

mod card_motion;
mod clock;
mod ease;

pub use card_motion::{CardMotion, MotionParams};
pub use clock::MotionClock;
pub use ease::{ease_toward, ease_vec3};

pub fn crate_info() -> &'static str {
    "holocard-motion v0.1.0"
}
