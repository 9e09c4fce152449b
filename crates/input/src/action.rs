use glam::{UVec2, Vec2};

/// A high-level action produced from raw pointer and window input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer position normalized to `[-1, 1]` across the viewport.
    Tilt(Vec2),
    /// Pointer entered (`true`) or left (`false`) the viewport.
    Hover(bool),
    /// Orbit the camera by (azimuth, polar) radians.
    Orbit(Vec2),
    /// Multiply the camera distance by this factor; below 1 moves closer.
    Zoom(f32),
    /// Pan the camera by a pixel delta.
    Pan(Vec2),
    /// Viewport resized to a new physical size.
    Resize(UVec2),
    /// Input that maps to nothing.
    Noop,
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_detection() {
        assert!(Action::Noop.is_noop());
        assert!(!Action::Hover(true).is_noop());
    }

    #[test]
    fn actions_compare_by_value() {
        assert_eq!(Action::Zoom(0.95), Action::Zoom(0.95));
        assert_ne!(Action::Tilt(Vec2::ZERO), Action::Tilt(Vec2::ONE));
    }
}
