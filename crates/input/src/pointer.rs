use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::action::Action;

/// Dolly step per wheel notch at zoom speed 1.
const ZOOM_STEP: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerParams {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Drag to orbit.
    Primary,
    /// Drag to pan.
    Secondary,
    Other,
}

/// Tracks pointer state over a viewport and turns raw events into actions.
#[derive(Debug, Clone)]
pub struct PointerMapper {
    params: PointerParams,
    viewport: UVec2,
    cursor: Option<Vec2>,
    rotating: bool,
    panning: bool,
}

impl PointerMapper {
    pub fn new(params: PointerParams, viewport: UVec2) -> Self {
        Self {
            params,
            viewport,
            cursor: None,
            rotating: false,
            panning: false,
        }
    }

    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.rotating || self.panning
    }

    /// Position mapped to `[-1, 1]` on both axes, `None` for an empty viewport.
    pub fn normalize(&self, position: Vec2) -> Option<Vec2> {
        if self.viewport.x == 0 || self.viewport.y == 0 {
            return None;
        }
        let size = self.viewport.as_vec2();
        Some((position / size - Vec2::splat(0.5)) * 2.0)
    }

    /// Pointer moved to `position` in physical pixels relative to the viewport origin.
    pub fn cursor_moved(&mut self, position: Vec2) -> Vec<Action> {
        let previous = self.cursor.replace(position);
        let Some(normalized) = self.normalize(position) else {
            return vec![Action::Noop];
        };

        let mut actions = vec![Action::Tilt(normalized)];
        if let Some(previous) = previous {
            let delta = position - previous;
            if delta != Vec2::ZERO {
                if self.rotating {
                    let height = self.viewport.y as f32;
                    actions.push(Action::Orbit(
                        delta * TAU / height * self.params.rotate_speed,
                    ));
                } else if self.panning {
                    actions.push(Action::Pan(delta));
                }
            }
        }
        actions
    }

    pub fn cursor_entered(&mut self) -> Action {
        Action::Hover(true)
    }

    /// Drags keep going outside the viewport; only the hover ends.
    pub fn cursor_left(&mut self) -> Action {
        self.cursor = None;
        Action::Hover(false)
    }

    pub fn button(&mut self, button: PointerButton, pressed: bool) -> Action {
        match button {
            PointerButton::Primary => self.rotating = pressed,
            PointerButton::Secondary => self.panning = pressed,
            PointerButton::Other => {}
        }
        Action::Noop
    }

    /// Wheel delta in lines or pixels; positive scrolls up, which zooms in.
    pub fn wheel(&mut self, delta_y: f32) -> Action {
        let step = ZOOM_STEP.powf(self.params.zoom_speed);
        if delta_y > 0.0 {
            Action::Zoom(step)
        } else if delta_y < 0.0 {
            Action::Zoom(1.0 / step)
        } else {
            Action::Noop
        }
    }

    pub fn resize(&mut self, size: UVec2) -> Action {
        tracing::debug!(width = size.x, height = size.y, "viewport resized");
        self.viewport = size;
        Action::Resize(size)
    }
}
