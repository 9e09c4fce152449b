use glam::{UVec2, Vec2};
use holocard_config::HolocardConfig;
use holocard_input::{Action, PointerButton, PointerMapper};
use holocard_motion::CardMotion;
use holocard_render::{Listener, Mount, Teardown};
use holocard_render_wgpu::OrbitCamera;
use holocard_scene::Showcase;
use holocard_tools::{MotionReport, SceneInspector};
use std::time::Instant;

/// Everything the widget owns apart from GPU resources.
pub struct AppState {
    pub showcase: Showcase,
    pub motion: CardMotion,
    pub camera: OrbitCamera,
    pub pointer: PointerMapper,
    pub mount: Mount,
    pub show_inspector: bool,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &HolocardConfig, viewport: UVec2) -> Self {
        let showcase = Showcase::build(&config.scene);
        let motion = CardMotion::new(config.motion, config.scene.card.rest_pitch);
        let mut camera = OrbitCamera::from_params(&config.scene.camera, 1.0);
        camera.set_aspect(viewport.x, viewport.y);
        let mut state = Self {
            showcase,
            motion,
            camera,
            pointer: PointerMapper::new(config.pointer, viewport),
            mount: Mount::new(),
            show_inspector: false,
            last_frame: Instant::now(),
        };
        state.motion.apply(&mut state.showcase);
        state
    }

    pub fn cursor_moved(&mut self, position: Vec2) {
        if !self.mount.is_attached(Listener::PointerMove) {
            return;
        }
        for action in self.pointer.cursor_moved(position) {
            self.apply(action);
        }
    }

    pub fn cursor_entered(&mut self) {
        if self.mount.is_attached(Listener::PointerEnter) {
            let action = self.pointer.cursor_entered();
            self.apply(action);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.mount.is_attached(Listener::PointerLeave) {
            let action = self.pointer.cursor_left();
            self.apply(action);
        }
    }

    pub fn button(&mut self, button: PointerButton, pressed: bool) {
        if self.mount.is_running() {
            let action = self.pointer.button(button, pressed);
            self.apply(action);
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if self.mount.is_running() {
            let action = self.pointer.wheel(delta_y);
            self.apply(action);
        }
    }

    pub fn resize(&mut self, size: UVec2) {
        if self.mount.is_attached(Listener::Resize) {
            let action = self.pointer.resize(size);
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Tilt(normalized) => self.motion.set_pointer(normalized),
            Action::Hover(hovering) => self.motion.set_hover(hovering),
            Action::Orbit(delta) => self.camera.rotate(delta),
            Action::Zoom(factor) => self.camera.dolly(factor),
            Action::Pan(delta) => self.camera.pan(delta, self.pointer.viewport().y),
            Action::Resize(size) => self.camera.set_aspect(size.x, size.y),
            Action::Noop => {}
        }
    }

    /// Advance motion and camera by the wall time since the previous frame.
    /// Returns false once the frame loop has stopped.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.step(dt)
    }

    pub fn step(&mut self, dt: f64) -> bool {
        if !self.mount.record_frame() {
            return false;
        }
        self.motion.advance(dt);
        self.motion.apply(&mut self.showcase);
        self.camera.update();
        true
    }

    pub fn unmount(&mut self) -> Teardown {
        self.mount.unmount()
    }

    pub fn draw_ui(&mut self, ctx: &egui::Context) {
        if !self.show_inspector {
            return;
        }

        let scene = &self.showcase.scene;
        let summary = SceneInspector::summary(scene);
        let report = MotionReport::capture(&self.motion);

        egui::SidePanel::left("inspector")
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading("holocard");
                ui.separator();
                ui.label(format!("Frames: {}", self.mount.frames()));
                ui.label(format!("Nodes: {}", summary.node_count));
                let eye = self.camera.position();
                ui.label(format!(
                    "Camera: ({:.2}, {:.2}, {:.2}) distance {:.2}",
                    eye.x,
                    eye.y,
                    eye.z,
                    self.camera.distance()
                ));
                ui.separator();

                ui.heading("Motion");
                ui.label(format!("Hover: {}", report.hovering));
                ui.label(format!(
                    "Pitch: {:.3} -> {:.3}",
                    report.rotation[0], report.target_rotation[0]
                ));
                ui.label(format!(
                    "Yaw: {:.3} -> {:.3}",
                    report.rotation[1], report.target_rotation[1]
                ));
                ui.label(format!("Scale: {:.3} -> {:.3}", report.scale, report.target_scale));
                ui.label(format!("Bob: {:+.4}", report.bob_offset));
                ui.separator();

                ui.heading("Nodes");
                for id in SceneInspector::list_nodes(scene) {
                    if let Some(info) = SceneInspector::inspect_node(scene, id) {
                        ui.monospace(format!(
                            "{} {} y={:.3} s={:.3}",
                            info.id, info.name, info.position.y, info.scale.x
                        ));
                    }
                }

                ui.separator();
                ui.small("F1: Toggle Inspector | Drag: Orbit | Wheel: Zoom | Esc: Quit");
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut config = HolocardConfig::default();
        config.scene.stars.seed = Some(5);
        let mut state = AppState::new(&config, UVec2::new(800, 600));
        state.mount.mount();
        state
    }

    #[test]
    fn pointer_retargets_tilt() {
        let mut state = state();
        state.cursor_moved(Vec2::new(800.0, 300.0));
        let target = state.motion.target_rotation();
        assert!((target.y - 0.35).abs() < 1e-5);
    }

    #[test]
    fn hover_scales_card() {
        let mut state = state();
        state.cursor_entered();
        for _ in 0..300 {
            state.step(1.0 / 60.0);
        }
        let scale = state.showcase.scene.transform(state.showcase.card).unwrap().scale;
        assert!((scale.x - 1.05).abs() < 1e-3);

        state.cursor_left();
        assert!(!state.motion.hovering());
    }

    #[test]
    fn drag_orbits_camera() {
        let mut state = state();
        let before = state.camera.position();
        state.cursor_moved(Vec2::new(400.0, 300.0));
        state.button(PointerButton::Primary, true);
        state.cursor_moved(Vec2::new(500.0, 300.0));
        state.step(1.0 / 60.0);
        assert_ne!(state.camera.position(), before);
        assert!((state.camera.distance() - before.length()).abs() < 1e-4);
    }

    #[test]
    fn wheel_zooms_within_limits() {
        let mut state = state();
        for _ in 0..200 {
            state.wheel(1.0);
        }
        state.step(1.0 / 60.0);
        assert!((state.camera.distance() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut state = state();
        state.resize(UVec2::new(1000, 500));
        assert_eq!(state.camera.aspect, 2.0);
        assert_eq!(state.pointer.viewport(), UVec2::new(1000, 500));
    }

    #[test]
    fn unmounted_widget_ignores_input_and_frames() {
        let mut state = state();
        assert_eq!(state.unmount(), Teardown::Dispose);
        let target = state.motion.target_rotation();
        state.cursor_moved(Vec2::new(0.0, 0.0));
        state.resize(UVec2::new(10, 10));
        assert_eq!(state.motion.target_rotation(), target);
        assert_ne!(state.pointer.viewport(), UVec2::new(10, 10));
        assert!(!state.step(1.0 / 60.0));
        assert_eq!(state.unmount(), Teardown::AlreadyDisposed);
    }

    #[test]
    fn card_bobs_over_time() {
        let mut state = state();
        for _ in 0..60 {
            state.step(1.0 / 60.0);
        }
        let y = state.showcase.scene.transform(state.showcase.card).unwrap().position.y;
        assert!(y > 0.0 && y <= 0.03);
        let glow_y = state.showcase.scene.transform(state.showcase.glow).unwrap().position.y;
        assert_eq!(glow_y, y);
    }
}
