use glam::Vec3;
use holocard_scene::{CameraParams, NodeKind, Scene};
use std::fmt::Write;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from(&CameraParams::default())
    }
}

impl From<&CameraParams> for RenderView {
    fn from(camera: &CameraParams) -> Self {
        Self {
            eye: camera.position,
            target: camera.target,
            fov_degrees: camera.fov_degrees,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a view configuration, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Produces a human-readable description of the scene.
///
/// Used for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Scene ({} nodes) ===", scene.node_count());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        );

        let lights = &scene.lighting;
        let _ = writeln!(
            out,
            "Lights: ambient {} x{:.2} | key {} x{:.2} from ({:.1}, {:.1}, {:.1}) | rim {} x{:.2} at ({:.1}, {:.1}, {:.1}) reach {:.1}",
            lights.ambient.color,
            lights.ambient.intensity,
            lights.key.color,
            lights.key.intensity,
            lights.key.position.x,
            lights.key.position.y,
            lights.key.position.z,
            lights.rim.color,
            lights.rim.intensity,
            lights.rim.position.x,
            lights.rim.position.y,
            lights.rim.position.z,
            lights.rim.distance,
        );

        for (id, node) in scene.nodes() {
            let p = node.transform.position;
            let e = node.transform.euler_xyz();
            let s = node.transform.scale;
            let detail = match &node.kind {
                NodeKind::Card(card) => format!(
                    "{:.2}x{:.2}x{:.2}",
                    card.width, card.height, card.thickness
                ),
                NodeKind::Glow(glow) => format!("{:.2}x{:.2} stops={}", glow.size.x, glow.size.y, glow.stops.len()),
                NodeKind::Starfield(stars) => format!("{} stars r={}", stars.len(), stars.radius),
            };
            let _ = writeln!(
                out,
                "  [{id}] {} ({}: {detail}) pos=({:.3}, {:.3}, {:.3}) rot=({:.3}, {:.3}, {:.3}) scale={:.3}",
                node.name,
                node.kind.label(),
                p.x,
                p.y,
                p.z,
                e.x,
                e.y,
                e.z,
                s.x,
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocard_scene::{Showcase, ShowcaseParams, StarfieldParams};

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = Scene::new();
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());
        assert!(output.contains("0 nodes"));
        assert!(output.contains("fov=35"));
    }

    #[test]
    fn debug_renderer_lists_showcase_nodes() {
        let showcase = Showcase::build(&ShowcaseParams {
            stars: StarfieldParams {
                seed: Some(1),
                ..StarfieldParams::default()
            },
            ..ShowcaseParams::default()
        });
        let view = RenderView::from(&showcase.scene.camera);
        let output = DebugTextRenderer::new().render(&showcase.scene, &view);

        assert!(output.contains("3 nodes"));
        assert!(output.contains("200 stars"));
        assert!(output.contains("card (card: 1.20x1.60x0.04)"));
        assert!(output.contains("rot=(-0.120"));
        assert!(output.contains("rim #8b5cf6"));
    }

    #[test]
    fn render_view_from_camera() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 35.0);
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.eye, Vec3::new(0.0, 0.8, 2.5));
    }
}
