use glam::Vec3;
use holocard_common::NodeId;
use holocard_motion::CardMotion;
use holocard_scene::Scene;

/// Scene inspector for developer tooling.
///
/// Read-only queries against the scene for the CLI and the debug overlay.
pub struct SceneInspector;

impl SceneInspector {
    pub fn summary(scene: &Scene) -> SceneSummary {
        SceneSummary {
            node_count: scene.node_count(),
            camera_distance: scene.camera.distance(),
            fov_degrees: scene.camera.fov_degrees,
        }
    }

    pub fn inspect_node(scene: &Scene, id: NodeId) -> Option<NodeInfo> {
        scene.get(id).map(|node| NodeInfo {
            id,
            name: node.name.clone(),
            kind: node.kind.label(),
            position: node.transform.position,
            rotation: node.transform.euler_xyz(),
            scale: node.transform.scale,
        })
    }

    /// All node ids, in creation order.
    pub fn list_nodes(scene: &Scene) -> Vec<NodeId> {
        scene.nodes().keys().copied().collect()
    }
}

#[derive(Debug, Clone)]
pub struct SceneSummary {
    pub node_count: usize,
    pub camera_distance: f32,
    pub fov_degrees: f32,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: nodes={} camera_distance={:.2} fov={:.0}",
            self.node_count, self.camera_distance, self.fov_degrees
        )
    }
}

/// Detailed info about a single node.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    pub id: NodeId,
    pub name: String,
    pub kind: &'static str,
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl std::fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node [{}] {} ({}) pos=({:.3}, {:.3}, {:.3}) rot=({:.3}, {:.3}, {:.3}) scale=({:.3}, {:.3}, {:.3})",
            self.id,
            self.name,
            self.kind,
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.scale.x,
            self.scale.y,
            self.scale.z,
        )
    }
}

/// Snapshot of the card motion state.
#[derive(Debug, Clone)]
pub struct MotionReport {
    pub ticks: u64,
    pub elapsed: f64,
    pub hovering: bool,
    /// (pitch, yaw) in radians.
    pub rotation: [f32; 2],
    pub target_rotation: [f32; 2],
    pub scale: f32,
    pub target_scale: f32,
    pub bob_offset: f32,
}

impl MotionReport {
    pub fn capture(motion: &CardMotion) -> Self {
        let rotation = motion.rotation();
        let target = motion.target_rotation();
        Self {
            ticks: motion.ticks(),
            elapsed: motion.elapsed(),
            hovering: motion.hovering(),
            rotation: [rotation.x, rotation.y],
            target_rotation: [target.x, target.y],
            scale: motion.scale().x,
            target_scale: motion.target_scale(),
            bob_offset: motion.bob_offset(),
        }
    }

    /// Largest remaining distance between an eased value and its target.
    pub fn settle_error(&self) -> f32 {
        (self.rotation[0] - self.target_rotation[0])
            .abs()
            .max((self.rotation[1] - self.target_rotation[1]).abs())
            .max((self.scale - self.target_scale).abs())
    }
}

impl std::fmt::Display for MotionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Motion: ticks={} t={:.3}s hover={} pitch={:.4}/{:.4} yaw={:.4}/{:.4} scale={:.4}/{:.4} bob={:+.4}",
            self.ticks,
            self.elapsed,
            self.hovering,
            self.rotation[0],
            self.target_rotation[0],
            self.rotation[1],
            self.target_rotation[1],
            self.scale,
            self.target_scale,
            self.bob_offset,
        )
    }
}
