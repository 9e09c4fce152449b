use glam::Vec2;
use holocard_common::{ColorStop, NodeId, Transform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::camera::CameraParams;
use crate::light::LightingParams;
use crate::material::CardFaces;
use crate::starfield::Starfield;

/// A thin box whose six faces render with the card materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardNode {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub faces: CardFaces,
}

/// Flat, unlit, alpha-blended quad textured with a radial gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowNode {
    pub size: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Card(CardNode),
    Glow(GlowNode),
    Starfield(Starfield),
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Card(_) => "card",
            NodeKind::Glow(_) => "glow",
            NodeKind::Starfield(_) => "starfield",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
}

/// The set of renderable objects of the widget, plus lights and camera.
///
/// Uses BTreeMap so nodes iterate in creation order, which is also the
/// order they are listed in dumps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    nodes: BTreeMap<NodeId, Node>,
    next_id: u32,
    pub lighting: LightingParams,
    pub camera: CameraParams,
}

impl Scene {
    /// Create an empty scene with default lights and camera.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(lighting: LightingParams, camera: CameraParams) -> Self {
        Self {
            lighting,
            camera,
            ..Self::default()
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only access to all nodes, in creation order.
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    /// Add a node and return its id.
    pub fn spawn(&mut self, name: impl Into<String>, kind: NodeKind, transform: Transform) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let name = name.into();
        tracing::trace!(%id, %name, kind = kind.label(), "spawn node");
        self.nodes.insert(
            id,
            Node {
                name,
                kind,
                transform,
            },
        );
        id
    }

    /// Remove a node. Its id is not handed out again.
    pub fn despawn(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// First node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| *id)
    }

    /// Replace a node's transform. Returns false if the node does not exist.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.transform = transform;
                true
            }
            None => false,
        }
    }

    pub fn transform(&self, id: NodeId) -> Option<Transform> {
        self.nodes.get(&id).map(|n| n.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::starfield::StarfieldParams;
    use glam::Vec3;

    fn stars() -> NodeKind {
        NodeKind::Starfield(Starfield::generate(&StarfieldParams {
            count: 3,
            seed: Some(0),
            ..StarfieldParams::default()
        }))
    }

    #[test]
    fn scene_starts_empty() {
        let scene = Scene::new();
        assert_eq!(scene.node_count(), 0);
        assert!(scene.find("card").is_none());
    }

    #[test]
    fn spawn_find_and_despawn() {
        let mut scene = Scene::new();
        let id = scene.spawn("stars", stars(), Transform::default());
        assert_eq!(scene.find("stars"), Some(id));
        assert!(scene.despawn(id).is_some());
        assert_eq!(scene.node_count(), 0);
        assert!(scene.despawn(id).is_none());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut scene = Scene::new();
        let a = scene.spawn("a", stars(), Transform::default());
        scene.despawn(a);
        let b = scene.spawn("b", stars(), Transform::default());
        assert_ne!(a, b);
    }

    #[test]
    fn set_transform_on_missing_node() {
        let mut scene = Scene::new();
        assert!(!scene.set_transform(NodeId(9), Transform::default()));

        let id = scene.spawn("a", stars(), Transform::default());
        let moved = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));
        assert!(scene.set_transform(id, moved));
        assert_eq!(scene.transform(id), Some(moved));
    }

    #[test]
    fn nodes_iterate_in_creation_order() {
        let mut scene = Scene::new();
        let ids: Vec<NodeId> = (0..10)
            .map(|i| scene.spawn(format!("n{i}"), stars(), Transform::default()))
            .collect();
        let keys: Vec<NodeId> = scene.nodes().keys().copied().collect();
        assert_eq!(keys, ids);
    }
}
