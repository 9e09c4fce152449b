use holocard_common::Rgb;
use serde::{Deserialize, Serialize};

/// Physically based surface description used by the card faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalMaterial {
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    /// Strength of the thin clear lacquer layer on top of the base.
    pub clearcoat: f32,
    /// Scales the dielectric specular reflectance (0.5 = 4 %).
    pub reflectivity: f32,
    /// Sample the card texture as base color.
    pub textured: bool,
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            metalness: 0.0,
            roughness: 1.0,
            clearcoat: 0.0,
            reflectivity: 0.5,
            textured: false,
        }
    }
}

impl PhysicalMaterial {
    /// Dark lacquered rim of the card.
    pub fn card_edge() -> Self {
        Self {
            color: Rgb::from_hex(0x0d0b12),
            metalness: 0.1,
            roughness: 0.6,
            clearcoat: 0.4,
            ..Self::default()
        }
    }

    /// Printed front face.
    pub fn card_front() -> Self {
        Self {
            color: Rgb::WHITE,
            metalness: 0.0,
            roughness: 0.35,
            reflectivity: 0.5,
            textured: true,
            ..Self::default()
        }
    }

    pub fn card_back() -> Self {
        Self {
            color: Rgb::from_hex(0x0d0b12),
            metalness: 0.05,
            roughness: 0.5,
            ..Self::default()
        }
    }
}

/// Material slot a box face renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceSlot {
    Edge,
    Front,
    Back,
}

impl FaceSlot {
    /// Slot per box face in `+X, -X, +Y, -Y, +Z, -Z` order.
    pub const BOX_FACES: [FaceSlot; 6] = [
        FaceSlot::Edge,
        FaceSlot::Edge,
        FaceSlot::Edge,
        FaceSlot::Edge,
        FaceSlot::Front,
        FaceSlot::Back,
    ];

    pub fn index(self) -> u32 {
        match self {
            FaceSlot::Edge => 0,
            FaceSlot::Front => 1,
            FaceSlot::Back => 2,
        }
    }
}

/// The three materials a card is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFaces {
    pub edge: PhysicalMaterial,
    pub front: PhysicalMaterial,
    pub back: PhysicalMaterial,
}

impl Default for CardFaces {
    fn default() -> Self {
        Self {
            edge: PhysicalMaterial::card_edge(),
            front: PhysicalMaterial::card_front(),
            back: PhysicalMaterial::card_back(),
        }
    }
}

impl CardFaces {
    pub fn get(&self, slot: FaceSlot) -> &PhysicalMaterial {
        match slot {
            FaceSlot::Edge => &self.edge,
            FaceSlot::Front => &self.front,
            FaceSlot::Back => &self.back,
        }
    }

    /// Materials ordered by `FaceSlot::index`.
    pub fn slots(&self) -> [&PhysicalMaterial; 3] {
        [&self.edge, &self.front, &self.back]
    }
}
