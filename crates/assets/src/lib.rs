//! Assets for the card widget: the front-face image and the generated glow.
//!
//! Textures are identified by content hashes. The renderer consumes decoded
//! textures, never raw file paths.
//!
//! # Invariants
//! - A missing or unreadable card image never fails the widget; a solid
//!   placeholder takes its place.
//! - Registering identical pixel data twice yields the same id.

pub mod glow;
mod texture;

pub use texture::{
    ColorSpace, PLACEHOLDER_COLOR, TextureAsset, load_texture, load_texture_or_placeholder,
};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content-addressed asset ID computed from the texture data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub u64);

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BadDimensions { width: u32, height: u32, len: usize },
    #[error("asset not found: {0:?}")]
    NotFound(AssetId),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Content-addressed texture registry.
///
/// The index (names, sizes, hashes) can be persisted as JSON for inspection;
/// pixel data is not part of the index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetStore {
    textures: BTreeMap<AssetId, TextureAsset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture and return its asset ID.
    pub fn register_texture(&mut self, texture: TextureAsset) -> AssetId {
        let id = content_id(&texture);
        tracing::debug!(name = %texture.name, ?id, "registered texture");
        self.textures.insert(id, texture);
        id
    }

    pub fn get_texture(&self, id: AssetId) -> Option<&TextureAsset> {
        self.textures.get(&id)
    }

    pub fn require_texture(&self, id: AssetId) -> Result<&TextureAsset, AssetError> {
        self.get_texture(id).ok_or(AssetError::NotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetId, &TextureAsset)> {
        self.textures.iter().map(|(id, t)| (*id, t))
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Save the registry index to a JSON file.
    pub fn save_index(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a registry index from a JSON file. Pixel data is not restored.
    pub fn load_index(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file = std::fs::File::open(path)?;
        let store: Self = serde_json::from_reader(file)?;
        Ok(store)
    }
}

/// Lowercase hex SHA-256 of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn content_id(texture: &TextureAsset) -> AssetId {
    let mut hasher = Sha256::new();
    hasher.update(texture.width.to_le_bytes());
    hasher.update(texture.height.to_le_bytes());
    hasher.update(&texture.rgba);
    let result = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&result[..8]);
    AssetId(u64::from_le_bytes(bytes))
}

pub fn crate_info() -> &'static str {
    "holocard-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocard_common::Rgb;

    #[test]
    fn register_texture() {
        let mut store = AssetStore::new();
        let id = store.register_texture(TextureAsset::solid("white", Rgb::WHITE));
        assert!(store.get_texture(id).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn content_addressed_dedup() {
        let mut store = AssetStore::new();
        let a = store.register_texture(TextureAsset::solid("a", Rgb::WHITE));
        let b = store.register_texture(TextureAsset::solid("b", Rgb::WHITE));
        let c = store.register_texture(TextureAsset::solid("c", Rgb::BLACK));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_texture_error() {
        let store = AssetStore::new();
        assert!(matches!(
            store.require_texture(AssetId(1)),
            Err(AssetError::NotFound(AssetId(1)))
        ));
    }

    #[test]
    fn sha256_hex_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn save_and_load_index() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut store = AssetStore::new();
        store.register_texture(TextureAsset::solid("white", Rgb::WHITE));
        store.register_texture(glow::radial_gradient(8, 0.05, 0.5, &[]).unwrap());
        store.save_index(tmp.path()).unwrap();

        let loaded = AssetStore::load_index(tmp.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|(_, t)| t.rgba.is_empty()));
    }
}
