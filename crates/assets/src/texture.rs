use holocard_common::Rgb;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::AssetError;

/// How texel values are to be interpreted when sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// sRGB encoded; decoded to linear by the sampler.
    Srgb,
    /// Values are used as-is.
    Linear,
}

/// Decoded RGBA8 image ready for upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureAsset {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    #[serde(skip)]
    pub rgba: Vec<u8>,
}

impl TextureAsset {
    pub fn from_rgba(
        name: impl Into<String>,
        width: u32,
        height: u32,
        color_space: ColorSpace,
        rgba: Vec<u8>,
    ) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(AssetError::BadDimensions {
                width,
                height,
                len: rgba.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            color_space,
            rgba,
        })
    }

    /// 1x1 texture of a single opaque color.
    pub fn solid(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            width: 1,
            height: 1,
            color_space: ColorSpace::Srgb,
            rgba: vec![color.r, color.g, color.b, 255],
        }
    }

    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, AssetError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            &self.rgba,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}

/// Stand-in for a card image that failed to load; matches the card body.
pub const PLACEHOLDER_COLOR: Rgb = Rgb::from_hex(0x0d0b12);

/// Decode an image file into an sRGB RGBA8 texture.
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureAsset, AssetError> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();
    let (width, height) = image.dimensions();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".into());
    tracing::info!(path = %path.display(), width, height, "loaded texture");
    TextureAsset::from_rgba(name, width, height, ColorSpace::Srgb, image.into_raw())
}

/// Load a texture, falling back to a solid color if the file is missing or unreadable.
pub fn load_texture_or_placeholder(path: impl AsRef<Path>, fallback: Rgb) -> TextureAsset {
    let path = path.as_ref();
    match load_texture(path) {
        Ok(texture) => texture,
        Err(e) => {
            tracing::warn!(path = %path.display(), "texture unavailable, using placeholder: {e}");
            TextureAsset::solid("placeholder", fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_card_image_decodes() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/card-image.png");
        let tex = load_texture(path).unwrap();
        assert_eq!((tex.width, tex.height), (480, 640));
        assert_eq!(tex.color_space, ColorSpace::Srgb);
        assert_ne!(tex.texel(0, 0), Some([0x0d, 0x0b, 0x12, 255]));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = TextureAsset::from_rgba("bad", 2, 2, ColorSpace::Srgb, vec![0; 15]).unwrap_err();
        assert!(matches!(err, AssetError::BadDimensions { len: 15, .. }));
        assert!(TextureAsset::from_rgba("empty", 0, 0, ColorSpace::Srgb, vec![]).is_err());
    }

    #[test]
    fn solid_texel() {
        let t = TextureAsset::solid("p", Rgb::from_hex(0x0d0b12));
        assert_eq!(t.texel(0, 0), Some([0x0d, 0x0b, 0x12, 255]));
        assert_eq!(t.texel(1, 0), None);
    }

    #[test]
    fn missing_file_falls_back_to_placeholder() {
        let t = load_texture_or_placeholder("does/not/exist.png", Rgb::WHITE);
        assert_eq!(t.name, "placeholder");
        assert_eq!((t.width, t.height), (1, 1));
    }

    #[test]
    fn png_written_then_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        let rgba: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 5) as u8).collect();
        let texture = TextureAsset::from_rgba("card", 4, 3, ColorSpace::Srgb, rgba).unwrap();
        std::fs::write(&path, texture.encode_png().unwrap()).unwrap();

        let loaded = load_texture(&path).unwrap();
        assert_eq!(loaded.name, "card.png");
        assert_eq!((loaded.width, loaded.height), (4, 3));
        assert_eq!(loaded.rgba, texture.rgba);
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(load_texture(&path), Err(AssetError::Image(_))));
    }
}
