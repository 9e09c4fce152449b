//! Static export of the widget's assets.
//!
//! Layout of the output directory:
//! ```text
//! card-image.png   - front face image (placeholder if the source is missing)
//! glow.png         - generated glow gradient
//! scene.json       - the showcase scene as built from the configuration
//! holocard.yaml    - the configuration the bundle was built from
//! manifest.json    - base path, public URLs and SHA-256 of every file above
//! .nojekyll        - keeps static hosts from dropping dot/underscore paths
//! ```

use holocard_assets::{AssetError, PLACEHOLDER_COLOR, glow, load_texture_or_placeholder, sha256_hex};
use holocard_config::{ConfigError, HolocardConfig};
use holocard_scene::Showcase;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MANIFEST_VERSION: u32 = 1;

/// Errors from writing an export bundle.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// One file of the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedAsset {
    pub file: String,
    /// Public URL including the base path.
    pub url: String,
    pub sha256: String,
    pub bytes: u64,
}

/// Contents of `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub manifest_version: u32,
    pub generator: String,
    pub base_path: String,
    pub assets: Vec<ExportedAsset>,
}

impl ExportManifest {
    pub fn asset(&self, file: &str) -> Option<&ExportedAsset> {
        self.assets.iter().find(|a| a.file == file)
    }
}

/// Writes the static bundle described by a configuration.
pub struct StaticExport<'a> {
    config: &'a HolocardConfig,
    out_dir: PathBuf,
}

impl<'a> StaticExport<'a> {
    pub fn new(config: &'a HolocardConfig) -> Self {
        Self {
            config,
            out_dir: config.export.out_dir.clone(),
        }
    }

    /// Write into `out_dir` instead of the configured directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write every file of the bundle and return the manifest.
    pub fn run(&self) -> Result<ExportManifest, ExportError> {
        let _span = tracing::info_span!("export", out_dir = %self.out_dir.display()).entered();
        self.config.validate()?;
        create_dir(&self.out_dir)?;

        let scene_params = &self.config.scene;
        let mut assets = Vec::new();

        let card = load_texture_or_placeholder(&scene_params.card.texture, PLACEHOLDER_COLOR);
        assets.push(self.write("card-image.png", &card.encode_png()?)?);

        let glow_params = &scene_params.glow;
        let glow = glow::radial_gradient(
            glow_params.texture_size,
            glow_params.inner_radius,
            glow_params.outer_radius,
            &glow_params.stops(),
        )?;
        assets.push(self.write("glow.png", &glow.encode_png()?)?);

        let showcase = Showcase::build(scene_params);
        let scene_json = serde_json::to_vec_pretty(&showcase.scene)?;
        assets.push(self.write("scene.json", &scene_json)?);

        let config_yaml = self.config.to_yaml_string()?;
        assets.push(self.write("holocard.yaml", config_yaml.as_bytes())?);

        let manifest = ExportManifest {
            manifest_version: MANIFEST_VERSION,
            generator: format!("holocard-tools {}", env!("CARGO_PKG_VERSION")),
            base_path: self.config.export.base_path.clone(),
            assets,
        };
        self.write("manifest.json", &serde_json::to_vec_pretty(&manifest)?)?;
        self.write(".nojekyll", b"")?;

        tracing::info!(files = manifest.assets.len() + 2, "export complete");
        Ok(manifest)
    }

    fn write(&self, file: &str, bytes: &[u8]) -> Result<ExportedAsset, ExportError> {
        let path = self.out_dir.join(file);
        std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(file, bytes = bytes.len(), "wrote export file");
        Ok(ExportedAsset {
            file: file.to_string(),
            url: self.config.export.url_for(file),
            sha256: sha256_hex(bytes),
            bytes: bytes.len() as u64,
        })
    }
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocard_assets::load_texture;

    fn config(dir: &Path) -> HolocardConfig {
        let mut config = HolocardConfig::default();
        config.scene.card.texture = dir.join("missing.png");
        config.scene.glow.texture_size = 32;
        config.scene.stars.seed = Some(11);
        config.export.out_dir = dir.join("out");
        config
    }

    #[test]
    fn writes_full_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let manifest = StaticExport::new(&config).run().unwrap();

        let out = dir.path().join("out");
        for file in [
            "card-image.png",
            "glow.png",
            "scene.json",
            "holocard.yaml",
            "manifest.json",
            ".nojekyll",
        ] {
            assert!(out.join(file).exists(), "{file} missing");
        }
        assert_eq!(manifest.base_path, "/3d-card");
        assert_eq!(manifest.assets.len(), 4);
        assert_eq!(
            manifest.asset("glow.png").unwrap().url,
            "/3d-card/glow.png"
        );
    }

    #[test]
    fn manifest_hashes_match_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let export = StaticExport::new(&config);
        let manifest = export.run().unwrap();

        let on_disk: ExportManifest = serde_json::from_slice(
            &std::fs::read(export.out_dir().join("manifest.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(on_disk, manifest);

        for asset in &manifest.assets {
            let bytes = std::fs::read(export.out_dir().join(&asset.file)).unwrap();
            assert_eq!(sha256_hex(&bytes), asset.sha256, "{}", asset.file);
            assert_eq!(bytes.len() as u64, asset.bytes);
        }
    }

    #[test]
    fn missing_card_image_exports_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let export = StaticExport::new(&config);
        export.run().unwrap();

        let card = load_texture(export.out_dir().join("card-image.png")).unwrap();
        assert_eq!((card.width, card.height), (1, 1));
        assert_eq!(card.texel(0, 0), Some([0x0d, 0x0b, 0x12, 255]));

        let glow = load_texture(export.out_dir().join("glow.png")).unwrap();
        assert_eq!((glow.width, glow.height), (32, 32));
    }

    #[test]
    fn out_dir_override_and_root_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.export.base_path = String::new();
        let manifest = StaticExport::new(&config)
            .with_out_dir(dir.path().join("elsewhere"))
            .run()
            .unwrap();
        assert!(dir.path().join("elsewhere/manifest.json").exists());
        assert!(!dir.path().join("out").exists());
        assert_eq!(manifest.asset("scene.json").unwrap().url, "/scene.json");
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.export.base_path = "no-slash".into();
        let err = StaticExport::new(&config).run().unwrap_err();
        assert!(matches!(err, ExportError::Config(ConfigError::BasePath(_))));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn empty_glow_texture_leaves_no_partial_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.scene.glow.texture_size = 0;
        let err = StaticExport::new(&config).run().unwrap_err();
        assert!(matches!(
            err,
            ExportError::Config(ConfigError::GlowTextureSize(0))
        ));
        assert!(!dir.path().join("out/card-image.png").exists());
    }
}
