use holocard_input::PointerParams;
use holocard_motion::MotionParams;
use holocard_render::RenderSettings;
use holocard_scene::ShowcaseParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Where and how the static bundle is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportParams {
    /// URL prefix the bundle is served under, e.g. `/3d-card`.
    pub base_path: String,
    pub out_dir: PathBuf,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            base_path: "/3d-card".to_string(),
            out_dir: PathBuf::from("out"),
        }
    }
}

impl ExportParams {
    /// Public URL of a file at the root of the bundle.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.base_path)
    }
}

/// Every setting of the widget in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolocardConfig {
    pub scene: ShowcaseParams,
    pub motion: MotionParams,
    pub pointer: PointerParams,
    pub render: RenderSettings,
    pub export: ExportParams,
}

impl HolocardConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null, not as an empty map
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.to_yaml_string()?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }
}
