use holocard_common::Rgb;
use serde::{Deserialize, Serialize};

/// Presentation options of the GPU surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Multisample count for antialiasing. 1 disables it.
    pub msaa_samples: u32,
    /// Clear to transparent so the page/desktop shows through where supported.
    pub transparent: bool,
    /// Clear color used when the surface cannot be transparent.
    pub background: Rgb,
    pub vsync: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            msaa_samples: 4,
            transparent: true,
            background: Rgb::from_hex(0x05040a),
            vsync: true,
        }
    }
}

impl RenderSettings {
    /// Clear color as linear RGBA for the given surface capability.
    pub fn clear_color(&self, surface_supports_alpha: bool) -> [f64; 4] {
        if self.transparent && surface_supports_alpha {
            [0.0, 0.0, 0.0, 0.0]
        } else {
            let [r, g, b] = self.background.to_linear();
            [r as f64, g as f64, b as f64, 1.0]
        }
    }
}
