//! Initial lighting-term switches for lit materials.

use serde::{Deserialize, Serialize};

/// Which shading terms are on when the scene is first built.
///
/// Keyboard presets change these at runtime; see `[keybinds]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    /// Rim-light term.
    pub custom: bool,
    pub emissive: bool,
    pub texture: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: true,
            diffuse: true,
            specular: true,
            custom: false,
            emissive: true,
            texture: true,
        }
    }
}
