//! Lighting preset keyboard shortcuts.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// One key per lighting preset. Keys are single key names such as `"1"`
/// or `"T"`; matching is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub off: String,
    pub ambient_only: String,
    pub specular_only: String,
    pub ambient_specular: String,
    pub ambient_specular_emissive: String,
    pub all_but_custom: String,
    pub all: String,
    pub untextured: String,
    pub textured: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            off: "1".into(),
            ambient_only: "2".into(),
            specular_only: "3".into(),
            ambient_specular: "4".into(),
            ambient_specular_emissive: "5".into(),
            all_but_custom: "6".into(),
            all: "7".into(),
            untextured: "T".into(),
            textured: "Y".into(),
        }
    }
}
