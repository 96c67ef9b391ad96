//! Scene construction settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Load `path` instead of building the default scene, when it exists.
    pub load_from_file: bool,
    pub path: String,
    /// Asset manifest written next to a freshly built scene.
    pub manifest: String,
    /// Write the scene and manifest after building the default scene.
    pub save_on_build: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            load_from_file: false,
            path: "scene.json".into(),
            manifest: "scene-manifest.json".into(),
            save_on_build: true,
        }
    }
}
