//! The application layer that owns the tutorial scene.

use std::path::Path;

use lumen_common::LumenError;
use lumen_config::LumenConfig;
use lumen_renderer::{LightingPreset, LightingToggles};
use tracing::{debug, info};

use crate::default_scene::{build_default_scene, LIT_SHADER};
use crate::keymap::LightingKeymap;
use crate::scene::Scene;

/// Builds or loads the scene on startup and switches lighting presets on
/// key presses.
pub struct DefaultSceneLayer {
    scene: Option<Scene>,
    toggles: LightingToggles,
    keymap: LightingKeymap,
    lit_materials: Vec<String>,
}

impl DefaultSceneLayer {
    pub const NAME: &'static str = "Default Scene";

    pub fn new(config: &LumenConfig) -> Self {
        Self {
            scene: None,
            toggles: LightingToggles::from_config(&config.lighting),
            keymap: LightingKeymap::from_config(&config.keybinds),
            lit_materials: Vec::new(),
        }
    }

    /// Load or build the scene. Relative scene paths resolve against `base_dir`.
    ///
    /// With `scene.load_from_file` set and the scene file present, the file is
    /// loaded as is. Otherwise the default scene is built with the current
    /// toggles and, when `scene.save_on_build` is set, written out together
    /// with its asset manifest.
    pub fn on_app_load(
        &mut self,
        config: &LumenConfig,
        base_dir: &Path,
    ) -> Result<&Scene, LumenError> {
        let scene_path = base_dir.join(&config.scene.path);

        let scene = if config.scene.load_from_file && scene_path.exists() {
            let scene = Scene::load(&scene_path)?;
            self.lit_materials = scene
                .materials
                .iter()
                .filter(|m| m.shader == LIT_SHADER)
                .map(|m| m.name.clone())
                .collect();
            scene
        } else {
            let bundle = build_default_scene(&self.toggles);
            bundle.scene.validate(&bundle.manifest)?;
            if config.scene.save_on_build {
                bundle
                    .manifest
                    .save(&base_dir.join(&config.scene.manifest))?;
                bundle.scene.save(&scene_path)?;
            }
            self.lit_materials = bundle.lit_materials;
            info!(
                objects = bundle.scene.object_count(),
                "built default scene"
            );
            bundle.scene
        };

        let scene: &Scene = self.scene.insert(scene);
        Ok(scene)
    }

    /// Handle a key press. Returns whether the key triggered a preset.
    pub fn on_key(&mut self, key: &str) -> bool {
        match self.keymap.lookup(key) {
            Some(preset) => {
                self.apply_preset(preset);
                true
            }
            None => false,
        }
    }

    /// Switch to `preset` and rewrite the toggle uniforms of every lit
    /// material.
    pub fn apply_preset(&mut self, preset: LightingPreset) {
        self.toggles = preset.apply(self.toggles);
        info!(?preset, "lighting preset");

        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        for name in &self.lit_materials {
            if let Some(material) = scene.find_material_mut(name) {
                self.toggles.apply_to(material);
                debug!(material = %name, "lighting toggles applied");
            }
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn toggles(&self) -> LightingToggles {
        self.toggles
    }

    pub fn lit_materials(&self) -> &[String] {
        &self.lit_materials
    }
}

// =============================================================================
// Tests
// =============================================================================
