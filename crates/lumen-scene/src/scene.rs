//! The scene document: camera, object tree, materials and environment.

use std::path::Path;

use lumen_common::SceneError;
use lumen_renderer::{Material, UniformValue};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assets::AssetManifest;
use crate::object::GameObject;

/// Cubemap environment drawn behind everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skybox {
    pub cubemap: String,
    pub shader: String,
    /// Axis-angle rotation, degrees.
    pub rotation_axis: [f32; 3],
    pub rotation_degrees: f32,
}

/// Defaults for the immediate-mode UI batcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiDefaults {
    pub texture: String,
    pub border_radius: u32,
}

impl Default for GuiDefaults {
    fn default() -> Self {
        Self {
            texture: "ui_sprite".into(),
            border_radius: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub camera: GameObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skybox: Option<Skybox>,
    /// Color grading lookup table, by manifest key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_lut: Option<String>,
    #[serde(default)]
    pub gui: GuiDefaults,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub objects: Vec<GameObject>,
}

impl Scene {
    pub fn new(camera: GameObject) -> Self {
        Self {
            camera,
            skybox: None,
            color_lut: None,
            gui: GuiDefaults::default(),
            materials: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Find an object by name, camera included.
    pub fn find(&self, name: &str) -> Option<&GameObject> {
        self.camera
            .find(name)
            .or_else(|| self.objects.iter().find_map(|o| o.find(name)))
    }

    pub fn find_material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn find_material_mut(&mut self, name: &str) -> Option<&mut Material> {
        self.materials.iter_mut().find(|m| m.name == name)
    }

    /// Total objects in the scene graph, camera included.
    pub fn object_count(&self) -> usize {
        self.camera.count() + self.objects.iter().map(GameObject::count).sum::<usize>()
    }

    /// Check every asset name the scene uses against `manifest`.
    pub fn validate(&self, manifest: &AssetManifest) -> Result<(), SceneError> {
        for material in &self.materials {
            manifest.require_shader(&material.shader)?;
            for value in material.uniforms.values() {
                if let UniformValue::Texture(key) = value {
                    manifest.require_texture(key)?;
                }
            }
        }

        let mut rendered = Vec::new();
        for root in std::iter::once(&self.camera).chain(&self.objects) {
            root.walk(&mut |obj| {
                if let Some(render) = &obj.render {
                    rendered.push((obj.name.as_str(), render));
                }
            });
        }
        for (name, render) in rendered {
            manifest.require_mesh(&render.mesh)?;
            if self.find_material(&render.material).is_none() {
                return Err(SceneError::MissingAsset(format!(
                    "material '{}' used by '{name}'",
                    render.material
                )));
            }
        }

        if let Some(skybox) = &self.skybox {
            manifest.require_cubemap(&skybox.cubemap)?;
            manifest.require_shader(&skybox.shader)?;
        }
        if let Some(lut) = &self.color_lut {
            if !manifest.luts.contains_key(lut) {
                return Err(SceneError::MissingAsset(format!("lut '{lut}'")));
            }
        }
        manifest.require_texture(&self.gui.texture)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::Parse(format!("failed to serialize scene: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            SceneError::Io(format!("failed to write {}: {e}", path.display()))
        })?;
        info!(
            objects = self.object_count(),
            "saved scene to {}",
            path.display()
        );
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SceneError::Io(format!("failed to read {}: {e}", path.display())))?;
        let scene: Scene = serde_json::from_str(&content)
            .map_err(|e| SceneError::Parse(format!("failed to parse {}: {e}", path.display())))?;
        info!(
            objects = scene.object_count(),
            "loaded scene from {}",
            path.display()
        );
        Ok(scene)
    }
}

// =============================================================================
// Tests
// =============================================================================
