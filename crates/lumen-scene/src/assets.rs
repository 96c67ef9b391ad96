//! Asset manifest: every shader, mesh and texture a scene refers to.
//!
//! Objects and materials refer to assets by manifest key, never by path.

use std::collections::BTreeMap;
use std::path::Path;

use lumen_common::SceneError;
use lumen_renderer::ShaderProgramDesc;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Linear,
    Nearest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    #[default]
    Repeat,
    ClampToEdge,
}

/// An image file plus its sampler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureDesc {
    pub path: String,
    #[serde(default)]
    pub min_filter: FilterMode,
    #[serde(default)]
    pub mag_filter: FilterMode,
    #[serde(default)]
    pub wrap: WrapMode,
}

impl TextureDesc {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            min_filter: FilterMode::default(),
            mag_filter: FilterMode::default(),
            wrap: WrapMode::default(),
        }
    }

    pub fn nearest(mut self) -> Self {
        self.min_filter = FilterMode::Nearest;
        self.mag_filter = FilterMode::Nearest;
        self
    }

    pub fn clamped(mut self) -> Self {
        self.wrap = WrapMode::ClampToEdge;
        self
    }
}

/// A generated 1x1 RGB texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidTexture {
    pub rgb: [f32; 3],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub shaders: BTreeMap<String, ShaderProgramDesc>,
    /// Mesh name → OBJ path.
    pub meshes: BTreeMap<String, String>,
    pub textures: BTreeMap<String, TextureDesc>,
    pub solid_textures: BTreeMap<String, SolidTexture>,
    /// 1D color lookup tables.
    pub luts: BTreeMap<String, TextureDesc>,
    /// Cubemap name → face image path.
    pub cubemaps: BTreeMap<String, String>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shader(&mut self, key: &str, desc: ShaderProgramDesc) {
        self.shaders.insert(key.to_string(), desc);
    }

    pub fn add_mesh(&mut self, key: &str, path: &str) {
        self.meshes.insert(key.to_string(), path.to_string());
    }

    pub fn add_texture(&mut self, key: &str, desc: TextureDesc) {
        self.textures.insert(key.to_string(), desc);
    }

    pub fn add_solid_texture(&mut self, key: &str, rgb: [f32; 3]) {
        self.solid_textures
            .insert(key.to_string(), SolidTexture { rgb });
    }

    pub fn add_lut(&mut self, key: &str, desc: TextureDesc) {
        self.luts.insert(key.to_string(), desc);
    }

    pub fn add_cubemap(&mut self, key: &str, path: &str) {
        self.cubemaps.insert(key.to_string(), path.to_string());
    }

    /// Whether `key` names any 2D texture (file-backed or solid).
    pub fn has_texture(&self, key: &str) -> bool {
        self.textures.contains_key(key) || self.solid_textures.contains_key(key)
    }

    pub fn require_shader(&self, key: &str) -> Result<(), SceneError> {
        require(self.shaders.contains_key(key), "shader", key)
    }

    pub fn require_mesh(&self, key: &str) -> Result<(), SceneError> {
        require(self.meshes.contains_key(key), "mesh", key)
    }

    pub fn require_texture(&self, key: &str) -> Result<(), SceneError> {
        require(self.has_texture(key), "texture", key)
    }

    pub fn require_cubemap(&self, key: &str) -> Result<(), SceneError> {
        require(self.cubemaps.contains_key(key), "cubemap", key)
    }

    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::Parse(format!("failed to serialize manifest: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            SceneError::Io(format!("failed to write {}: {e}", path.display()))
        })?;
        info!("saved asset manifest to {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SceneError::Io(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| SceneError::Parse(format!("failed to parse {}: {e}", path.display())))
    }
}

fn require(present: bool, kind: &str, key: &str) -> Result<(), SceneError> {
    if present {
        Ok(())
    } else {
        Err(SceneError::MissingAsset(format!("{kind} '{key}'")))
    }
}
