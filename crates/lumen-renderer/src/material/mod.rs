//! Materials: a shader plus the named uniform values written to it.

mod program;
mod uniform;

pub use program::*;
pub use uniform::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::binding::ShaderBinding;

/// A named set of uniform values for one shader program.
///
/// Uniforms are kept sorted by name so serialized materials diff cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Name of the shader program in the asset manifest.
    pub shader: String,
    #[serde(default)]
    pub uniforms: BTreeMap<String, UniformValue>,
}

impl Material {
    pub fn new(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
            uniforms: BTreeMap::new(),
        }
    }

    /// Set (or overwrite) a uniform.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) {
        self.uniforms.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }

    /// Read a boolean uniform; `None` if missing or of another type.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.uniforms.get(name) {
            Some(UniformValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl ShaderBinding for Material {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.uniforms.insert(name.to_string(), value);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_uniform() {
        let mut mat = Material::new("SwordMaterial", "Standard");
        mat.set("u_SLight.specularStrength", 1.0f32);
        mat.set("u_SLight.specularStrength", 5.0f32);
        assert_eq!(
            mat.get("u_SLight.specularStrength"),
            Some(&UniformValue::Float(5.0))
        );
        assert_eq!(mat.uniforms.len(), 1);
    }

    #[test]
    fn get_bool_ignores_other_types() {
        let mut mat = Material::new("m", "s");
        mat.set("texIsOn", true);
        mat.set("rim", 1.0f32);
        assert_eq!(mat.get_bool("texIsOn"), Some(true));
        assert_eq!(mat.get_bool("rim"), None);
        assert_eq!(mat.get_bool("missing"), None);
    }

    #[test]
    fn material_records_bindings() {
        let mut mat = Material::new("m", "s");
        let binding: &mut dyn ShaderBinding = &mut mat;
        binding.set_uniform("u_PixelSize", UniformValue::Vec2([0.5, 0.25]));
        assert_eq!(
            mat.get("u_PixelSize"),
            Some(&UniformValue::Vec2([0.5, 0.25]))
        );
    }

    #[test]
    fn material_json_roundtrip() {
        let mut mat = Material::new("BallMaterial", "Standard");
        mat.set("emissiveColor", [1.0f32, 0.0, 0.0]);
        mat.set("texColor", UniformValue::Texture("BallTexture".into()));
        let json = serde_json::to_string(&mat).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mat);
    }
}
