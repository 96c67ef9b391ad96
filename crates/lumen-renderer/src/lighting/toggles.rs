use serde::{Deserialize, Serialize};

use crate::binding::ShaderBinding;
use crate::material::UniformValue;

pub const AMBIENT_UNIFORM: &str = "u_ALight.isOn";
pub const DIFFUSE_UNIFORM: &str = "u_DLight.isOn";
pub const SPECULAR_UNIFORM: &str = "u_SLight.isOn";
pub const CUSTOM_UNIFORM: &str = "u_Custom.isOn";
pub const EMISSIVE_UNIFORM: &str = "emissiveIsOn";
pub const TEXTURE_UNIFORM: &str = "texIsOn";

/// Which shading terms lit materials evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingToggles {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    /// Rim light.
    pub custom: bool,
    pub emissive: bool,
    pub texture: bool,
}

impl Default for LightingToggles {
    fn default() -> Self {
        Self::from_config(&lumen_config::schema::LightingConfig::default())
    }
}

impl LightingToggles {
    pub fn from_config(config: &lumen_config::schema::LightingConfig) -> Self {
        Self {
            ambient: config.ambient,
            diffuse: config.diffuse,
            specular: config.specular,
            custom: config.custom,
            emissive: config.emissive,
            texture: config.texture,
        }
    }

    /// The six uniform writes these toggles imply, in a fixed order.
    pub fn uniform_writes(&self) -> [(&'static str, UniformValue); 6] {
        [
            (AMBIENT_UNIFORM, UniformValue::Bool(self.ambient)),
            (DIFFUSE_UNIFORM, UniformValue::Bool(self.diffuse)),
            (SPECULAR_UNIFORM, UniformValue::Bool(self.specular)),
            (CUSTOM_UNIFORM, UniformValue::Bool(self.custom)),
            (EMISSIVE_UNIFORM, UniformValue::Bool(self.emissive)),
            (TEXTURE_UNIFORM, UniformValue::Bool(self.texture)),
        ]
    }

    pub fn apply_to(&self, binding: &mut dyn ShaderBinding) {
        for (name, value) in self.uniform_writes() {
            binding.set_uniform(name, value);
        }
    }
}
