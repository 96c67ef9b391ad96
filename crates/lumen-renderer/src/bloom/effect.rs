//! The bloom effect as it sits in the post-processing stack.

use lumen_common::EffectError;
use tracing::debug;

use super::apply::BloomParams;
use super::kernel::Kernel;
use crate::binding::{RenderTarget, RenderTargetFormat, ShaderBinding};
use crate::material::ShaderProgramDesc;
use crate::post_process::PostProcessEffect;

/// 5x5 convolution bloom.
#[derive(Debug, Clone)]
pub struct Bloom {
    pub enabled: bool,
    pub kernel: Kernel,
    shader: ShaderProgramDesc,
    format: RenderTargetFormat,
}

impl Default for Bloom {
    fn default() -> Self {
        Self {
            enabled: true,
            kernel: Kernel::default(),
            shader: ShaderProgramDesc::new(
                "Bloom",
                "shaders/vertex_shaders/fullscreen_quad.glsl",
                "shaders/fragment_shaders/post_effects/bloom.glsl",
            ),
            format: RenderTargetFormat::ColorRgb8,
        }
    }
}

impl Bloom {
    pub const NAME: &'static str = "Bloom";

    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the application config, keeping the default kernel.
    pub fn from_config(config: &lumen_config::LumenConfig) -> Self {
        Self {
            enabled: config.effects.enabled && config.effects.bloom.enabled,
            ..Self::default()
        }
    }

    pub fn shader(&self) -> &ShaderProgramDesc {
        &self.shader
    }

    pub fn format(&self) -> RenderTargetFormat {
        self.format
    }

    /// Params for a pass into `target`, from a snapshot of the kernel.
    pub fn params(&self, target: &dyn RenderTarget) -> Result<BloomParams, EffectError> {
        BloomParams::compute(&self.kernel, target)
    }
}

impl PostProcessEffect for Bloom {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply(
        &self,
        target: &dyn RenderTarget,
        binding: &mut dyn ShaderBinding,
    ) -> Result<(), EffectError> {
        // Validate before touching the binding so a bad target binds nothing.
        let params = self.params(target)?;
        binding.bind_program(&self.shader);
        params.bind(binding);
        debug!(
            "bloom bound: pixel_size = ({}, {})",
            params.pixel_size[0], params.pixel_size[1]
        );
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        Bloom::to_json(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
