//! Per-frame parameters for the bloom pass.

use lumen_common::EffectError;

use super::kernel::{Kernel, KERNEL_LEN};
use crate::binding::{RenderTarget, ShaderBinding};
use crate::material::UniformValue;

/// Uniform name of the 25-float kernel array.
pub const FILTER_UNIFORM: &str = "u_Filter";
/// Uniform name of the `(1/width, 1/height)` step vector.
pub const PIXEL_SIZE_UNIFORM: &str = "u_PixelSize";

/// Everything the bloom shader needs for one frame.
///
/// `filter` is a copy of the kernel taken when the params were built, so
/// later edits cannot tear a frame's read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomParams {
    pub filter: [f32; KERNEL_LEN],
    /// 1.0 / target_width, 1.0 / target_height.
    pub pixel_size: [f32; 2],
}

impl BloomParams {
    /// Snapshot `kernel` and derive the step vector from `target`'s current size.
    ///
    /// A zero-width or zero-height target is refused.
    pub fn compute(kernel: &Kernel, target: &dyn RenderTarget) -> Result<Self, EffectError> {
        let (width, height) = target.size();
        if width == 0 || height == 0 {
            return Err(EffectError::DivideByZero(format!(
                "bloom target is {width}x{height}"
            )));
        }
        Ok(Self {
            filter: kernel.snapshot(),
            pixel_size: [1.0 / width as f32, 1.0 / height as f32],
        })
    }

    /// Write both uniforms to `binding`.
    pub fn bind(&self, binding: &mut dyn ShaderBinding) {
        binding.set_uniform(FILTER_UNIFORM, UniformValue::FloatArray(self.filter.to_vec()));
        binding.set_uniform(PIXEL_SIZE_UNIFORM, UniformValue::Vec2(self.pixel_size));
    }

    /// Pack into the GPU-side layout.
    pub fn to_uniforms(&self) -> BloomUniforms {
        BloomUniforms {
            filter: self.filter,
            _padding: 0.0,
            pixel_size: self.pixel_size,
        }
    }
}

/// Bloom uniform block as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniforms {
    pub filter: [f32; KERNEL_LEN],
    pub _padding: f32,
    pub pixel_size: [f32; 2],
}

// =============================================================================
// Tests
// =============================================================================
