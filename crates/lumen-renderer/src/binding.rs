//! Seams between post-processing code and the host engine.
//!
//! The engine owns shader programs and framebuffers; effects only see these
//! two traits.

use crate::material::{ShaderProgramDesc, UniformValue};

/// A shading stage that accepts named uniforms.
pub trait ShaderBinding {
    /// Make `program` current before uniforms are written.
    fn bind_program(&mut self, _program: &ShaderProgramDesc) {}

    fn set_uniform(&mut self, name: &str, value: UniformValue);
}

/// Anything with a pixel size that an effect can render into.
pub trait RenderTarget {
    /// `(width, height)` in pixels, queried live on every call.
    fn size(&self) -> (u32, u32);
}

impl RenderTarget for (u32, u32) {
    fn size(&self) -> (u32, u32) {
        *self
    }
}

/// Color format an effect asks the host to allocate for its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTargetFormat {
    ColorRgb8,
    ColorRgba8,
    ColorRgba16F,
}
