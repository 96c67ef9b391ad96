//! Post-processing effects run after the scene pass.
//!
//! Each effect is one full-screen pass. The stack applies enabled effects
//! in insertion order and persists them as one JSON document.

mod stack;

pub use stack::*;

use lumen_common::EffectError;

use crate::binding::{RenderTarget, ShaderBinding};

/// A full-screen effect that can be toggled, applied and persisted.
pub trait PostProcessEffect {
    /// Unique name; also the `"type"` tag in the persisted stack.
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Bind this effect's program and uniforms for a pass into `target`.
    fn apply(
        &self,
        target: &dyn RenderTarget,
        binding: &mut dyn ShaderBinding,
    ) -> Result<(), EffectError>;

    fn to_json(&self) -> serde_json::Value;
}
