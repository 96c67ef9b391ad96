pub mod binding;
pub mod bloom;
pub mod lighting;
pub mod material;
pub mod post_process;

pub use binding::{RenderTarget, RenderTargetFormat, ShaderBinding};
pub use bloom::{Bloom, BloomEditor, BloomParams, EditorAction, Kernel};
pub use lighting::{LightingPreset, LightingToggles};
pub use material::{Material, ShaderProgramDesc, UniformValue};
pub use post_process::{PostProcessEffect, PostProcessStack};
