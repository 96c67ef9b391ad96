//! Configuration schema types for Lumen.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the tutorial scene ships with.

mod effects;
mod keybind_config;
mod lighting;
mod scene;
mod system;
mod window;

pub use effects::*;
pub use keybind_config::*;
pub use lighting::*;
pub use scene::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Lumen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LumenConfig {
    pub window: WindowConfig,
    pub effects: EffectsConfig,
    pub lighting: LightingConfig,
    pub keybinds: KeybindConfig,
    pub scene: SceneConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
