use serde::{Deserialize, Serialize};

use super::toggles::LightingToggles;

/// Canned combinations of lighting switches, one per hotkey.
///
/// The numbered presets leave `texture` as it was; the two texture presets
/// set it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingPreset {
    Off,
    AmbientOnly,
    SpecularOnly,
    AmbientSpecular,
    AmbientSpecularEmissive,
    AllButCustom,
    All,
    Untextured,
    Textured,
}

impl LightingPreset {
    pub const ALL: [LightingPreset; 9] = [
        LightingPreset::Off,
        LightingPreset::AmbientOnly,
        LightingPreset::SpecularOnly,
        LightingPreset::AmbientSpecular,
        LightingPreset::AmbientSpecularEmissive,
        LightingPreset::AllButCustom,
        LightingPreset::All,
        LightingPreset::Untextured,
        LightingPreset::Textured,
    ];

    pub fn apply(self, current: LightingToggles) -> LightingToggles {
        let (ambient, diffuse, specular, custom, emissive) = match self {
            LightingPreset::Off => (false, false, false, false, false),
            LightingPreset::AmbientOnly => (true, false, false, false, false),
            LightingPreset::SpecularOnly => (false, false, true, false, false),
            LightingPreset::AmbientSpecular => (true, false, true, false, false),
            LightingPreset::AmbientSpecularEmissive => (true, false, true, false, true),
            LightingPreset::AllButCustom => (true, true, true, false, true),
            LightingPreset::All => (true, true, true, true, true),
            LightingPreset::Untextured => (true, true, true, false, false),
            LightingPreset::Textured => (true, true, true, false, true),
        };
        let texture = match self {
            LightingPreset::Untextured => false,
            LightingPreset::Textured => true,
            _ => current.texture,
        };
        LightingToggles {
            ambient,
            diffuse,
            specular,
            custom,
            emissive,
            texture,
        }
    }
}
