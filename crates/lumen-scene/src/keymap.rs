use std::collections::HashMap;

use lumen_config::keybinds::normalize_key;
use lumen_config::schema::KeybindConfig;
use lumen_renderer::LightingPreset;

/// Maps key names to [`LightingPreset`]s.
///
/// Built from [`KeybindConfig`] when the layer loads.
pub struct LightingKeymap {
    bindings: HashMap<String, LightingPreset>,
}

impl LightingKeymap {
    /// Build the keymap from the config keybind section.
    ///
    /// Empty key strings are logged as warnings and skipped. When two presets
    /// share a key the later one wins.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: [(&str, LightingPreset); 9] = [
            (&config.off, LightingPreset::Off),
            (&config.ambient_only, LightingPreset::AmbientOnly),
            (&config.specular_only, LightingPreset::SpecularOnly),
            (&config.ambient_specular, LightingPreset::AmbientSpecular),
            (
                &config.ambient_specular_emissive,
                LightingPreset::AmbientSpecularEmissive,
            ),
            (&config.all_but_custom, LightingPreset::AllButCustom),
            (&config.all, LightingPreset::All),
            (&config.untextured, LightingPreset::Untextured),
            (&config.textured, LightingPreset::Textured),
        ];

        for (binding, preset) in mappings {
            let key = normalize_key(binding);
            if key.is_empty() {
                tracing::warn!("empty keybind for {preset:?}, skipping");
                continue;
            }
            if let Some(previous) = bindings.insert(key, preset) {
                tracing::warn!("keybind '{binding}' rebound from {previous:?} to {preset:?}");
            }
        }

        Self { bindings }
    }

    /// Look up the preset for a key name, case-insensitively.
    pub fn lookup(&self, key: &str) -> Option<LightingPreset> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// Reverse lookup: the key bound to `preset`, if any.
    pub fn key_for(&self, preset: LightingPreset) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, p)| **p == preset)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_all_presets() {
        let keymap = LightingKeymap::from_config(&KeybindConfig::default());
        assert_eq!(keymap.len(), 9);
        assert_eq!(keymap.lookup("1"), Some(LightingPreset::Off));
        assert_eq!(keymap.lookup("7"), Some(LightingPreset::All));
        assert_eq!(keymap.lookup("T"), Some(LightingPreset::Untextured));
        assert_eq!(keymap.lookup("Y"), Some(LightingPreset::Textured));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let keymap = LightingKeymap::from_config(&KeybindConfig::default());
        assert_eq!(keymap.lookup("t"), Some(LightingPreset::Untextured));
        assert_eq!(keymap.lookup(" y "), Some(LightingPreset::Textured));
    }

    #[test]
    fn unbound_key_is_none() {
        let keymap = LightingKeymap::from_config(&KeybindConfig::default());
        assert_eq!(keymap.lookup("Q"), None);
        assert_eq!(keymap.lookup(""), None);
    }

    #[test]
    fn empty_binding_is_skipped() {
        let config = KeybindConfig {
            all: String::new(),
            ..Default::default()
        };
        let keymap = LightingKeymap::from_config(&config);
        assert_eq!(keymap.len(), 8);
        assert_eq!(keymap.key_for(LightingPreset::All), None);
    }

    #[test]
    fn duplicate_binding_keeps_later_preset() {
        let config = KeybindConfig {
            textured: "t".into(),
            ..Default::default()
        };
        let keymap = LightingKeymap::from_config(&config);
        assert_eq!(keymap.len(), 8);
        assert_eq!(keymap.lookup("T"), Some(LightingPreset::Textured));
    }

    #[test]
    fn key_for_finds_binding() {
        let keymap = LightingKeymap::from_config(&KeybindConfig::default());
        assert_eq!(keymap.key_for(LightingPreset::AmbientOnly), Some("2"));
    }
}
