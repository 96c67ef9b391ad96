//! Post-processing effects configuration types.
//!
//! The bloom kernel itself lives in its own JSON document (see
//! `effects.bloom.document`); this section only says where to find it and
//! how to treat it on load.

use serde::{Deserialize, Serialize};

/// Bloom (5x5 convolution) effect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub enabled: bool,
    /// Path of the bloom JSON document (`{"enabled", "filter"}`).
    pub document: String,
    /// Normalize the kernel right after loading it.
    pub normalize_on_load: bool,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            document: "bloom.json".into(),
            normalize_on_load: false,
        }
    }
}

/// Master effects configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Master toggle. False disables every effect.
    pub enabled: bool,
    pub bloom: BloomConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bloom: BloomConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_config_defaults() {
        let config = EffectsConfig::default();
        assert!(config.enabled);
        assert!(config.bloom.enabled);
        assert_eq!(config.bloom.document, "bloom.json");
        assert!(!config.bloom.normalize_on_load);
    }

    #[test]
    fn bloom_config_partial_toml() {
        let toml_str = r#"
normalize_on_load = true
"#;
        let config: BloomConfig = toml::from_str(toml_str).unwrap();
        assert!(config.enabled); // default preserved
        assert!(config.normalize_on_load);
        assert_eq!(config.document, "bloom.json");
    }

    #[test]
    fn effects_master_toggle_in_toml() {
        let toml_str = r#"
enabled = false
"#;
        let config: EffectsConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        assert!(config.bloom.enabled);
    }

    #[test]
    fn effects_serialization_roundtrip() {
        let config = EffectsConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EffectsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.enabled, config.enabled);
        assert_eq!(deserialized.bloom.document, config.bloom.document);
    }
}
