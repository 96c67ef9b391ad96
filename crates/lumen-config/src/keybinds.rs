//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use lumen_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("off", &config.off),
        ("ambient_only", &config.ambient_only),
        ("specular_only", &config.specular_only),
        ("ambient_specular", &config.ambient_specular),
        ("ambient_specular_emissive", &config.ambient_specular_emissive),
        ("all_but_custom", &config.all_but_custom),
        ("all", &config.all),
        ("untextured", &config.untextured),
        ("textured", &config.textured),
    ]
}

/// Canonical form of a key name: trimmed and uppercased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Validate that every keybind is non-empty and that no two keybinds share
/// a key (compared case-insensitively).
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let key = normalize_key(binding);
        if key.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybind '{name}' is empty"
            )));
        }
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}
