//! Full configuration validation.
//!
//! Validates numeric ranges, keybind uniqueness and required paths.

mod helpers;


use crate::keybinds;
use crate::schema::LumenConfig;
use lumen_common::ConfigError;

use helpers::{validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LumenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    validate_range(&mut errors, "window.width", config.window.width, 1, 16384);
    validate_range(&mut errors, "window.height", config.window.height, 1, 16384);

    validate_non_empty(&mut errors, "scene.path", &config.scene.path);
    validate_non_empty(&mut errors, "scene.manifest", &config.scene.manifest);
    validate_non_empty(
        &mut errors,
        "effects.bloom.document",
        &config.effects.bloom.document,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
