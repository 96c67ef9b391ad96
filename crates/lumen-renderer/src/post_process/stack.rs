//! Ordered collection of post-processing effects.

use lumen_common::EffectError;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::PostProcessEffect;
use crate::binding::{RenderTarget, ShaderBinding};
use crate::bloom::Bloom;

#[derive(Default)]
pub struct PostProcessStack {
    effects: Vec<Box<dyn PostProcessEffect>>,
}

impl std::fmt::Debug for PostProcessStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostProcessStack")
            .field("effects", &self.names())
            .finish()
    }
}

impl PostProcessStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect, replacing any existing effect with the same name in place.
    pub fn push(&mut self, effect: Box<dyn PostProcessEffect>) {
        if let Some(slot) = self.effects.iter_mut().find(|e| e.name() == effect.name()) {
            *slot = effect;
        } else {
            self.effects.push(effect);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn PostProcessEffect> {
        self.effects
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn PostProcessEffect>> {
        self.effects.iter_mut().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.effects.iter().map(|e| e.name()).collect()
    }

    /// Apply every enabled effect in order. Stops at the first failure.
    ///
    /// Returns how many effects were applied.
    pub fn apply_enabled(
        &self,
        target: &dyn RenderTarget,
        binding: &mut dyn ShaderBinding,
    ) -> Result<usize, EffectError> {
        let mut applied = 0;
        for effect in self.effects.iter().filter(|e| e.is_enabled()) {
            effect.apply(target, binding)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// `{ "effects": [ { "type": <name>, ...effect fields } ] }`
    pub fn to_json(&self) -> Value {
        let effects: Vec<Value> = self
            .effects
            .iter()
            .map(|effect| {
                let mut entry = effect.to_json();
                if let Value::Object(map) = &mut entry {
                    map.insert("type".into(), Value::String(effect.name().to_string()));
                }
                entry
            })
            .collect();
        json!({ "effects": effects })
    }

    /// Rebuild a stack. Entries of unknown type are skipped with a warning.
    pub fn from_json(value: &Value) -> Result<Self, EffectError> {
        let mut stack = Self::new();
        let Some(entries) = value.get("effects") else {
            return Ok(stack);
        };
        let entries = entries
            .as_array()
            .ok_or_else(|| EffectError::Document("\"effects\" must be an array".into()))?;

        for entry in entries {
            match entry.get("type").and_then(Value::as_str) {
                Some(Bloom::NAME) => stack.push(Box::new(Bloom::from_json(entry)?)),
                Some(other) => warn!("skipping unknown post-processing effect '{other}'"),
                None => warn!("skipping post-processing entry without a type"),
            }
        }

        info!("loaded {} post-processing effect(s)", stack.len());
        Ok(stack)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom::PIXEL_SIZE_UNIFORM;
    use crate::material::{Material, UniformValue};

    struct Tint {
        enabled: bool,
    }

    impl PostProcessEffect for Tint {
        fn name(&self) -> &str {
            "Tint"
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn apply(
            &self,
            _target: &dyn RenderTarget,
            binding: &mut dyn ShaderBinding,
        ) -> Result<(), EffectError> {
            binding.set_uniform("u_Tint", UniformValue::Vec3([1.0, 0.5, 0.5]));
            Ok(())
        }

        fn to_json(&self) -> Value {
            json!({ "enabled": self.enabled })
        }
    }

    #[test]
    fn push_replaces_same_name() {
        let mut stack = PostProcessStack::new();
        stack.push(Box::new(Bloom::default()));
        stack.push(Box::new(Tint { enabled: true }));

        let mut disabled = Bloom::default();
        disabled.enabled = false;
        stack.push(Box::new(disabled));

        assert_eq!(stack.names(), vec!["Bloom", "Tint"]);
        assert!(!stack.get("Bloom").unwrap().is_enabled());
    }

    #[test]
    fn apply_enabled_skips_disabled_effects() {
        let mut stack = PostProcessStack::new();
        stack.push(Box::new(Bloom::default()));
        stack.push(Box::new(Tint { enabled: false }));

        let mut sink = Material::new("sink", "post");
        let applied = stack.apply_enabled(&(800u32, 600u32), &mut sink).unwrap();
        assert_eq!(applied, 1);
        assert!(sink.get(PIXEL_SIZE_UNIFORM).is_some());
        assert!(sink.get("u_Tint").is_none());

        stack.get_mut("Tint").unwrap().set_enabled(true);
        let applied = stack.apply_enabled(&(800u32, 600u32), &mut sink).unwrap();
        assert_eq!(applied, 2);
        assert!(sink.get("u_Tint").is_some());
    }

    #[test]
    fn apply_enabled_stops_on_zero_target() {
        let mut stack = PostProcessStack::new();
        stack.push(Box::new(Bloom::default()));
        let mut sink = Material::new("sink", "post");
        let err = stack.apply_enabled(&(0u32, 0u32), &mut sink).unwrap_err();
        assert!(matches!(err, EffectError::DivideByZero(_)));
        assert!(sink.uniforms.is_empty());
    }

    #[test]
    fn stack_json_roundtrip_keeps_bloom() {
        let mut bloom = Bloom::default();
        bloom.kernel.normalize();
        let mut stack = PostProcessStack::new();
        stack.push(Box::new(bloom));

        let value = stack.to_json();
        assert_eq!(value["effects"][0]["type"], "Bloom");

        let back = PostProcessStack::from_json(&value).unwrap();
        assert_eq!(back.names(), vec!["Bloom"]);
        assert_eq!(back.to_json(), value);
    }

    #[test]
    fn unknown_effects_are_skipped() {
        let value = json!({
            "effects": [
                { "type": "Sepia", "enabled": true },
                { "enabled": true },
                { "type": "Bloom" }
            ]
        });
        let stack = PostProcessStack::from_json(&value).unwrap();
        assert_eq!(stack.names(), vec!["Bloom"]);
    }

    #[test]
    fn missing_effects_gives_empty_stack() {
        let stack = PostProcessStack::from_json(&json!({})).unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn non_array_effects_is_document_error() {
        let err = PostProcessStack::from_json(&json!({ "effects": 3 })).unwrap_err();
        assert!(matches!(err, EffectError::Document(_)));
    }

    #[test]
    fn debug_lists_effect_names() {
        let mut stack = PostProcessStack::new();
        stack.push(Box::new(Bloom::default()));
        assert_eq!(
            format!("{stack:?}"),
            "PostProcessStack { effects: [\"Bloom\"] }"
        );
    }

    #[test]
    fn bad_bloom_entry_fails_whole_stack() {
        let value = json!({ "effects": [ { "type": "Bloom", "filter": [0.5] } ] });
        let err = PostProcessStack::from_json(&value).unwrap_err();
        assert_eq!(err, EffectError::OutOfRange { index: 1, len: 1 });
    }
}
