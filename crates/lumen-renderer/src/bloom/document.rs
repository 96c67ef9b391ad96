//! JSON persistence for the bloom effect.
//!
//! Shape: `{ "enabled": bool, "filter": [25 floats] }`. Missing fields take
//! defaults so older and newer files keep loading; a filter that is too
//! short to fill the kernel is an error rather than being padded.

use std::path::Path;

use lumen_common::{EffectError, LumenError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::effect::Bloom;
use super::kernel::{Kernel, KERNEL_LEN};

/// Persisted form of a [`Bloom`] effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloomDocument {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_filter")]
    pub filter: Vec<f32>,
}

fn default_enabled() -> bool {
    true
}

fn default_filter() -> Vec<f32> {
    vec![0.0; KERNEL_LEN]
}

impl Default for BloomDocument {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            filter: default_filter(),
        }
    }
}

impl BloomDocument {
    /// Build a kernel from `filter`.
    ///
    /// Fewer than 25 entries fails with `OutOfRange` at the first missing
    /// index. Entries past 25 are ignored with a warning.
    pub fn kernel(&self) -> Result<Kernel, EffectError> {
        let len = self.filter.len();
        if len < KERNEL_LEN {
            return Err(EffectError::OutOfRange { index: len, len });
        }
        if len > KERNEL_LEN {
            warn!("bloom filter has {len} entries, ignoring all past {KERNEL_LEN}");
        }

        let mut weights = [0.0; KERNEL_LEN];
        weights.copy_from_slice(&self.filter[..KERNEL_LEN]);
        Kernel::from_weights(weights)
    }
}

impl Bloom {
    pub fn to_document(&self) -> BloomDocument {
        BloomDocument {
            enabled: self.enabled,
            filter: self.kernel.weights().to_vec(),
        }
    }

    pub fn from_document(doc: &BloomDocument) -> Result<Self, EffectError> {
        let mut bloom = Bloom::default();
        bloom.kernel = doc.kernel()?;
        bloom.enabled = doc.enabled;
        Ok(bloom)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "enabled": self.enabled,
            "filter": self.kernel.weights().to_vec(),
        })
    }

    /// Parse a JSON value. Unknown fields are ignored; a field of the wrong
    /// type fails with `Document`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, EffectError> {
        let doc: BloomDocument = serde_json::from_value(value.clone())
            .map_err(|e| EffectError::Document(format!("invalid bloom document: {e}")))?;
        Self::from_document(&doc)
    }
}

/// Load a bloom effect from a JSON file.
pub fn load_bloom(path: &Path) -> Result<Bloom, LumenError> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        EffectError::Document(format!("failed to parse {}: {e}", path.display()))
    })?;
    let bloom = Bloom::from_json(&value)?;
    info!("loaded bloom document from {}", path.display());
    Ok(bloom)
}

/// Write a bloom effect to a pretty-printed JSON file.
pub fn save_bloom(path: &Path, bloom: &Bloom) -> Result<(), LumenError> {
    let json = serde_json::to_string_pretty(&bloom.to_document())
        .map_err(|e| EffectError::Document(format!("failed to serialize bloom: {e}")))?;
    std::fs::write(path, json)?;
    info!("saved bloom document to {}", path.display());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_has_enabled_and_filter_in_index_order() {
        let mut bloom = Bloom::default();
        bloom.kernel.set(7, 0.75).unwrap();
        let doc = bloom.to_document();
        assert!(doc.enabled);
        assert_eq!(doc.filter.len(), 25);
        assert_eq!(doc.filter[7], 0.75);
        assert_eq!(doc.filter[12], 1.0);
    }

    #[test]
    fn document_roundtrip_preserves_kernel() {
        let mut bloom = Bloom::default();
        bloom.enabled = false;
        bloom.kernel.set(0, -3.5).unwrap();
        bloom.kernel.set(24, 1e-7).unwrap();

        let back = Bloom::from_document(&bloom.to_document()).unwrap();
        assert_eq!(back.kernel, bloom.kernel);
        assert!(!back.enabled);
    }

    #[test]
    fn json_roundtrip_preserves_kernel() {
        let mut bloom = Bloom::default();
        bloom.kernel.set(3, 0.333_333).unwrap();
        let text = serde_json::to_string(&bloom.to_json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let back = Bloom::from_json(&value).unwrap();
        assert_eq!(back.kernel, bloom.kernel);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let bloom = Bloom::from_json(&json!({})).unwrap();
        assert!(bloom.enabled);
        assert_eq!(bloom.kernel, Kernel::zeroed());
    }

    #[test]
    fn missing_enabled_defaults_to_true() {
        let bloom = Bloom::from_json(&json!({ "filter": vec![0.5f32; 25] })).unwrap();
        assert!(bloom.enabled);
        assert_eq!(bloom.kernel.get(24).unwrap(), 0.5);
    }

    #[test]
    fn short_filter_is_out_of_range() {
        let err = Bloom::from_json(&json!({ "filter": [0.0] })).unwrap_err();
        assert_eq!(err, EffectError::OutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn empty_filter_is_out_of_range() {
        let err = Bloom::from_json(&json!({ "filter": [] })).unwrap_err();
        assert_eq!(err, EffectError::OutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn long_filter_uses_first_25() {
        let mut filter = vec![0.1f32; 25];
        filter.push(99.0);
        let bloom = Bloom::from_json(&json!({ "filter": filter })).unwrap();
        assert_eq!(bloom.kernel.snapshot(), [0.1; 25]);
    }

    #[test]
    fn wrong_type_is_document_error() {
        let err = Bloom::from_json(&json!({ "enabled": "yes" })).unwrap_err();
        assert!(matches!(err, EffectError::Document(_)));

        let err = Bloom::from_json(&json!({ "filter": "0.1" })).unwrap_err();
        assert!(matches!(err, EffectError::Document(_)));
    }

    #[test]
    fn null_weight_is_document_error() {
        let mut filter: Vec<serde_json::Value> = vec![json!(0.1); 25];
        filter[4] = serde_json::Value::Null;
        let err = Bloom::from_json(&json!({ "filter": filter })).unwrap_err();
        assert!(matches!(err, EffectError::Document(_)));
    }

    #[test]
    fn normalized_default_survives_save_load_save() {
        let mut bloom = Bloom::default();
        bloom.kernel.normalize();

        let first = serde_json::to_string(&bloom.to_document()).unwrap();
        let doc: BloomDocument = serde_json::from_str(&first).unwrap();
        let reloaded = Bloom::from_document(&doc).unwrap();
        let second = serde_json::to_string(&reloaded.to_document()).unwrap();

        assert_eq!(first, second);
        assert_eq!(reloaded.to_json(), bloom.to_json());
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bloom.json");

        let mut bloom = Bloom::default();
        bloom.kernel.fill(0.04).unwrap();
        save_bloom(&path, &bloom).unwrap();

        let loaded = load_bloom(&path).unwrap();
        assert_eq!(loaded.kernel, bloom.kernel);
        assert!(loaded.enabled);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_bloom(Path::new("/tmp/nonexistent_lumen_bloom.json")).unwrap_err();
        assert!(matches!(err, LumenError::Io(_)));
    }

    #[test]
    fn load_garbage_is_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bloom.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_bloom(&path).unwrap_err();
        assert!(matches!(err, LumenError::Effect(EffectError::Document(_))));
    }
}
