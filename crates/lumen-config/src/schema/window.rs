//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window settings. The size doubles as the post-processing target size
/// when running headless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Width in pixels (valid range: 1-16384).
    pub width: u32,
    /// Height in pixels (valid range: 1-16384).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Week 6 Tutorial".into(),
            width: 1600,
            height: 900,
        }
    }
}
