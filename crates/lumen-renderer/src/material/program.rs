//! Shader program descriptions handed to the engine's resource manager.

use serde::{Deserialize, Serialize};

/// Vertex + fragment source paths for one shader program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderProgramDesc {
    pub debug_name: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramDesc {
    pub fn new(
        debug_name: impl Into<String>,
        vertex: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            debug_name: debug_name.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}
