//! Bloom post-processing effect.
//!
//! A single full-screen pass convolving the frame with a user-editable 5x5
//! kernel. The kernel is persisted as a small JSON document and edited
//! through [`BloomEditor`]. Disabled when `effects.bloom.enabled = false`.

mod apply;
mod document;
mod editor;
mod effect;
mod kernel;

pub use apply::*;
pub use document::*;
pub use editor::*;
pub use effect::*;
pub use kernel::*;
