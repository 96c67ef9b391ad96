//! Lighting-term switches for lit materials.
//!
//! The switches are an explicit value passed to whoever updates materials,
//! so every preset combination can be checked as a pure function from
//! toggles to uniform writes.

mod preset;
mod toggles;

pub use preset::*;
pub use toggles::*;
