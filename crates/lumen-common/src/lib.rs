pub mod errors;

pub use errors::{ConfigError, EffectError, LumenError, SceneError};

pub type Result<T> = std::result::Result<T, LumenError>;
