use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by post-processing effects and their documents.
///
/// These are programmer or content errors, never transient: callers get
/// them synchronously and nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectError {
    /// Kernel index outside `[0, 24]`, grid cell outside `[0, 4]`, or a
    /// non-finite weight.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A persisted filter is shorter than the kernel it is loaded into.
    #[error("index {index} out of range for filter of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Apply was asked to target an image with a zero dimension.
    #[error("divide by zero: {0}")]
    DivideByZero(String),

    #[error("document error: {0}")]
    Document(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene io error: {0}")]
    Io(String),

    #[error("scene parse error: {0}")]
    Parse(String),

    #[error("missing asset: {0}")]
    MissingAsset(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 0".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 0");
    }

    #[test]
    fn effect_error_display() {
        let err = EffectError::InvalidArgument("index 25 outside [0, 24]".into());
        assert_eq!(err.to_string(), "invalid argument: index 25 outside [0, 24]");

        let err = EffectError::OutOfRange { index: 1, len: 1 };
        assert_eq!(
            err.to_string(),
            "index 1 out of range for filter of length 1"
        );

        let err = EffectError::DivideByZero("target width is 0".into());
        assert_eq!(err.to_string(), "divide by zero: target width is 0");
    }

    #[test]
    fn scene_error_display() {
        let err = SceneError::MissingAsset("Sword.obj".into());
        assert_eq!(err.to_string(), "missing asset: Sword.obj");
    }

    #[test]
    fn lumen_error_from_effect() {
        let err: LumenError = EffectError::OutOfRange { index: 3, len: 3 }.into();
        assert!(matches!(err, LumenError::Effect(_)));
        assert!(err.to_string().contains("length 3"));
    }

    #[test]
    fn lumen_error_from_config() {
        let err: LumenError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, LumenError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn lumen_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LumenError = io_err.into();
        assert!(matches!(err, LumenError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn lumen_error_other() {
        let err = LumenError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
