use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),

    #[error("config write error: {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LenticularError {
    /// A shader or layout parameter outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A slice was handed an absent texture handle.
    #[error("missing texture: {0}")]
    MissingTexture(String),

    /// Structural misconfiguration, e.g. a carousel with zero slots.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
