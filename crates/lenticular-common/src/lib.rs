pub mod errors;
pub mod types;

pub use errors::{ConfigError, LenticularError};
pub use types::{SliceTexturePair, TextureHandle, TextureKey, Vec3};

pub type Result<T> = std::result::Result<T, LenticularError>;
