//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the reference experience.

mod carousel;
mod logging;
mod material;
mod parallax;
mod plane;
mod textures;

pub use carousel::*;
pub use logging::*;
pub use material::*;
pub use parallax::*;
pub use plane::*;
pub use textures::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[derive(Default)]
pub struct LenticularConfig {
    pub material: MaterialConfig,
    pub carousel: CarouselConfig,
    pub parallax: ParallaxConfig,
    pub plane: PlaneConfig,
    pub camera: CameraConfig,
    pub textures: TexturesConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
