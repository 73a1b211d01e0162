//! Range and consistency checks for a parsed config.
//!
//! Every section is checked and all problems are reported together in one
//! `ConfigError::ValidationError`.

mod carousel;
mod helpers;
mod material;
mod textures;


use crate::schema::LenticularConfig;
use lenticular_common::ConfigError;

use helpers::Report;

pub fn validate(config: &LenticularConfig) -> Result<(), ConfigError> {
    let mut report = Report::default();
    material::check_material(&mut report, config);
    material::check_plane(&mut report, config);
    carousel::check_carousel(&mut report, config);
    carousel::check_parallax(&mut report, config);
    textures::check_textures(&mut report, config);
    report.into_result().map_err(ConfigError::ValidationError)
}
