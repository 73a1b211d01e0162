//! Scalar parameters of the lenticular material.

use lenticular_common::{LenticularError, Result};
use lenticular_config::schema::MaterialConfig;

/// Strip count, ridge height and edge smoothness.
///
/// Out-of-range values are rejected rather than clamped; clamping belongs to
/// whatever control surface produces the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LenticularParameters {
    pub divisions: u32,
    pub ridge_height: f32,
    pub edge_smoothness: f32,
}

impl LenticularParameters {
    pub fn new(divisions: u32, ridge_height: f32, edge_smoothness: f32) -> Result<Self> {
        let params = Self {
            divisions,
            ridge_height,
            edge_smoothness,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn from_config(config: &MaterialConfig) -> Result<Self> {
        Self::new(
            config.divisions,
            config.ridge_height as f32,
            config.edge_smoothness as f32,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.divisions == 0 {
            return Err(LenticularError::InvalidParameter(
                "divisions must be greater than 0".into(),
            ));
        }
        if !self.ridge_height.is_finite() || self.ridge_height < 0.0 {
            return Err(LenticularError::InvalidParameter(format!(
                "ridge_height = {} must be a finite value >= 0",
                self.ridge_height
            )));
        }
        if !(0.0..=1.0).contains(&self.edge_smoothness) {
            return Err(LenticularError::InvalidParameter(format!(
                "edge_smoothness = {} is out of range [0, 1]",
                self.edge_smoothness
            )));
        }
        Ok(())
    }
}

impl Default for LenticularParameters {
    fn default() -> Self {
        Self {
            divisions: 10,
            ridge_height: 0.05,
            edge_smoothness: 0.1,
        }
    }
}
