//! Per-slice material state with separate rebuild and update paths.

use lenticular_common::{Result, SliceTexturePair};
use tracing::{debug, warn};

use super::builder::{LenticularGraph, ShaderGraphBuilder};
use super::params::LenticularParameters;

/// The material of one slice.
///
/// Changing the texture pair identity rebuilds the graph; changing scalar
/// parameters only writes uniforms. A failed build leaves the slice without a
/// graph until a later pair builds successfully.
#[derive(Debug, Clone)]
pub struct SliceMaterial {
    pair: SliceTexturePair,
    graph: Option<LenticularGraph>,
    generation: u32,
}

impl SliceMaterial {
    /// Build the material, keeping the slice even if the build fails.
    ///
    /// The build error, if any, is returned alongside so the caller can report
    /// it without losing the slot.
    pub fn new(
        builder: &ShaderGraphBuilder,
        pair: SliceTexturePair,
        params: &LenticularParameters,
    ) -> (Self, Option<lenticular_common::LenticularError>) {
        let mut material = Self {
            pair,
            graph: None,
            generation: 0,
        };
        let err = material.rebuild(builder, params).err();
        (material, err)
    }

    /// The pair the current graph was built from, or the last pair tried if
    /// the slice has no graph.
    pub fn pair(&self) -> &SliceTexturePair {
        &self.pair
    }

    pub fn graph(&self) -> Option<&LenticularGraph> {
        self.graph.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.graph.is_some()
    }

    /// Number of successful graph builds so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Swap in a new texture pair. Rebuilds only when the key changes or the
    /// slice has no graph yet; a pair with the current key is ignored.
    /// Returns whether a rebuild happened.
    pub fn set_textures(
        &mut self,
        builder: &ShaderGraphBuilder,
        pair: SliceTexturePair,
        params: &LenticularParameters,
    ) -> Result<bool> {
        if self.graph.is_some() && pair.key == self.pair.key {
            return Ok(false);
        }
        self.pair = pair;
        self.rebuild(builder, params)?;
        Ok(true)
    }

    /// Write new scalar parameters into the existing graph.
    pub fn set_params(&mut self, params: &LenticularParameters) -> Result<()> {
        match self.graph.as_mut() {
            Some(graph) => graph.update(params),
            None => params.validate(),
        }
    }

    fn rebuild(&mut self, builder: &ShaderGraphBuilder, params: &LenticularParameters) -> Result<()> {
        match builder.build(&self.pair, params) {
            Ok(graph) => {
                self.graph = Some(graph);
                self.generation += 1;
                debug!(key = %self.pair.key, generation = self.generation, "slice material rebuilt");
                Ok(())
            }
            Err(e) => {
                warn!(key = %self.pair.key, "slice material build failed: {e}");
                self.graph = None;
                Err(e)
            }
        }
    }
}
