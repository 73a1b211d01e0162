//! Construction of the lenticular colour and displacement graphs.

use lenticular_common::{LenticularError, Result, SliceTexturePair, TextureHandle, TextureKey, Vec3};
use tracing::debug;

use super::eval::{evaluate, EvalContext, TextureSampler};
use super::node::{
    float, mix, position_local, step, texture, uniform, uv_x, vec3, Node, Stage, TextureSlot,
    UniformSlot, ValueType,
};
use super::params::LenticularParameters;
use crate::gpu::{LenticularUniforms, RendererError};

/// A built lenticular material: two expression trees bound to one texture
/// pair, plus the uniform storage both trees read.
#[derive(Debug, Clone)]
pub struct LenticularGraph {
    key: TextureKey,
    textures: [TextureHandle; 2],
    color: Node,
    displacement: Node,
    uniforms: LenticularUniforms,
}

impl LenticularGraph {
    pub fn key(&self) -> &TextureKey {
        &self.key
    }

    pub fn texture_a(&self) -> TextureHandle {
        self.textures[0]
    }

    pub fn texture_b(&self) -> TextureHandle {
        self.textures[1]
    }

    /// Fragment-stage expression producing RGBA.
    pub fn color_node(&self) -> &Node {
        &self.color
    }

    /// Vertex-stage expression producing the displaced local position.
    pub fn displacement_node(&self) -> &Node {
        &self.displacement
    }

    pub fn uniforms(&self) -> &LenticularUniforms {
        &self.uniforms
    }

    /// Write new scalar parameters into the existing uniform storage.
    ///
    /// The trees and texture bindings are untouched.
    pub fn update(&mut self, params: &LenticularParameters) -> Result<()> {
        params.validate()?;
        self.uniforms.write_params(params);
        Ok(())
    }

    /// Strip blend factor at surface coordinate `u` (0 = texture A, 1 = texture B).
    pub fn blend_factor_at(&self, u: f32) -> f32 {
        let r = super::eval::repeated(u, self.uniforms.divisions);
        super::eval::blend_factor(r, self.uniforms.edge_smoothness)
    }

    /// Evaluate the colour graph at `uv`.
    pub fn color_at(&self, uv: [f32; 2], sampler: &dyn TextureSampler) -> Result<[f32; 4]> {
        let value = evaluate(&self.color, &self.context(uv, [0.0; 3], Some(sampler)))?;
        value
            .as_vec4()
            .ok_or_else(|| RendererError::ShaderError(format!("colour produced {value:?}")).into())
    }

    /// Evaluate the displacement graph for a vertex at `position` with surface `uv`.
    pub fn displace(&self, position: Vec3, uv: [f32; 2]) -> Result<Vec3> {
        let value = evaluate(&self.displacement, &self.context(uv, position, None))?;
        value.as_vec3().ok_or_else(|| {
            RendererError::ShaderError(format!("displacement produced {value:?}")).into()
        })
    }

    fn context<'a>(
        &'a self,
        uv: [f32; 2],
        position: Vec3,
        sampler: Option<&'a dyn TextureSampler>,
    ) -> EvalContext<'a> {
        EvalContext {
            uv,
            position,
            uniforms: &self.uniforms,
            textures: self.textures,
            sampler,
        }
    }
}

/// Builds [`LenticularGraph`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShaderGraphBuilder;

impl ShaderGraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a graph over `pair` with initial `params`.
    ///
    /// Fails with `MissingTexture` if either handle is absent and with
    /// `InvalidParameter` if `params` is out of range.
    pub fn build(
        &self,
        pair: &SliceTexturePair,
        params: &LenticularParameters,
    ) -> Result<LenticularGraph> {
        let texture_a = pair.texture_a.ok_or_else(|| {
            LenticularError::MissingTexture(format!("texture_a of set '{}'", pair.key))
        })?;
        let texture_b = pair.texture_b.ok_or_else(|| {
            LenticularError::MissingTexture(format!("texture_b of set '{}'", pair.key))
        })?;
        params.validate()?;

        let repeated = (uv_x() * uniform(UniformSlot::Divisions)).fract();
        let hard_edge = step(float(0.5), repeated.clone());
        let blend = mix(hard_edge, repeated.clone(), uniform(UniformSlot::EdgeSmoothness));
        let color = mix(texture(TextureSlot::A), texture(TextureSlot::B), blend);

        let height = mix(
            -uniform(UniformSlot::RidgeHeight),
            uniform(UniformSlot::RidgeHeight),
            repeated,
        );
        let displacement = position_local() + vec3(float(0.0), float(0.0), height);

        check_type(&color, Stage::Fragment, ValueType::Vec4)?;
        check_type(&displacement, Stage::Vertex, ValueType::Vec3)?;

        debug!(
            key = %pair.key,
            %texture_a,
            %texture_b,
            divisions = params.divisions,
            "built lenticular graph"
        );

        Ok(LenticularGraph {
            key: pair.key.clone(),
            textures: [texture_a, texture_b],
            color,
            displacement,
            uniforms: LenticularUniforms::from_params(params),
        })
    }
}

fn check_type(node: &Node, stage: Stage, expected: ValueType) -> std::result::Result<(), RendererError> {
    let actual = node.value_type(stage)?;
    if actual == expected {
        Ok(())
    } else {
        Err(RendererError::ShaderError(format!(
            "{stage:?} output is {actual:?}, expected {expected:?}"
        )))
    }
}

// =============================================================================
// Tests
// =============================================================================
