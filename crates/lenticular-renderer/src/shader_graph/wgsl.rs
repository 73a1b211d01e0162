//! Lowering of a [`LenticularGraph`] to a WGSL module.
//!
//! Bindings (group 0):
//! - 0: `LenticularUniforms` (vertex + fragment)
//! - 1: `SliceUniforms` (vertex)
//! - 2: texture A, 3: texture B, 4: filtering sampler (fragment)
//!
//! Vertex input matches [`crate::plane::PlaneVertex`].

use std::fmt::Write as _;

use super::builder::LenticularGraph;
use super::node::{Node, Stage, TextureSlot};
use crate::gpu::RendererError;

const PRELUDE: &str = r#"struct LenticularUniforms {
    divisions: f32,
    ridge_height: f32,
    edge_smoothness: f32,
    _padding: f32,
};

struct SliceUniforms {
    mvp: mat4x4<f32>,
    model: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> lenticular: LenticularUniforms;
@group(0) @binding(1) var<uniform> slice_uniforms: SliceUniforms;
@group(0) @binding(2) var texture_a: texture_2d<f32>;
@group(0) @binding(3) var texture_b: texture_2d<f32>;
@group(0) @binding(4) var surface_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};
"#;

/// Emit the complete shader module for `graph`.
pub fn emit_module(graph: &LenticularGraph) -> Result<String, RendererError> {
    let displaced = emit_expr(graph.displacement_node(), Stage::Vertex)?;
    let color = emit_expr(graph.color_node(), Stage::Fragment)?;

    let mut out = String::from(PRELUDE);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"
@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {{
    var out: VertexOutput;
    let displaced = {displaced};
    out.clip_position = slice_uniforms.mvp * vec4<f32>(displaced, 1.0);
    out.uv = vertex.uv;
    return out;
}}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
    return {color};
}}
"#
    );
    Ok(out)
}

/// Emit a single expression for `stage`.
pub fn emit_expr(node: &Node, stage: Stage) -> Result<String, RendererError> {
    let input = match stage {
        Stage::Vertex => "vertex",
        Stage::Fragment => "in",
    };
    Ok(match node {
        Node::Float(v) => float_literal(*v),
        Node::Uniform(slot) => format!("lenticular.{}", slot.field_name()),
        Node::UvX => format!("{input}.uv.x"),
        Node::PositionLocal => {
            if stage != Stage::Vertex {
                return Err(RendererError::ShaderError(
                    "local position is only available in the vertex stage".into(),
                ));
            }
            "vertex.position".to_string()
        }
        Node::Texture(slot) => {
            if stage != Stage::Fragment {
                return Err(RendererError::ShaderError(format!(
                    "texture {slot:?} sampled outside the fragment stage"
                )));
            }
            let name = match slot {
                TextureSlot::A => "texture_a",
                TextureSlot::B => "texture_b",
            };
            format!("textureSample({name}, surface_sampler, in.uv)")
        }
        Node::Negate(inner) => format!("(-{})", emit_expr(inner, stage)?),
        Node::Add(a, b) => format!("({} + {})", emit_expr(a, stage)?, emit_expr(b, stage)?),
        Node::Mul(a, b) => format!("({} * {})", emit_expr(a, stage)?, emit_expr(b, stage)?),
        Node::Fract(inner) => format!("fract({})", emit_expr(inner, stage)?),
        Node::Step { edge, x } => format!(
            "step({}, {})",
            emit_expr(edge, stage)?,
            emit_expr(x, stage)?
        ),
        Node::Mix { a, b, t } => format!(
            "mix({}, {}, {})",
            emit_expr(a, stage)?,
            emit_expr(b, stage)?,
            emit_expr(t, stage)?
        ),
        Node::Vec3(x, y, z) => format!(
            "vec3<f32>({}, {}, {})",
            emit_expr(x, stage)?,
            emit_expr(y, stage)?,
            emit_expr(z, stage)?
        ),
    })
}

/// WGSL float literal. Always carries a decimal point or exponent so it is
/// typed as `f32`, never as an abstract integer.
fn float_literal(v: f32) -> String {
    let s = format!("{v:?}");
    if v.is_sign_negative() {
        format!("({s})")
    } else {
        s
    }
}
