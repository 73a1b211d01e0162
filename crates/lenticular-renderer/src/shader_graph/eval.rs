//! CPU evaluation of shader graphs.
//!
//! Semantics follow WGSL: `fract(x) = x - floor(x)`, `step(e, x) = x >= e`,
//! `mix(a, b, t) = a * (1 - t) + b * t`. The `mix` form is exact at both
//! endpoints, which the strip mask relies on.

use lenticular_common::{TextureHandle, Vec3};

use super::node::{Node, TextureSlot};
use crate::gpu::{LenticularUniforms, RendererError};

/// Host-side texture lookup used when evaluating colour on the CPU.
pub trait TextureSampler {
    /// RGBA at normalized `uv`.
    fn sample(&self, texture: TextureHandle, uv: [f32; 2]) -> [f32; 4];
}

/// A runtime value produced by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Float(f32),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
}

impl Value {
    pub fn as_float(self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(self) -> Option<[f32; 3]> {
        match self {
            Value::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec4(self) -> Option<[f32; 4]> {
        match self {
            Value::Vec4(v) => Some(v),
            _ => None,
        }
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Value {
        match self {
            Value::Float(v) => Value::Float(f(v)),
            Value::Vec3(v) => Value::Vec3(v.map(f)),
            Value::Vec4(v) => Value::Vec4(v.map(f)),
        }
    }
}

/// Inputs available to one evaluation.
pub struct EvalContext<'a> {
    pub uv: [f32; 2],
    pub position: Vec3,
    pub uniforms: &'a LenticularUniforms,
    /// Handles for texture slots A and B.
    pub textures: [TextureHandle; 2],
    pub sampler: Option<&'a dyn TextureSampler>,
}

pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

pub fn step_f32(edge: f32, x: f32) -> f32 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

pub fn mix_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Sawtooth in `[0, 1)` that restarts at every strip boundary.
pub fn repeated(u: f32, divisions: f32) -> f32 {
    fract(u * divisions)
}

/// Binary strip mask: 0 selects texture A, 1 selects texture B.
pub fn hard_edge(repeated: f32) -> f32 {
    step_f32(0.5, repeated)
}

/// Blend between the binary mask (smoothness 0) and the raw sawtooth (smoothness 1).
pub fn blend_factor(repeated: f32, edge_smoothness: f32) -> f32 {
    mix_f32(hard_edge(repeated), repeated, edge_smoothness)
}

/// Z offset of the ridge profile, ramping from `-height` to `+height` across a strip.
pub fn ridge_offset(repeated: f32, ridge_height: f32) -> f32 {
    mix_f32(-ridge_height, ridge_height, repeated)
}

/// Evaluate `node` in `ctx`.
///
/// Trees produced by [`super::ShaderGraphBuilder`] are type-checked at build
/// time, so errors here only arise from hand-built trees.
pub fn evaluate(node: &Node, ctx: &EvalContext<'_>) -> Result<Value, RendererError> {
    match node {
        Node::Float(v) => Ok(Value::Float(*v)),
        Node::Uniform(slot) => Ok(Value::Float(ctx.uniforms.get(*slot))),
        Node::UvX => Ok(Value::Float(ctx.uv[0])),
        Node::PositionLocal => Ok(Value::Vec3(ctx.position)),
        Node::Texture(slot) => {
            let sampler = ctx.sampler.ok_or_else(|| {
                RendererError::ShaderError("no texture sampler bound for evaluation".into())
            })?;
            let handle = match slot {
                TextureSlot::A => ctx.textures[0],
                TextureSlot::B => ctx.textures[1],
            };
            Ok(Value::Vec4(sampler.sample(handle, ctx.uv)))
        }
        Node::Negate(inner) => Ok(evaluate(inner, ctx)?.map(|v| -v)),
        Node::Fract(inner) => float_op(evaluate(inner, ctx)?, "fract").map(|v| Value::Float(fract(v))),
        Node::Add(a, b) => zip(evaluate(a, ctx)?, evaluate(b, ctx)?, |x, y| x + y),
        Node::Mul(a, b) => zip(evaluate(a, ctx)?, evaluate(b, ctx)?, |x, y| x * y),
        Node::Step { edge, x } => {
            let edge = float_op(evaluate(edge, ctx)?, "step edge")?;
            let x = float_op(evaluate(x, ctx)?, "step input")?;
            Ok(Value::Float(step_f32(edge, x)))
        }
        Node::Mix { a, b, t } => {
            let t = float_op(evaluate(t, ctx)?, "mix factor")?;
            match (evaluate(a, ctx)?, evaluate(b, ctx)?) {
                (Value::Float(a), Value::Float(b)) => Ok(Value::Float(mix_f32(a, b, t))),
                (Value::Vec3(a), Value::Vec3(b)) => {
                    Ok(Value::Vec3(std::array::from_fn(|i| mix_f32(a[i], b[i], t))))
                }
                (Value::Vec4(a), Value::Vec4(b)) => {
                    Ok(Value::Vec4(std::array::from_fn(|i| mix_f32(a[i], b[i], t))))
                }
                (a, b) => Err(RendererError::ShaderError(format!(
                    "mix operands differ: {a:?} vs {b:?}"
                ))),
            }
        }
        Node::Vec3(x, y, z) => Ok(Value::Vec3([
            float_op(evaluate(x, ctx)?, "vec3 component")?,
            float_op(evaluate(y, ctx)?, "vec3 component")?,
            float_op(evaluate(z, ctx)?, "vec3 component")?,
        ])),
    }
}

fn float_op(v: Value, what: &str) -> Result<f32, RendererError> {
    v.as_float()
        .ok_or_else(|| RendererError::ShaderError(format!("{what} expects a float, got {v:?}")))
}

fn zip(a: Value, b: Value, f: impl Fn(f32, f32) -> f32) -> Result<Value, RendererError> {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(f(x, y))),
        (Value::Float(s), v) => Ok(v.map(|y| f(s, y))),
        (v, Value::Float(s)) => Ok(v.map(|x| f(x, s))),
        (Value::Vec3(x), Value::Vec3(y)) => Ok(Value::Vec3(std::array::from_fn(|i| f(x[i], y[i])))),
        (Value::Vec4(x), Value::Vec4(y)) => Ok(Value::Vec4(std::array::from_fn(|i| f(x[i], y[i])))),
        (a, b) => Err(RendererError::ShaderError(format!(
            "cannot combine {a:?} with {b:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader_graph::node::{float, mix, position_local, uniform, uv_x, vec3, UniformSlot};

    fn uniforms() -> LenticularUniforms {
        LenticularUniforms {
            divisions: 4.0,
            ridge_height: 0.1,
            edge_smoothness: 0.0,
            _padding: 0.0,
        }
    }

    fn ctx<'a>(u: &'a LenticularUniforms, uv_x: f32) -> EvalContext<'a> {
        EvalContext {
            uv: [uv_x, 0.5],
            position: [1.0, 2.0, 3.0],
            uniforms: u,
            textures: [TextureHandle(1), TextureHandle(2)],
            sampler: None,
        }
    }

    #[test]
    fn fract_matches_wgsl_for_negatives() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert_eq!(fract(3.0), 0.0);
    }

    #[test]
    fn repeated_restarts_at_each_strip() {
        assert!((repeated(0.0, 4.0) - 0.0).abs() < 1e-6);
        assert!((repeated(0.125, 4.0) - 0.5).abs() < 1e-6);
        assert!((repeated(0.25, 4.0) - 0.0).abs() < 1e-6);
        assert!((repeated(0.3, 4.0) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn hard_edge_switches_at_half() {
        assert_eq!(hard_edge(0.49), 0.0);
        assert_eq!(hard_edge(0.5), 1.0);
        assert_eq!(hard_edge(0.99), 1.0);
    }

    #[test]
    fn mix_is_exact_at_endpoints() {
        for &(a, b) in &[(0.0, 0.37), (1.0, 0.91), (-0.05, 0.05)] {
            assert_eq!(mix_f32(a, b, 0.0), a);
            assert_eq!(mix_f32(a, b, 1.0), b);
        }
    }

    #[test]
    fn evaluates_uniform_scaled_uv() {
        let u = uniforms();
        let node = (uv_x() * uniform(UniformSlot::Divisions)).fract();
        let v = evaluate(&node, &ctx(&u, 0.3)).unwrap().as_float().unwrap();
        assert!((v - 0.2).abs() < 1e-5);
    }

    #[test]
    fn scalar_added_to_vector_broadcasts() {
        let u = uniforms();
        let node = position_local() + float(1.0);
        let v = evaluate(&node, &ctx(&u, 0.0)).unwrap();
        assert_eq!(v, Value::Vec3([2.0, 3.0, 4.0]));
    }

    #[test]
    fn vec3_mix_is_componentwise() {
        let u = uniforms();
        let a = vec3(float(0.0), float(0.0), float(0.0));
        let b = vec3(float(2.0), float(4.0), float(8.0));
        let v = evaluate(&mix(a, b, float(0.5)), &ctx(&u, 0.0)).unwrap();
        assert_eq!(v, Value::Vec3([1.0, 2.0, 4.0]));
    }

    #[test]
    fn texture_without_sampler_is_an_error() {
        let u = uniforms();
        let node = crate::shader_graph::node::texture(TextureSlot::A);
        assert!(evaluate(&node, &ctx(&u, 0.0)).is_err());
    }
}
