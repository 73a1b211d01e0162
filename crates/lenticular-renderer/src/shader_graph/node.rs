//! Expression nodes and their static types.

use std::ops::{Add, Mul, Neg};

use crate::gpu::RendererError;

/// A uniform the graph reads by reference. Values live in
/// [`crate::gpu::LenticularUniforms`], not in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSlot {
    Divisions,
    RidgeHeight,
    EdgeSmoothness,
}

impl UniformSlot {
    pub const ALL: [UniformSlot; 3] = [
        UniformSlot::Divisions,
        UniformSlot::RidgeHeight,
        UniformSlot::EdgeSmoothness,
    ];

    /// Field name inside the WGSL `LenticularUniforms` struct.
    pub fn field_name(self) -> &'static str {
        match self {
            UniformSlot::Divisions => "divisions",
            UniformSlot::RidgeHeight => "ridge_height",
            UniformSlot::EdgeSmoothness => "edge_smoothness",
        }
    }
}

/// Which of the two slice textures a node samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    A,
    B,
}

/// Pipeline stage an expression is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

/// Static type of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Float,
    Vec3,
    Vec4,
}

/// One node of the shader expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Float(f32),
    Uniform(UniformSlot),
    /// Horizontal surface coordinate.
    UvX,
    /// Object-space vertex position. Vertex stage only.
    PositionLocal,
    /// RGBA sample of a slice texture at the surface UV. Fragment stage only.
    Texture(TextureSlot),
    Negate(Box<Node>),
    Add(Box<Node>, Box<Node>),
    Mul(Box<Node>, Box<Node>),
    Fract(Box<Node>),
    /// `1.0` when `x >= edge`, otherwise `0.0`.
    Step {
        edge: Box<Node>,
        x: Box<Node>,
    },
    /// `a * (1 - t) + b * t`.
    Mix {
        a: Box<Node>,
        b: Box<Node>,
        t: Box<Node>,
    },
    Vec3(Box<Node>, Box<Node>, Box<Node>),
}

pub fn float(v: f32) -> Node {
    Node::Float(v)
}

pub fn uniform(slot: UniformSlot) -> Node {
    Node::Uniform(slot)
}

pub fn uv_x() -> Node {
    Node::UvX
}

pub fn position_local() -> Node {
    Node::PositionLocal
}

pub fn texture(slot: TextureSlot) -> Node {
    Node::Texture(slot)
}

pub fn step(edge: Node, x: Node) -> Node {
    Node::Step {
        edge: Box::new(edge),
        x: Box::new(x),
    }
}

pub fn mix(a: Node, b: Node, t: Node) -> Node {
    Node::Mix {
        a: Box::new(a),
        b: Box::new(b),
        t: Box::new(t),
    }
}

pub fn vec3(x: Node, y: Node, z: Node) -> Node {
    Node::Vec3(Box::new(x), Box::new(y), Box::new(z))
}

impl Node {
    pub fn fract(self) -> Node {
        Node::Fract(Box::new(self))
    }

    /// Infer the type of this expression in `stage`, rejecting ill-typed
    /// trees and stage-illegal inputs.
    pub fn value_type(&self, stage: Stage) -> Result<ValueType, RendererError> {
        match self {
            Node::Float(_) | Node::Uniform(_) | Node::UvX => Ok(ValueType::Float),
            Node::PositionLocal => {
                if stage == Stage::Vertex {
                    Ok(ValueType::Vec3)
                } else {
                    Err(RendererError::ShaderError(
                        "local position is only available in the vertex stage".into(),
                    ))
                }
            }
            Node::Texture(slot) => {
                if stage == Stage::Fragment {
                    Ok(ValueType::Vec4)
                } else {
                    Err(RendererError::ShaderError(format!(
                        "texture {slot:?} sampled outside the fragment stage"
                    )))
                }
            }
            Node::Negate(inner) => inner.value_type(stage),
            Node::Fract(inner) => expect_float(inner.value_type(stage)?, "fract"),
            Node::Add(a, b) | Node::Mul(a, b) => {
                let (ta, tb) = (a.value_type(stage)?, b.value_type(stage)?);
                match (ta, tb) {
                    (x, y) if x == y => Ok(x),
                    (ValueType::Float, other) | (other, ValueType::Float) => Ok(other),
                    _ => Err(RendererError::ShaderError(format!(
                        "cannot combine {ta:?} with {tb:?}"
                    ))),
                }
            }
            Node::Step { edge, x } => {
                expect_float(edge.value_type(stage)?, "step edge")?;
                expect_float(x.value_type(stage)?, "step input")
            }
            Node::Mix { a, b, t } => {
                let (ta, tb) = (a.value_type(stage)?, b.value_type(stage)?);
                if ta != tb {
                    return Err(RendererError::ShaderError(format!(
                        "mix operands differ: {ta:?} vs {tb:?}"
                    )));
                }
                expect_float(t.value_type(stage)?, "mix factor")?;
                Ok(ta)
            }
            Node::Vec3(x, y, z) => {
                for c in [x, y, z] {
                    expect_float(c.value_type(stage)?, "vec3 component")?;
                }
                Ok(ValueType::Vec3)
            }
        }
    }
}

fn expect_float(ty: ValueType, what: &str) -> Result<ValueType, RendererError> {
    if ty == ValueType::Float {
        Ok(ty)
    } else {
        Err(RendererError::ShaderError(format!(
            "{what} expects a float, got {ty:?}"
        )))
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        Node::Add(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Node) -> Node {
        Node::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Node {
        Node::Negate(Box::new(self))
    }
}
