//! WebGL backend.
//!
//! [`RendererGl`] owns one [`ShaderProgram`] per shader pair, a default and a
//! unit-square vertex buffer, and a software transform stack.

pub mod consts;
mod context;
mod program;
mod renderer;
pub mod shaders;

pub use context::{ActiveInfo, GlContext};
pub use program::{AttributeInfo, ShaderProgram, UniformInfo, UniformValue};
pub use renderer::{QuadVertex, RendererGl, QUAD_VERTICES};
