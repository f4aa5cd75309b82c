use std::collections::HashMap;

use crate::error::{RenderError, Result};

use super::consts::*;
use super::context::GlContext;
use super::shaders::ShaderSources;

/// Cached uniform reflection.
#[derive(Debug, Clone)]
pub struct UniformInfo<L> {
    pub location: L,
    pub size: i32,
    pub ty: u32,
}

/// Cached attribute reflection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeInfo {
    pub location: u32,
    pub size: i32,
    pub ty: u32,
}

/// Value passed to [`ShaderProgram::set_uniform`]. Must match the reflected type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue<'a> {
    Bool(bool),
    Int(i32),
    Ints(&'a [i32]),
    Float(f32),
    /// Vectors, matrices and float arrays.
    Floats(&'a [f32]),
}

/// A linked program with lazily reflected uniforms and attributes.
///
/// Lookups walk the driver's active lists backwards on the first miss and cache
/// every entry they pass, so each index is queried at most once.
pub struct ShaderProgram<G: GlContext> {
    program: G::Program,
    uniforms: HashMap<String, UniformInfo<G::UniformLocation>>,
    attributes: HashMap<String, AttributeInfo>,
    uniform_index: i32,
    attribute_index: i32,
}

impl<G: GlContext> ShaderProgram<G> {
    /// Compiles both stages, links and validates.
    pub fn new(gl: &mut G, sources: &ShaderSources) -> Result<Self> {
        let vert = compile_shader(gl, GL_VERTEX_SHADER, sources.vert)?;
        let frag = match compile_shader(gl, GL_FRAGMENT_SHADER, sources.frag) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(&vert);
                return Err(e);
            }
        };
        let program = link_program(gl, &vert, &frag);
        gl.delete_shader(&vert);
        gl.delete_shader(&frag);
        let program = program?;

        let uniform_index = gl.program_parameter(&program, GL_ACTIVE_UNIFORMS);
        let attribute_index = gl.program_parameter(&program, GL_ACTIVE_ATTRIBUTES);
        log::debug!(
            "shader program linked ({uniform_index} uniforms, {attribute_index} attributes)"
        );

        Ok(Self {
            program,
            uniforms: HashMap::new(),
            attributes: HashMap::new(),
            uniform_index,
            attribute_index,
        })
    }

    #[inline]
    pub fn program(&self) -> &G::Program {
        &self.program
    }

    pub fn use_program(&self, gl: &mut G) -> &Self {
        gl.use_program(&self.program);
        self
    }

    /// Enables `name` and points it at the bound `ARRAY_BUFFER`.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer(
        &mut self,
        gl: &mut G,
        name: &str,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) -> Result<&mut Self> {
        let location = self.attribute(gl, name)?.location;
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer(location, size, ty, normalized, stride, offset);
        Ok(self)
    }

    pub fn uniform(&mut self, gl: &G, name: &str) -> Result<&UniformInfo<G::UniformLocation>> {
        if !self.uniforms.contains_key(name) {
            self.reflect_uniforms_until(gl, name);
        }
        self.uniforms
            .get(name)
            .ok_or_else(|| RenderError::UniformNotFound(name.to_string()))
    }

    pub fn attribute(&mut self, gl: &G, name: &str) -> Result<AttributeInfo> {
        if let Some(info) = self.attributes.get(name) {
            return Ok(*info);
        }
        while self.attribute_index > 0 {
            self.attribute_index -= 1;
            let Some(info) = gl.active_attrib(&self.program, self.attribute_index as u32) else {
                continue;
            };
            let location = gl.attrib_location(&self.program, &info.name);
            if location < 0 {
                continue;
            }
            let attribute = AttributeInfo { location: location as u32, size: info.size, ty: info.ty };
            let found = info.name == name;
            self.attributes.insert(info.name, attribute);
            if found {
                return Ok(attribute);
            }
        }
        Err(RenderError::AttributeNotFound(name.to_string()))
    }

    fn reflect_uniforms_until(&mut self, gl: &G, name: &str) {
        while self.uniform_index > 0 {
            self.uniform_index -= 1;
            let Some(info) = gl.active_uniform(&self.program, self.uniform_index as u32) else {
                continue;
            };
            let Some(location) = gl.uniform_location(&self.program, &info.name) else {
                continue;
            };
            // Arrays are reported as `name[0]`.
            let key = match info.name.find('[') {
                Some(i) if info.size > 1 => info.name[..i].to_string(),
                _ => info.name,
            };
            let found = key == name;
            self.uniforms.insert(key, UniformInfo { location, size: info.size, ty: info.ty });
            if found {
                return;
            }
        }
    }

    /// Uploads `value` using the setter matching the uniform's reflected type.
    pub fn set_uniform(
        &mut self,
        gl: &mut G,
        name: &str,
        value: UniformValue<'_>,
    ) -> Result<&mut Self> {
        let UniformInfo { location, size, ty } = self.uniform(gl, name)?.clone();
        let shape = |expected: &'static str| RenderError::UniformShape {
            name: name.to_string(),
            expected,
        };

        match ty {
            GL_BOOL | GL_INT | GL_SAMPLER_2D => match value {
                UniformValue::Ints(v) if size > 1 => gl.uniform1iv(&location, v),
                UniformValue::Int(v) if size == 1 => gl.uniform1i(&location, v),
                UniformValue::Bool(v) if size == 1 => gl.uniform1i(&location, v as i32),
                _ => return Err(shape(if size > 1 { "an integer array" } else { "an integer" })),
            },
            GL_FLOAT => match value {
                UniformValue::Floats(v) if size > 1 => gl.uniform1fv(&location, v),
                UniformValue::Float(v) if size == 1 => gl.uniform1f(&location, v),
                _ => return Err(shape(if size > 1 { "a float array" } else { "a float" })),
            },
            GL_FLOAT_MAT2 => {
                let v = floats(value, 4).ok_or_else(|| shape("4 floats"))?;
                gl.uniform_matrix2fv(&location, v)
            }
            GL_FLOAT_MAT3 => {
                let v = floats(value, 9).ok_or_else(|| shape("9 floats"))?;
                gl.uniform_matrix3fv(&location, v)
            }
            GL_FLOAT_MAT4 => {
                let v = floats(value, 16).ok_or_else(|| shape("16 floats"))?;
                gl.uniform_matrix4fv(&location, v)
            }
            GL_FLOAT_VEC2 => {
                let v = floats(value, 2).ok_or_else(|| shape("2 floats"))?;
                if size > 1 { gl.uniform2fv(&location, v) } else { gl.uniform2f(&location, v[0], v[1]) }
            }
            GL_FLOAT_VEC3 => {
                let v = floats(value, 3).ok_or_else(|| shape("3 floats"))?;
                if size > 1 { gl.uniform3fv(&location, v) } else { gl.uniform3f(&location, v[0], v[1], v[2]) }
            }
            GL_FLOAT_VEC4 => {
                let v = floats(value, 4).ok_or_else(|| shape("4 floats"))?;
                if size > 1 {
                    gl.uniform4fv(&location, v)
                } else {
                    gl.uniform4f(&location, v[0], v[1], v[2], v[3])
                }
            }
            other => return Err(RenderError::UnsupportedUniformType(other)),
        }
        Ok(self)
    }
}

/// Float slice of at least `min` elements.
#[inline]
fn floats(value: UniformValue<'_>, min: usize) -> Option<&[f32]> {
    match value {
        UniformValue::Floats(v) if v.len() >= min => Some(v),
        _ => None,
    }
}

fn compile_shader<G: GlContext>(gl: &mut G, kind: u32, source: &str) -> Result<G::Shader> {
    let shader = gl
        .create_shader(kind)
        .ok_or(RenderError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if !gl.shader_compile_status(&shader) {
        let log = gl.shader_info_log(&shader);
        gl.delete_shader(&shader);
        return Err(RenderError::ShaderCompile { log });
    }
    Ok(shader)
}

fn link_program<G: GlContext>(gl: &mut G, vert: &G::Shader, frag: &G::Shader) -> Result<G::Program> {
    let program = gl
        .create_program()
        .ok_or(RenderError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);
    if gl.program_parameter(&program, GL_LINK_STATUS) == 0 {
        let log = gl.program_info_log(&program);
        gl.delete_program(&program);
        return Err(RenderError::ProgramLink { log });
    }
    gl.validate_program(&program);
    if gl.program_parameter(&program, GL_VALIDATE_STATUS) == 0 {
        let log = gl.program_info_log(&program);
        gl.delete_program(&program);
        return Err(RenderError::ProgramValidate { log });
    }
    Ok(program)
}
