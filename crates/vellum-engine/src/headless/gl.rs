use std::collections::HashMap;

use crate::error::{RenderError, Result};
use crate::render::gl::consts::*;
use crate::render::gl::{ActiveInfo, GlContext};

use super::surface::HeadlessImage;

/// One recorded state-changing or drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    Enable(u32),
    Disable(u32),
    BlendFunc(u32, u32),
    BlendEquation(u32),
    DepthFunc(u32),
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    Clear(u32),
    UseProgram(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, data: Vec<f32>, usage: u32 },
    /// `setter` is the WebGL method suffix, e.g. `"4f"` or `"Matrix3fv"`.
    Uniform { name: String, setter: &'static str, values: Vec<f32> },
    EnableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, size: i32, ty: u32, normalized: bool, stride: i32, offset: i32 },
    DrawArrays { mode: u32, first: i32, count: i32 },
    LineWidth(f32),
    ActiveTexture(u32),
    BindTexture { target: u32, texture: Option<u32> },
    TexParameter { pname: u32, param: i32 },
    TexImage2d(String),
}

/// Failures to inject into [`HeadlessGl`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlFaults {
    /// Link fails with this info log.
    pub link: Option<String>,
    /// Validation fails with this info log.
    pub validate: Option<String>,
}

/// Uniform location: the owning program plus the declared base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessLocation {
    pub program: u32,
    pub name: String,
}

#[derive(Debug, Default)]
struct ShaderState {
    source: String,
    compiled: bool,
    log: String,
    uniforms: Vec<ActiveInfo>,
    attributes: Vec<ActiveInfo>,
}

#[derive(Debug, Default)]
struct ProgramState {
    shaders: Vec<u32>,
    linked: bool,
    validated: bool,
    log: String,
    uniforms: Vec<ActiveInfo>,
    attributes: Vec<ActiveInfo>,
}

/// A [`GlContext`] without a GPU.
///
/// Shaders "compile" by reading their `uniform`/`attribute` declarations, so
/// program reflection behaves like a driver's. A source without `void main`
/// fails to compile; link and validate failures are injected with [`GlFaults`].
#[derive(Debug, Default)]
pub struct HeadlessGl {
    calls: Vec<GlCall>,
    faults: GlFaults,
    next_id: u32,
    shaders: HashMap<u32, ShaderState>,
    programs: HashMap<u32, ProgramState>,
}

impl HeadlessGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: GlFaults) -> Self {
        Self { faults, ..Self::default() }
    }

    #[inline]
    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    /// Returns and forgets the recorded calls.
    pub fn take(&mut self) -> Vec<GlCall> {
        std::mem::take(&mut self.calls)
    }

    /// Recorded `drawArrays` calls as `(mode, count)`.
    pub fn draws(&self) -> Vec<(u32, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                GlCall::DrawArrays { mode, count, .. } => Some((*mode, *count)),
                _ => None,
            })
            .collect()
    }

    /// Last value uploaded to uniform `name`.
    pub fn last_uniform(&self, name: &str) -> Option<&[f32]> {
        self.calls.iter().rev().find_map(|c| match c {
            GlCall::Uniform { name: n, values, .. } if n == name => Some(values.as_slice()),
            _ => None,
        })
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn uniform(&mut self, location: &HeadlessLocation, setter: &'static str, values: Vec<f32>) {
        self.calls.push(GlCall::Uniform { name: location.name.clone(), setter, values });
    }
}

/// GL enum for a GLSL type name.
fn glsl_type(name: &str) -> u32 {
    match name {
        "bool" => GL_BOOL,
        "int" => GL_INT,
        "float" => GL_FLOAT,
        "vec2" => GL_FLOAT_VEC2,
        "vec3" => GL_FLOAT_VEC3,
        "vec4" => GL_FLOAT_VEC4,
        "mat2" => GL_FLOAT_MAT2,
        "mat3" => GL_FLOAT_MAT3,
        "mat4" => GL_FLOAT_MAT4,
        "sampler2D" => GL_SAMPLER_2D,
        // INT_VEC2 and friends are not distinguished.
        _ => 0x8B53,
    }
}

/// Parses `qualifier type name[n];` declarations.
fn declarations(source: &str, qualifier: &str) -> Vec<ActiveInfo> {
    source
        .split(';')
        .filter_map(|stmt| {
            let mut words = stmt.split_whitespace();
            if words.next()? != qualifier {
                return None;
            }
            let ty = glsl_type(words.next()?);
            let name = words.next()?;
            Some(match name.split_once('[') {
                Some((base, rest)) => {
                    let size = rest.trim_end_matches(']').parse().unwrap_or(1);
                    ActiveInfo { name: format!("{base}[0]"), size, ty }
                }
                None => ActiveInfo { name: name.to_string(), size: 1, ty },
            })
        })
        .collect()
}

fn base_name(name: &str) -> &str {
    name.split_once('[').map_or(name, |(base, _)| base)
}

impl GlContext for HeadlessGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = HeadlessLocation;
    type Texture = u32;
    type ImageSource = HeadlessImage;

    fn create_shader(&mut self, _kind: u32) -> Option<u32> {
        let id = self.next();
        self.shaders.insert(id, ShaderState::default());
        Some(id)
    }

    fn shader_source(&mut self, shader: &u32, source: &str) {
        if let Some(s) = self.shaders.get_mut(shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&mut self, shader: &u32) {
        let Some(s) = self.shaders.get_mut(shader) else { return };
        s.compiled = s.source.contains("void main");
        if s.compiled {
            s.uniforms = declarations(&s.source, "uniform");
            s.attributes = declarations(&s.source, "attribute");
        } else {
            s.log = "ERROR: 0:1: 'main' : function not found".to_string();
        }
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.shaders.get(shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: &u32) -> String {
        self.shaders.get(shader).map(|s| s.log.clone()).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: &u32) {
        self.shaders.remove(shader);
    }

    fn create_program(&mut self) -> Option<u32> {
        let id = self.next();
        self.programs.insert(id, ProgramState::default());
        Some(id)
    }

    fn attach_shader(&mut self, program: &u32, shader: &u32) {
        if let Some(p) = self.programs.get_mut(program) {
            p.shaders.push(*shader);
        }
    }

    fn link_program(&mut self, program: &u32) {
        let Some(p) = self.programs.get_mut(program) else { return };
        if let Some(log) = &self.faults.link {
            p.log = log.clone();
            return;
        }
        for id in &p.shaders {
            let Some(s) = self.shaders.get(id) else { continue };
            for u in &s.uniforms {
                if !p.uniforms.iter().any(|known| known.name == u.name) {
                    p.uniforms.push(u.clone());
                }
            }
            p.attributes.extend(s.attributes.iter().cloned());
        }
        p.linked = true;
    }

    fn validate_program(&mut self, program: &u32) {
        let Some(p) = self.programs.get_mut(program) else { return };
        match &self.faults.validate {
            Some(log) => p.log = log.clone(),
            None => p.validated = p.linked,
        }
    }

    fn program_parameter(&self, program: &u32, pname: u32) -> i32 {
        let Some(p) = self.programs.get(program) else { return 0 };
        match pname {
            GL_LINK_STATUS => p.linked as i32,
            GL_VALIDATE_STATUS => p.validated as i32,
            GL_ACTIVE_UNIFORMS => p.uniforms.len() as i32,
            GL_ACTIVE_ATTRIBUTES => p.attributes.len() as i32,
            _ => 0,
        }
    }

    fn program_info_log(&self, program: &u32) -> String {
        self.programs.get(program).map(|p| p.log.clone()).unwrap_or_default()
    }

    fn delete_program(&mut self, program: &u32) {
        self.programs.remove(program);
    }

    fn use_program(&mut self, program: &u32) {
        self.calls.push(GlCall::UseProgram(*program));
    }

    fn active_uniform(&self, program: &u32, index: u32) -> Option<ActiveInfo> {
        self.programs.get(program)?.uniforms.get(index as usize).cloned()
    }

    fn active_attrib(&self, program: &u32, index: u32) -> Option<ActiveInfo> {
        self.programs.get(program)?.attributes.get(index as usize).cloned()
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<HeadlessLocation> {
        let base = base_name(name);
        self.programs
            .get(program)?
            .uniforms
            .iter()
            .any(|u| base_name(&u.name) == base)
            .then(|| HeadlessLocation { program: *program, name: base.to_string() })
    }

    fn attrib_location(&self, program: &u32, name: &str) -> i32 {
        self.programs
            .get(program)
            .and_then(|p| p.attributes.iter().position(|a| a.name == name))
            .map_or(-1, |i| i as i32)
    }

    fn uniform1i(&mut self, location: &HeadlessLocation, v: i32) {
        self.uniform(location, "1i", vec![v as f32]);
    }

    fn uniform1iv(&mut self, location: &HeadlessLocation, v: &[i32]) {
        self.uniform(location, "1iv", v.iter().map(|&i| i as f32).collect());
    }

    fn uniform1f(&mut self, location: &HeadlessLocation, v: f32) {
        self.uniform(location, "1f", vec![v]);
    }

    fn uniform1fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "1fv", v.to_vec());
    }

    fn uniform2f(&mut self, location: &HeadlessLocation, x: f32, y: f32) {
        self.uniform(location, "2f", vec![x, y]);
    }

    fn uniform3f(&mut self, location: &HeadlessLocation, x: f32, y: f32, z: f32) {
        self.uniform(location, "3f", vec![x, y, z]);
    }

    fn uniform4f(&mut self, location: &HeadlessLocation, x: f32, y: f32, z: f32, w: f32) {
        self.uniform(location, "4f", vec![x, y, z, w]);
    }

    fn uniform2fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "2fv", v.to_vec());
    }

    fn uniform3fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "3fv", v.to_vec());
    }

    fn uniform4fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "4fv", v.to_vec());
    }

    fn uniform_matrix2fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "Matrix2fv", v.to_vec());
    }

    fn uniform_matrix3fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "Matrix3fv", v.to_vec());
    }

    fn uniform_matrix4fv(&mut self, location: &HeadlessLocation, v: &[f32]) {
        self.uniform(location, "Matrix4fv", v.to_vec());
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.calls.push(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.calls
            .push(GlCall::VertexAttribPointer { index, size, ty, normalized, stride, offset });
    }

    fn create_buffer(&mut self) -> Option<u32> {
        Some(self.next())
    }

    fn bind_buffer(&mut self, target: u32, buffer: Option<&u32>) {
        self.calls.push(GlCall::BindBuffer { target, buffer: buffer.copied() });
    }

    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32) {
        let data = data
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        self.calls.push(GlCall::BufferData { target, data, usage });
    }

    fn draw_arrays(&mut self, mode: u32, first: i32, count: i32) {
        self.calls.push(GlCall::DrawArrays { mode, first, count });
    }

    fn line_width(&mut self, width: f32) {
        self.calls.push(GlCall::LineWidth(width));
    }

    fn viewport(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.calls.push(GlCall::Viewport(x, y, w, h));
    }

    fn enable(&mut self, cap: u32) {
        self.calls.push(GlCall::Enable(cap));
    }

    fn disable(&mut self, cap: u32) {
        self.calls.push(GlCall::Disable(cap));
    }

    fn blend_func(&mut self, sfactor: u32, dfactor: u32) {
        self.calls.push(GlCall::BlendFunc(sfactor, dfactor));
    }

    fn blend_equation(&mut self, mode: u32) {
        self.calls.push(GlCall::BlendEquation(mode));
    }

    fn depth_func(&mut self, func: u32) {
        self.calls.push(GlCall::DepthFunc(func));
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.calls.push(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear(&mut self, mask: u32) {
        self.calls.push(GlCall::Clear(mask));
    }

    fn create_texture(&mut self) -> Option<u32> {
        Some(self.next())
    }

    fn active_texture(&mut self, unit: u32) {
        self.calls.push(GlCall::ActiveTexture(unit));
    }

    fn bind_texture(&mut self, target: u32, texture: Option<&u32>) {
        self.calls.push(GlCall::BindTexture { target, texture: texture.copied() });
    }

    fn tex_parameteri(&mut self, _target: u32, pname: u32, param: i32) {
        self.calls.push(GlCall::TexParameter { pname, param });
    }

    fn tex_image_2d(&mut self, source: &HeadlessImage) -> Result<()> {
        if source.width == 0 || source.height == 0 {
            return Err(RenderError::Backend(format!("image \"{}\" has no pixels", source.label)));
        }
        self.calls.push(GlCall::TexImage2d(source.label.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_are_reflected() {
        let decls = declarations(
            "precision mediump float;uniform vec2 ures;uniform float weights[3];attribute vec2 apos;void main(){}",
            "uniform",
        );
        assert_eq!(
            decls,
            vec![
                ActiveInfo { name: "ures".into(), size: 1, ty: GL_FLOAT_VEC2 },
                ActiveInfo { name: "weights[0]".into(), size: 3, ty: GL_FLOAT },
            ]
        );
    }

    #[test]
    fn missing_main_fails_compilation() {
        let mut gl = HeadlessGl::new();
        let Some(shader) = gl.create_shader(GL_VERTEX_SHADER) else { panic!("no shader") };
        gl.shader_source(&shader, "attribute vec2 apos;");
        gl.compile_shader(&shader);
        assert!(!gl.shader_compile_status(&shader));
        assert!(gl.shader_info_log(&shader).contains("main"));
    }
}
