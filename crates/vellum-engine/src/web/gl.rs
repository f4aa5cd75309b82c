use wasm_bindgen::JsValue;
use web_sys::{
    HtmlImageElement, WebGlActiveInfo, WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl,
    WebGlShader, WebGlTexture, WebGlUniformLocation,
};

use crate::error::Result;
use crate::render::gl::consts::*;
use crate::render::gl::{ActiveInfo, GlContext};

use super::backend_error;

/// `WebGLRenderingContext` behind [`GlContext`].
#[derive(Debug, Clone)]
pub struct WebGl {
    gl: Gl,
}

impl WebGl {
    pub fn new(gl: Gl) -> Self {
        Self { gl }
    }

    #[inline]
    pub fn raw(&self) -> &Gl {
        &self.gl
    }
}

fn active_info(info: WebGlActiveInfo) -> ActiveInfo {
    ActiveInfo { name: info.name(), size: info.size(), ty: info.type_() }
}

/// Status flags come back as booleans, counts as numbers.
fn parameter(value: JsValue) -> i32 {
    value
        .as_bool()
        .map(i32::from)
        .or_else(|| value.as_f64().map(|n| n as i32))
        .unwrap_or(0)
}

impl GlContext for WebGl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;
    type Texture = WebGlTexture;
    type ImageSource = HtmlImageElement;

    // ── shaders and programs ──────────────────────────────────────────────

    fn create_shader(&mut self, kind: u32) -> Option<WebGlShader> {
        self.gl.create_shader(kind)
    }

    fn shader_source(&mut self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&mut self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL_COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.gl.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn create_program(&mut self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&mut self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&mut self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn validate_program(&mut self, program: &WebGlProgram) {
        self.gl.validate_program(program);
    }

    fn program_parameter(&self, program: &WebGlProgram, pname: u32) -> i32 {
        parameter(self.gl.get_program_parameter(program, pname))
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.gl.get_program_info_log(program).unwrap_or_default()
    }

    fn delete_program(&mut self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn use_program(&mut self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    // ── reflection ────────────────────────────────────────────────────────

    fn active_uniform(&self, program: &WebGlProgram, index: u32) -> Option<ActiveInfo> {
        self.gl.get_active_uniform(program, index).map(active_info)
    }

    fn active_attrib(&self, program: &WebGlProgram, index: u32) -> Option<ActiveInfo> {
        self.gl.get_active_attrib(program, index).map(active_info)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.gl.get_attrib_location(program, name)
    }

    // ── uniforms ──────────────────────────────────────────────────────────

    fn uniform1i(&mut self, location: &WebGlUniformLocation, v: i32) {
        self.gl.uniform1i(Some(location), v);
    }

    fn uniform1iv(&mut self, location: &WebGlUniformLocation, v: &[i32]) {
        self.gl.uniform1iv_with_i32_array(Some(location), v);
    }

    fn uniform1f(&mut self, location: &WebGlUniformLocation, v: f32) {
        self.gl.uniform1f(Some(location), v);
    }

    fn uniform1fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform1fv_with_f32_array(Some(location), v);
    }

    fn uniform2f(&mut self, location: &WebGlUniformLocation, x: f32, y: f32) {
        self.gl.uniform2f(Some(location), x, y);
    }

    fn uniform3f(&mut self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32) {
        self.gl.uniform3f(Some(location), x, y, z);
    }

    fn uniform4f(&mut self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.gl.uniform4f(Some(location), x, y, z, w);
    }

    fn uniform2fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform2fv_with_f32_array(Some(location), v);
    }

    fn uniform3fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform3fv_with_f32_array(Some(location), v);
    }

    fn uniform4fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform4fv_with_f32_array(Some(location), v);
    }

    fn uniform_matrix2fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform_matrix2fv_with_f32_array(Some(location), false, v);
    }

    fn uniform_matrix3fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform_matrix3fv_with_f32_array(Some(location), false, v);
    }

    fn uniform_matrix4fv(&mut self, location: &WebGlUniformLocation, v: &[f32]) {
        self.gl.uniform_matrix4fv_with_f32_array(Some(location), false, v);
    }

    // ── attributes and buffers ────────────────────────────────────────────

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.gl.enable_vertex_attrib_array(index);
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
        self.gl
            .vertex_attrib_pointer_with_i32(index, size, ty, normalized, stride, offset);
    }

    fn create_buffer(&mut self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn bind_buffer(&mut self, target: u32, buffer: Option<&WebGlBuffer>) {
        self.gl.bind_buffer(target, buffer);
    }

    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32) {
        self.gl.buffer_data_with_u8_array(target, data, usage);
    }

    // ── drawing and state ─────────────────────────────────────────────────

    fn draw_arrays(&mut self, mode: u32, first: i32, count: i32) {
        self.gl.draw_arrays(mode, first, count);
    }

    fn line_width(&mut self, width: f32) {
        self.gl.line_width(width);
    }

    fn viewport(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.gl.viewport(x, y, w, h);
    }

    fn enable(&mut self, cap: u32) {
        self.gl.enable(cap);
    }

    fn disable(&mut self, cap: u32) {
        self.gl.disable(cap);
    }

    fn blend_func(&mut self, sfactor: u32, dfactor: u32) {
        self.gl.blend_func(sfactor, dfactor);
    }

    fn blend_equation(&mut self, mode: u32) {
        self.gl.blend_equation(mode);
    }

    fn depth_func(&mut self, func: u32) {
        self.gl.depth_func(func);
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
    }

    fn clear(&mut self, mask: u32) {
        self.gl.clear(mask);
    }

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture(&mut self) -> Option<WebGlTexture> {
        self.gl.create_texture()
    }

    fn active_texture(&mut self, unit: u32) {
        self.gl.active_texture(unit);
    }

    fn bind_texture(&mut self, target: u32, texture: Option<&WebGlTexture>) {
        self.gl.bind_texture(target, texture);
    }

    fn tex_parameteri(&mut self, target: u32, pname: u32, param: i32) {
        self.gl.tex_parameteri(target, pname, param);
    }

    fn tex_image_2d(&mut self, source: &HtmlImageElement) -> Result<()> {
        self.gl
            .tex_image_2d_with_u32_and_u32_and_image(
                GL_TEXTURE_2D,
                0,
                GL_RGBA as i32,
                GL_RGBA,
                GL_UNSIGNED_BYTE,
                source,
            )
            .map_err(backend_error)
    }
}
