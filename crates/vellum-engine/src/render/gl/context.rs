use crate::error::Result;

/// Reflection record returned by `active_uniform`/`active_attrib`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInfo {
    pub name: String,
    pub size: i32,
    pub ty: u32,
}

/// The WebGL 1 subset driven by [`RendererGl`](super::RendererGl) and
/// [`ShaderProgram`](super::ShaderProgram).
///
/// Method names follow `WebGLRenderingContext`; enum arguments are the raw
/// values from [`consts`](super::consts). Handle creation returns `None` when
/// the driver refuses (lost context).
pub trait GlContext {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation: Clone;
    type Texture;
    /// Pixel source accepted by `tex_image_2d`.
    type ImageSource;

    // ── shaders and programs ──────────────────────────────────────────────
    fn create_shader(&mut self, kind: u32) -> Option<Self::Shader>;
    fn shader_source(&mut self, shader: &Self::Shader, source: &str);
    fn compile_shader(&mut self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&mut self, shader: &Self::Shader);

    fn create_program(&mut self) -> Option<Self::Program>;
    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&mut self, program: &Self::Program);
    fn validate_program(&mut self, program: &Self::Program);
    /// `getProgramParameter` for status flags (0/1) and active counts.
    fn program_parameter(&self, program: &Self::Program, pname: u32) -> i32;
    fn program_info_log(&self, program: &Self::Program) -> String;
    fn delete_program(&mut self, program: &Self::Program);
    fn use_program(&mut self, program: &Self::Program);

    // ── reflection ────────────────────────────────────────────────────────
    fn active_uniform(&self, program: &Self::Program, index: u32) -> Option<ActiveInfo>;
    fn active_attrib(&self, program: &Self::Program, index: u32) -> Option<ActiveInfo>;
    fn uniform_location(&self, program: &Self::Program, name: &str)
    -> Option<Self::UniformLocation>;
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;

    // ── uniforms ──────────────────────────────────────────────────────────
    fn uniform1i(&mut self, location: &Self::UniformLocation, v: i32);
    fn uniform1iv(&mut self, location: &Self::UniformLocation, v: &[i32]);
    fn uniform1f(&mut self, location: &Self::UniformLocation, v: f32);
    fn uniform1fv(&mut self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform2f(&mut self, location: &Self::UniformLocation, x: f32, y: f32);
    fn uniform3f(&mut self, location: &Self::UniformLocation, x: f32, y: f32, z: f32);
    fn uniform4f(&mut self, location: &Self::UniformLocation, x: f32, y: f32, z: f32, w: f32);
    fn uniform2fv(&mut self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform3fv(&mut self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform4fv(&mut self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform_matrix2fv(&mut self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform_matrix3fv(&mut self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform_matrix4fv(&mut self, location: &Self::UniformLocation, v: &[f32]);

    // ── attributes and buffers ────────────────────────────────────────────
    fn enable_vertex_attrib_array(&mut self, index: u32);
    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn create_buffer(&mut self) -> Option<Self::Buffer>;
    fn bind_buffer(&mut self, target: u32, buffer: Option<&Self::Buffer>);
    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32);

    // ── drawing and state ─────────────────────────────────────────────────
    fn draw_arrays(&mut self, mode: u32, first: i32, count: i32);
    fn line_width(&mut self, width: f32);
    fn viewport(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn enable(&mut self, cap: u32);
    fn disable(&mut self, cap: u32);
    fn blend_func(&mut self, sfactor: u32, dfactor: u32);
    fn blend_equation(&mut self, mode: u32);
    fn depth_func(&mut self, func: u32);
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&mut self, mask: u32);

    // ── textures ──────────────────────────────────────────────────────────
    fn create_texture(&mut self) -> Option<Self::Texture>;
    fn active_texture(&mut self, unit: u32);
    fn bind_texture(&mut self, target: u32, texture: Option<&Self::Texture>);
    fn tex_parameteri(&mut self, target: u32, pname: u32, param: i32);
    /// Uploads `source` as RGBA/UNSIGNED_BYTE into the bound `TEXTURE_2D`.
    fn tex_image_2d(&mut self, source: &Self::ImageSource) -> Result<()>;
}
