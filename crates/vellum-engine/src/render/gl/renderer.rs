use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::error::{RenderError, Result};
use crate::image::{AbstractImage, Image, ImageId};
use crate::math::{Transform, TransformStack};
use crate::paint::{Color, ColorArgs};
use crate::render::abstract_renderer::{AbstractRenderer, RendererBase};
use crate::render::options::{RendererOptions, RendererType};
use crate::render::polygon::PolygonCache;
use crate::render::settings::{align, ShapeType};
use crate::render::surface::{CanvasElement, CanvasSurface};

use super::consts::*;
use super::context::GlContext;
use super::program::{ShaderProgram, UniformValue};
use super::shaders;

// ── unit square ───────────────────────────────────────────────────────────

/// Vertex of the unit square every `rect` and image is scaled from.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

/// Polygon used for `arc`.
const ARC_SIDES: f32 = 24.0;

struct Buffers<B> {
    /// Re-uploaded by every `draw_arrays` call that passes vertices.
    default: B,
    /// Static unit square for `rect` and images.
    square: B,
}

/// Backend drawing through a [`GlContext`].
///
/// WebGL has no matrix stack, so transforms run on a software [`Transform`]
/// whose matrix is uploaded as `utransform` on every draw.
pub struct RendererGl<S: CanvasSurface> {
    base: RendererBase,
    surface: S,
    gl: S::Gl,
    matrix: Transform,
    buffers: Buffers<<S::Gl as GlContext>::Buffer>,
    program: ShaderProgram<S::Gl>,
    image_program: ShaderProgram<S::Gl>,
    textures: HashMap<ImageId, <S::Gl as GlContext>::Texture>,
}

impl<S: CanvasSurface> RendererGl<S> {
    pub fn new(mut surface: S, options: RendererOptions) -> Result<Self> {
        let mut gl = surface
            .context_webgl(options.context_attributes())
            .ok_or(RenderError::WebGlUnavailable)?;

        let default = gl.create_buffer().ok_or(RenderError::ResourceCreation("buffer"))?;
        let square = gl.create_buffer().ok_or(RenderError::ResourceCreation("buffer"))?;
        gl.bind_buffer(GL_ARRAY_BUFFER, Some(&square));
        gl.buffer_data(GL_ARRAY_BUFFER, bytemuck::cast_slice(&QUAD_VERTICES), GL_STATIC_DRAW);

        let program = ShaderProgram::new(&mut gl, &shaders::BASIC)?;
        let image_program = ShaderProgram::new(&mut gl, &shaders::TEXTURED)?;
        let blending = options.blending;

        let mut renderer = Self {
            base: RendererBase::new(options, RendererType::Gl),
            surface,
            gl,
            matrix: Transform::new(),
            buffers: Buffers { default, square },
            program,
            image_program,
            textures: HashMap::new(),
        };
        renderer.blending(blending);
        let (w, h) = renderer.base.initial_size(&renderer.surface);
        renderer.resize(w, h);
        log::debug!("GL renderer created ({}x{})", renderer.base.w, renderer.base.h);
        Ok(renderer)
    }

    /// Shares `cache` instead of the renderer's own polygon cache.
    pub fn with_polygon_cache(mut self, cache: PolygonCache) -> Self {
        self.base.polygons = cache;
        self
    }

    #[inline]
    pub fn gl(&self) -> &S::Gl {
        &self.gl
    }

    #[inline]
    pub fn gl_mut(&mut self) -> &mut S::Gl {
        &mut self.gl
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current software transform.
    #[inline]
    pub fn transform_stack(&self) -> &Transform {
        &self.matrix
    }

    /// Alpha blending on, depth test off; or the reverse.
    pub fn blending(&mut self, enabled: bool) -> &mut Self {
        let gl = &mut self.gl;
        if enabled {
            gl.enable(GL_BLEND);
            gl.disable(GL_DEPTH_TEST);
            gl.blend_func(GL_SRC_ALPHA, GL_ONE_MINUS_SRC_ALPHA);
            gl.blend_equation(GL_FUNC_ADD);
        } else {
            gl.disable(GL_BLEND);
            gl.enable(GL_DEPTH_TEST);
            gl.depth_func(GL_LEQUAL);
        }
        self
    }

    fn clear_to(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(GL_COLOR_BUFFER_BIT | GL_DEPTH_BUFFER_BIT);
    }

    /// Binds the basic program with the current matrix and the bound buffer as `apos`.
    fn prepare(&mut self) -> Result<()> {
        let gl = &mut self.gl;
        self.program.use_program(gl);
        self.program
            .set_uniform(gl, "utransform", UniformValue::Floats(self.matrix.matrix().as_slice()))?
            .set_uniform(gl, "ures", UniformValue::Floats(&[self.base.w, self.base.h]))?
            .pointer(gl, "apos", 2, GL_FLOAT, false, 0, 0)?;
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<()> {
        let rgba = color.rgba().to_array();
        self.program
            .set_uniform(&mut self.gl, "ucolor", UniformValue::Floats(&rgba))?;
        Ok(())
    }

    fn fill_fan(&mut self, count: i32) -> Result<()> {
        if self.base.settings.do_fill {
            self.set_color(self.base.settings.fill_color)?;
            self.gl.draw_arrays(GL_TRIANGLE_FAN, 0, count);
        }
        Ok(())
    }

    fn stroke_lines(&mut self, mode: u32, count: i32) -> Result<()> {
        let settings = self.base.settings;
        if settings.do_stroke && settings.line_width > 0.0 {
            self.set_color(settings.stroke_color)?;
            self.gl.line_width(settings.line_width);
            self.gl.draw_arrays(mode, 0, count);
        }
        Ok(())
    }

    /// Texture for the root image, uploaded on first use.
    fn texture(&mut self, root: &Image<S::Image>) -> Result<()> {
        if let Some(texture) = self.textures.get(&root.id()) {
            self.gl.bind_texture(GL_TEXTURE_2D, Some(texture));
            return Ok(());
        }
        let gl = &mut self.gl;
        let texture = gl
            .create_texture()
            .ok_or(RenderError::ResourceCreation("texture"))?;
        gl.bind_texture(GL_TEXTURE_2D, Some(&texture));
        gl.tex_parameteri(GL_TEXTURE_2D, GL_TEXTURE_MIN_FILTER, GL_LINEAR as i32);
        gl.tex_parameteri(GL_TEXTURE_2D, GL_TEXTURE_MAG_FILTER, GL_LINEAR as i32);
        gl.tex_parameteri(GL_TEXTURE_2D, GL_TEXTURE_WRAP_S, GL_CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL_TEXTURE_2D, GL_TEXTURE_WRAP_T, GL_CLAMP_TO_EDGE as i32);
        gl.tex_image_2d(root.source())?;
        log::trace!("uploaded texture for image {:?}", root.id());
        self.textures.insert(root.id(), texture);
        Ok(())
    }

    fn draw_textured(
        &mut self,
        image: &dyn AbstractImage<S::Image>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<()> {
        let root = image.get();
        let (tw, th) = (root.w().max(1.0), root.h().max(1.0));
        let crop = [image.x() / tw, image.y() / th, image.w() / tw, image.h() / th];

        self.gl.active_texture(GL_TEXTURE0);
        self.texture(root)?;

        self.matrix.translate(x, y);
        self.matrix.scale(w, h);
        self.gl.bind_buffer(GL_ARRAY_BUFFER, Some(&self.buffers.square));

        let gl = &mut self.gl;
        self.image_program.use_program(gl);
        self.image_program
            .set_uniform(gl, "utransform", UniformValue::Floats(self.matrix.matrix().as_slice()))?
            .set_uniform(gl, "ures", UniformValue::Floats(&[self.base.w, self.base.h]))?
            .set_uniform(gl, "ucrop", UniformValue::Floats(&crop))?
            .set_uniform(gl, "uimage", UniformValue::Int(0))?
            .pointer(gl, "apos", 2, GL_FLOAT, false, 0, 0)?;
        gl.draw_arrays(GL_TRIANGLE_FAN, 0, 4);
        Ok(())
    }
}

impl<S: CanvasSurface> AbstractRenderer for RendererGl<S> {
    type Image = S::Image;

    #[inline]
    fn base(&self) -> &RendererBase {
        &self.base
    }

    #[inline]
    fn base_mut(&mut self) -> &mut RendererBase {
        &mut self.base
    }

    #[inline]
    fn matrix(&mut self) -> &mut dyn TransformStack {
        &mut self.matrix
    }

    #[inline]
    fn canvas(&mut self) -> &mut dyn CanvasElement {
        &mut self.surface
    }

    fn on_resize(&mut self) {
        self.gl.viewport(0, 0, self.base.w as i32, self.base.h as i32);
    }

    fn draw_arrays(
        &mut self,
        verts: Option<&[f32]>,
        count: usize,
        usage: Option<u32>,
        scale: Option<(f32, f32)>,
    ) -> Result<()> {
        if count < 2 {
            return Ok(());
        }
        if let Some(verts) = verts {
            self.gl.bind_buffer(GL_ARRAY_BUFFER, Some(&self.buffers.default));
            self.gl.buffer_data(
                GL_ARRAY_BUFFER,
                bytemuck::cast_slice(verts),
                usage.unwrap_or(GL_STATIC_DRAW),
            );
        }
        if let Some((sx, sy)) = scale {
            self.matrix.scale(sx, sy);
        }
        self.prepare()?;
        let count = count as i32;
        self.fill_fan(count)?;
        self.stroke_lines(GL_LINE_LOOP, count)
    }

    fn draw_image(
        &mut self,
        image: &dyn AbstractImage<Self::Image>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<()> {
        self.matrix.save();
        let drawn = self.draw_textured(image, x, y, w, h);
        self.matrix.restore();
        drawn
    }

    fn background_color<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<&mut Self> {
        let rgba = Color::from_args(self.base.options.color_mode, args)?.rgba();
        self.clear_to(rgba.r / 255.0, rgba.g / 255.0, rgba.b / 255.0, rgba.a);
        Ok(self)
    }

    fn background_image(&mut self, image: &dyn AbstractImage<Self::Image>) -> Result<&mut Self> {
        if image.get().is_loaded() {
            let (w, h) = (image.dw(), image.dh());
            let (cx, cy) = self.base.background_anchor();
            let (x, y) = (cx - w * 0.5, cy - h * 0.5);
            self.draw_image(image, x, y, w, h)?;
        }
        Ok(self)
    }

    fn clear(&mut self) -> &mut Self {
        self.clear_to(0.0, 0.0, 0.0, 0.0);
        self
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<&mut Self> {
        let settings = self.base.settings;
        let x = align(x, w, settings.rect_align_x);
        let y = align(y, h, settings.rect_align_y);
        self.matrix.save();
        self.matrix.translate(x, y);
        self.matrix.scale(w, h);
        self.gl.bind_buffer(GL_ARRAY_BUFFER, Some(&self.buffers.square));
        let drawn = self.draw_arrays(None, QUAD_VERTICES.len(), None, None);
        self.matrix.restore();
        drawn?;
        Ok(self)
    }

    fn arc(&mut self, x: f32, y: f32, r: f32) -> Result<&mut Self> {
        self.polygon_scaled(x, y, r, r, ARC_SIDES, 0.0)
    }

    /// GL keeps no current path.
    fn fill_path(&mut self) -> Result<()> {
        Ok(())
    }

    fn stroke_path(&mut self, _close: bool) -> Result<()> {
        Ok(())
    }

    fn end_shape(&mut self) -> Result<&mut Self> {
        let count = self.base.vertices.len() / 2;
        if count == 0 {
            return Ok(self);
        }
        self.gl.bind_buffer(GL_ARRAY_BUFFER, Some(&self.buffers.default));
        self.gl.buffer_data(
            GL_ARRAY_BUFFER,
            bytemuck::cast_slice(&self.base.vertices[..]),
            GL_STATIC_DRAW,
        );
        self.prepare()?;

        let count = count as i32;
        let settings = self.base.settings;
        match self.base.shape_type {
            ShapeType::Points => {
                self.set_color(settings.stroke_color)?;
                self.gl.draw_arrays(GL_POINTS, 0, count);
            }
            ShapeType::Lines => self.stroke_lines(GL_LINES, count)?,
            ShapeType::Polygon => {
                self.fill_fan(count)?;
                let mode = if self.base.close_shape || settings.do_fill {
                    GL_LINE_LOOP
                } else {
                    GL_LINE_STRIP
                };
                self.stroke_lines(mode, count)?;
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::headless::{GlCall, GlFaults, HeadlessImage, HeadlessSurface};
    use crate::image::cut;
    use crate::math::Mat3;
    use crate::render::{BackgroundPosition, RectAlign};

    fn renderer_on(surface: HeadlessSurface, options: RendererOptions) -> RendererGl<HeadlessSurface> {
        match RendererGl::new(surface, options) {
            Ok(r) => r,
            Err(e) => panic!("GL renderer: {e}"),
        }
    }

    /// 600x400 renderer with its construction calls already drained.
    fn renderer() -> RendererGl<HeadlessSurface> {
        let mut r = renderer_on(HeadlessSurface::new(), RendererOptions::sized(600.0, 400.0));
        r.gl_mut().take();
        r
    }

    fn uploads<'a>(calls: &'a [GlCall], name: &str) -> Vec<&'a [f32]> {
        calls
            .iter()
            .filter_map(|c| match c {
                GlCall::Uniform { name: n, values, .. } if n == name => Some(values.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn construction_uploads_square_and_sets_state() {
        let r = renderer_on(
            HeadlessSurface::new(),
            RendererOptions { scale: 2.0, ..RendererOptions::sized(600.0, 400.0) },
        );
        let calls = r.gl().calls();
        assert!(calls.contains(&GlCall::BufferData {
            target: GL_ARRAY_BUFFER,
            data: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
            usage: GL_STATIC_DRAW,
        }));
        let corners: Vec<[f32; 2]> = QUAD_VERTICES.iter().map(|v| v.pos).collect();
        assert_eq!(corners, [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert!(calls.contains(&GlCall::Enable(GL_BLEND)));
        assert!(calls.contains(&GlCall::BlendFunc(GL_SRC_ALPHA, GL_ONE_MINUS_SRC_ALPHA)));
        assert_eq!(calls.last(), Some(&GlCall::Viewport(0, 0, 1200, 800)));
        assert_eq!(r.renderer_type(), RendererType::Gl);
        assert_eq!(r.surface().attributes().map(|a| a.antialias), Some(true));
    }

    #[test]
    fn blending_off_enables_depth_test() {
        let r = renderer_on(
            HeadlessSurface::new(),
            RendererOptions { blending: false, ..RendererOptions::sized(10.0, 10.0) },
        );
        let calls = r.gl().calls();
        assert!(calls.contains(&GlCall::Disable(GL_BLEND)));
        assert!(calls.contains(&GlCall::Enable(GL_DEPTH_TEST)));
        assert!(calls.contains(&GlCall::DepthFunc(GL_LEQUAL)));
    }

    #[test]
    fn missing_webgl_context_fails() {
        let surface = HeadlessSurface::new().without_webgl();
        let result = RendererGl::new(surface, RendererOptions::default());
        assert!(matches!(result, Err(RenderError::WebGlUnavailable)));
    }

    #[test]
    fn link_failure_carries_driver_log() {
        let faults = GlFaults { link: Some("varying mismatch".into()), validate: None };
        let surface = HeadlessSurface::new().with_gl_faults(faults);
        let result = RendererGl::new(surface, RendererOptions::default());
        assert!(matches!(result, Err(RenderError::ProgramLink { log }) if log == "varying mismatch"));
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_scales_unit_square() {
        let mut r = renderer();
        r.fill("red").unwrap();
        r.rect(10.0, 20.0, 30.0, 40.0).unwrap();

        let gl = r.gl();
        assert_eq!(gl.draws(), vec![(GL_TRIANGLE_FAN, 4), (GL_LINE_LOOP, 4)]);
        assert_eq!(
            gl.last_uniform("utransform"),
            Some(&[30.0, 0.0, 0.0, 0.0, 40.0, 0.0, 10.0, 20.0, 1.0][..])
        );
        assert_eq!(gl.last_uniform("ures"), Some(&[600.0, 400.0][..]));
        assert_eq!(
            uploads(gl.calls(), "ucolor"),
            vec![&[255.0, 0.0, 0.0, 1.0][..], &[0.0, 0.0, 0.0, 1.0][..]]
        );
        assert!(gl.calls().contains(&GlCall::LineWidth(2.0)));
        assert_eq!(r.transform_stack().matrix(), &Mat3::IDENTITY);
    }

    #[test]
    fn rect_honors_alignment() {
        let mut r = renderer();
        r.rect_align(RectAlign::Right);
        r.rect(100.0, 0.0, 20.0, 10.0).unwrap();
        let m = r.gl().last_uniform("utransform").map(<[f32]>::to_vec);
        assert_eq!(m.map(|m| (m[6], m[7])), Some((80.0, 0.0)));
    }

    #[test]
    fn disabled_fill_and_stroke_draw_nothing() {
        let mut r = renderer();
        r.no_fill().no_stroke();
        r.rect(0.0, 0.0, 5.0, 5.0).unwrap();
        assert!(r.gl().draws().is_empty());

        r.stroke(()).unwrap();
        r.fill(()).unwrap();
        assert!(r.gl().draws().is_empty());
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn polygon_uploads_cached_vertices() {
        let mut r = renderer();
        r.polygon(100.0, 100.0, 10.0, 4.0, None).unwrap();

        let gl = r.gl();
        let uploaded = gl.calls().iter().find_map(|c| match c {
            GlCall::BufferData { data, usage, .. } => Some((data.len(), *usage)),
            _ => None,
        });
        assert_eq!(uploaded, Some((10, GL_STATIC_DRAW)));
        assert_eq!(gl.draws(), vec![(GL_TRIANGLE_FAN, 5), (GL_LINE_LOOP, 5)]);

        let m = gl.last_uniform("utransform").map(<[f32]>::to_vec).unwrap();
        assert!(approx(m[6], 100.0) && approx(m[7], 100.0));
        // rotated by -90° and scaled by the radius
        assert!(approx(m[0], 0.0) && approx(m[1], -10.0));
        assert_eq!(r.transform_stack().matrix(), &Mat3::IDENTITY);
    }

    #[test]
    fn arc_is_a_24_gon() {
        let mut r = renderer();
        r.arc(50.0, 50.0, 5.0).unwrap();
        assert_eq!(r.gl().draws(), vec![(GL_TRIANGLE_FAN, 25), (GL_LINE_LOOP, 25)]);
    }

    #[test]
    fn custom_usage_is_forwarded() {
        let mut r = renderer();
        r.draw_arrays(Some(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]), 3, Some(GL_DYNAMIC_DRAW), None)
            .unwrap();
        assert!(r.gl().calls().iter().any(
            |c| matches!(c, GlCall::BufferData { usage, .. } if *usage == GL_DYNAMIC_DRAW)
        ));
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn end_shape_picks_primitive() {
        let mut r = renderer();
        r.begin_shape(None).vertex(0.0, 0.0).vertex(10.0, 0.0).vertex(10.0, 10.0);
        r.end_shape().unwrap();
        assert_eq!(r.gl_mut().draws(), vec![(GL_TRIANGLE_FAN, 3), (GL_LINE_LOOP, 3)]);
        r.gl_mut().take();

        r.no_fill();
        r.end_shape().unwrap();
        assert_eq!(r.gl().draws(), vec![(GL_LINE_STRIP, 3)]);
        r.gl_mut().take();

        r.close_shape().end_shape().unwrap();
        assert_eq!(r.gl().draws(), vec![(GL_LINE_LOOP, 3)]);
        r.gl_mut().take();

        r.begin_shape(Some(ShapeType::Points)).vertex(1.0, 1.0).vertex(2.0, 2.0);
        r.end_shape().unwrap();
        assert_eq!(r.gl().draws(), vec![(GL_POINTS, 2)]);
        r.gl_mut().take();

        r.begin_shape(Some(ShapeType::Lines))
            .vertex(0.0, 0.0)
            .vertex(1.0, 0.0)
            .vertex(0.0, 1.0)
            .vertex(1.0, 1.0);
        r.end_shape().unwrap();
        assert_eq!(r.gl().draws(), vec![(GL_LINES, 4)]);
    }

    #[test]
    fn empty_shape_is_a_no_op() {
        let mut r = renderer();
        r.begin_shape(None).end_shape().unwrap();
        assert!(r.gl().calls().is_empty());
    }

    // ── images ────────────────────────────────────────────────────────────

    #[test]
    fn image_crop_is_normalized_and_texture_cached() {
        let mut r = renderer();
        let sheet = HeadlessImage::loaded("sheet.png", 64, 32);
        let Ok(tile) = cut(&sheet, 16.0, 0.0, 16.0, 16.0) else { panic!() };

        r.image(&tile, 10.0, 10.0, None, None).unwrap();
        let calls = r.gl_mut().take();
        assert_eq!(calls[0], GlCall::ActiveTexture(GL_TEXTURE0));
        assert!(calls.contains(&GlCall::TexImage2d("sheet.png".into())));
        assert_eq!(uploads(&calls, "ucrop"), vec![&[0.25, 0.0, 0.25, 0.5][..]]);
        assert_eq!(uploads(&calls, "uimage"), vec![&[0.0][..]]);
        assert_eq!(
            uploads(&calls, "utransform"),
            vec![&[16.0, 0.0, 0.0, 0.0, 16.0, 0.0, 10.0, 10.0, 1.0][..]]
        );
        assert!(calls.contains(&GlCall::DrawArrays { mode: GL_TRIANGLE_FAN, first: 0, count: 4 }));

        r.image(&sheet, 0.0, 0.0, None, None).unwrap();
        let calls = r.gl_mut().take();
        assert!(!calls.iter().any(|c| matches!(c, GlCall::TexImage2d(_))));
        assert_eq!(uploads(&calls, "ucrop"), vec![&[0.0, 0.0, 1.0, 1.0][..]]);
        assert_eq!(r.transform_stack().matrix(), &Mat3::IDENTITY);
    }

    #[test]
    fn failed_upload_restores_transform() {
        let mut r = renderer();
        let broken = crate::image::Image::loaded(HeadlessImage::new("broken.png", 0, 0), 4.0, 4.0);
        assert!(matches!(r.image(&broken, 1.0, 1.0, None, None), Err(RenderError::Backend(_))));
        assert_eq!(r.transform_stack().matrix(), &Mat3::IDENTITY);
    }

    #[test]
    fn background_image_is_centred() {
        let mut r = renderer();
        let bg = HeadlessImage::loaded("bg.png", 100, 50);
        r.background_image(&bg).unwrap();
        let m = r.gl().last_uniform("utransform").map(<[f32]>::to_vec);
        assert_eq!(m.map(|m| (m[6], m[7])), Some((250.0, 175.0)));
    }

    #[test]
    fn background_image_centres_on_background_position() {
        let mut r = renderer();
        r.background_position_x(BackgroundPosition::Value(100.0)).unwrap();
        r.background_position_y(BackgroundPosition::Constant(RectAlign::Top)).unwrap();
        let bg = HeadlessImage::loaded("bg.png", 100, 50);
        r.background_image(&bg).unwrap();
        let m = r.gl().last_uniform("utransform").map(<[f32]>::to_vec);
        assert_eq!(m.map(|m| (m[6], m[7])), Some((50.0, -25.0)));
    }

    // ── background / clear ────────────────────────────────────────────────

    #[test]
    fn background_color_clears_with_normalized_channels() {
        let mut r = renderer();
        r.background_color((255.0_f32, 0.0_f32, 51.0_f32, 0.5_f32)).unwrap();
        assert_eq!(
            r.gl_mut().take(),
            vec![
                GlCall::ClearColor([1.0, 0.0, 0.2, 0.5]),
                GlCall::Clear(GL_COLOR_BUFFER_BIT | GL_DEPTH_BUFFER_BIT),
            ]
        );

        r.clear();
        assert_eq!(r.gl().calls()[0], GlCall::ClearColor([0.0, 0.0, 0.0, 0.0]));
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn camera_transform_reaches_the_shader() {
        let mut r = renderer();
        r.set_transform_camera(&(Vec2::new(-5.0, 10.0), 3.0_f32));
        r.rect(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(
            r.gl().last_uniform("utransform"),
            Some(&[3.0, 0.0, 0.0, 0.0, 3.0, 0.0, -15.0, 30.0, 1.0][..])
        );
    }

    #[test]
    fn over_restore_resets_to_identity() {
        let mut r = renderer();
        r.save().translate(4.0, 4.0).restore();
        r.translate(4.0, 4.0).restore();
        assert_eq!(r.transform_stack().matrix(), &Mat3::IDENTITY);
    }
}
