use std::f32::consts::FRAC_PI_2;

use crate::camera::CameraLike;
use crate::error::{RenderError, Result};
use crate::image::AbstractImage;
use crate::math::TransformStack;
use crate::paint::{Color, ColorArgs, ColorMode, Hsla, Rgba};

use super::options::{RendererOptions, RendererType};
use super::polygon::{round_sides, PolygonCache};
use super::settings::{
    align, BackgroundPosition, DrawingSettings, RectAlign, SettingsStack, ShapeType,
};
use super::surface::{CanvasElement, ElementSize};

/// Fallback size when neither the options nor a parent element give one.
pub const DEFAULT_SIZE: (f32, f32) = (600.0, 400.0);

/// State shared by every backend.
#[derive(Debug, Clone)]
pub struct RendererBase {
    pub settings: DrawingSettings,
    pub stack: SettingsStack,
    /// Shape in progress as flat `[x0, y0, ..]`, floored on insert.
    pub vertices: Vec<f32>,
    pub shape_type: ShapeType,
    pub close_shape: bool,
    /// Backing-store size in device pixels.
    pub w: f32,
    pub h: f32,
    /// Where `background_image` centres the image; `None` is the surface centre.
    pub background_position: (Option<f32>, Option<f32>),
    pub options: RendererOptions,
    pub polygons: PolygonCache,
    kind: RendererType,
}

impl RendererBase {
    pub fn new(options: RendererOptions, kind: RendererType) -> Self {
        Self {
            settings: DrawingSettings::defaults(options.color_mode),
            stack: SettingsStack::new(),
            vertices: Vec::new(),
            shape_type: ShapeType::default(),
            close_shape: false,
            w: 0.0,
            h: 0.0,
            background_position: (None, None),
            options,
            polygons: PolygonCache::new(),
            kind,
        }
    }

    #[inline]
    pub fn kind(&self) -> RendererType {
        self.kind
    }

    /// Resolved background anchor in device pixels.
    pub fn background_anchor(&self) -> (f32, f32) {
        let (x, y) = self.background_position;
        (x.unwrap_or(self.w * 0.5), y.unwrap_or(self.h * 0.5))
    }

    /// Size applied at construction: explicit options, the parent element, or 600x400.
    pub fn initial_size(&self, canvas: &dyn CanvasElement) -> (f32, f32) {
        let o = &self.options;
        if o.w.is_some() || o.h.is_some() {
            (o.w.unwrap_or(0.0), o.h.unwrap_or(0.0))
        } else {
            canvas.parent_size().unwrap_or(DEFAULT_SIZE)
        }
    }

    /// Replaces the stored color, or mutates it in place when the representation already matches.
    fn set_color(slot: &mut Color, mode: ColorMode, args: ColorArgs<'_>) -> Result<()> {
        if matches!(args, ColorArgs::Str(_)) || slot.mode() != mode {
            *slot = Color::from_args(mode, args)?;
        } else {
            slot.set(args)?;
        }
        Ok(())
    }
}

// ── call shapes ───────────────────────────────────────────────────────────

/// Argument of `fill`/`stroke`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintArg<'a> {
    /// Paint the current path now with the stored color.
    Apply,
    /// Enable or disable painting without touching the color.
    Toggle(bool),
    /// Set the color (and enable painting).
    Color(ColorArgs<'a>),
}

impl From<()> for PaintArg<'_> {
    fn from(_: ()) -> Self {
        PaintArg::Apply
    }
}

impl From<bool> for PaintArg<'_> {
    fn from(v: bool) -> Self {
        PaintArg::Toggle(v)
    }
}

impl<'a> From<ColorArgs<'a>> for PaintArg<'a> {
    fn from(args: ColorArgs<'a>) -> Self {
        PaintArg::Color(args)
    }
}

impl<'a> From<&'a str> for PaintArg<'a> {
    fn from(s: &'a str) -> Self {
        PaintArg::Color(ColorArgs::Str(s))
    }
}

impl<'a> From<&'a String> for PaintArg<'a> {
    fn from(s: &'a String) -> Self {
        PaintArg::Color(ColorArgs::Str(s.as_str()))
    }
}

macro_rules! paint_arg_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PaintArg<'_> {
                fn from(v: $ty) -> Self {
                    PaintArg::Color(v.into())
                }
            }
        )*
    };
}

paint_arg_from!(f32, (f32, f32), (f32, f32, f32), (f32, f32, f32, f32), Color, Rgba, Hsla);

/// Argument of [`AbstractRenderer::background`].
pub enum Background<'a, I> {
    Color(ColorArgs<'a>),
    Image(&'a dyn AbstractImage<I>),
}

// ── contract ──────────────────────────────────────────────────────────────

/// Operations common to every backend.
///
/// A backend supplies the primitives (`draw_arrays`, `draw_image`,
/// `background_color`, `background_image`, `clear`, `rect`, `arc`,
/// `fill_path`, `stroke_path`) and access to its state; everything else is
/// provided here in terms of those.
pub trait AbstractRenderer {
    /// Platform pixel source of drawable images.
    type Image;

    fn base(&self) -> &RendererBase;
    fn base_mut(&mut self) -> &mut RendererBase;
    /// The transform stack this backend draws with.
    fn matrix(&mut self) -> &mut dyn TransformStack;
    fn canvas(&mut self) -> &mut dyn CanvasElement;

    // ── primitives ────────────────────────────────────────────────────────

    /// Paints `count` vertices of `verts` (local units) as one closed shape,
    /// scaled by `scale` and transformed by the current matrix.
    ///
    /// `verts = None` reuses previously uploaded data where the backend
    /// supports it. `usage` is a GL buffer usage hint.
    fn draw_arrays(
        &mut self,
        verts: Option<&[f32]>,
        count: usize,
        usage: Option<u32>,
        scale: Option<(f32, f32)>,
    ) -> Result<()>;

    /// Draws the crop of `image` into the destination rectangle. Callers check `loaded`.
    fn draw_image(
        &mut self,
        image: &dyn AbstractImage<Self::Image>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<()>;

    /// Fills the whole surface, ignoring the current transform.
    fn background_color<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<&mut Self>;

    /// Draws `image` centred on the surface.
    fn background_image(&mut self, image: &dyn AbstractImage<Self::Image>) -> Result<&mut Self>;

    /// Clears the surface to transparent.
    fn clear(&mut self) -> &mut Self;

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<&mut Self>;

    fn arc(&mut self, x: f32, y: f32, r: f32) -> Result<&mut Self>;

    /// Fills the current path with the fill color.
    fn fill_path(&mut self) -> Result<()>;

    /// Strokes the current path with the stroke color, closing it first when `close`.
    fn stroke_path(&mut self, close: bool) -> Result<()>;

    /// Rasterizes the shape collected since `begin_shape`.
    fn end_shape(&mut self) -> Result<&mut Self> {
        Err(RenderError::NotImplemented("end_shape"))
    }

    /// Called after the backing size changed.
    fn on_resize(&mut self) {}

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    fn renderer_type(&self) -> RendererType {
        self.base().kind()
    }

    #[inline]
    fn settings(&self) -> &DrawingSettings {
        &self.base().settings
    }

    /// Backing-store width in device pixels.
    #[inline]
    fn w(&self) -> f32 {
        self.base().w
    }

    #[inline]
    fn h(&self) -> f32 {
        self.base().h
    }

    /// Snapshots the drawing settings.
    fn push(&mut self) -> &mut Self {
        let base = self.base_mut();
        base.stack.push(&base.settings);
        self
    }

    /// Restores the last snapshot, or the defaults when nothing was pushed.
    fn pop(&mut self) -> &mut Self {
        let base = self.base_mut();
        let mode = base.options.color_mode;
        base.stack.pop(&mut base.settings, mode);
        self
    }

    fn line_width(&mut self, width: f32) -> &mut Self {
        self.base_mut().settings.line_width = width;
        self
    }

    /// Sets the horizontal or vertical alignment, depending on `value`.
    fn rect_align(&mut self, value: RectAlign) -> &mut Self {
        let settings = &mut self.base_mut().settings;
        if value.is_horizontal() {
            settings.rect_align_x = value;
        } else {
            settings.rect_align_y = value;
        }
        self
    }

    fn fill<'a>(&mut self, arg: impl Into<PaintArg<'a>>) -> Result<&mut Self> {
        match arg.into() {
            PaintArg::Apply => self.fill_path()?,
            PaintArg::Toggle(on) => self.base_mut().settings.do_fill = on,
            PaintArg::Color(args) => {
                let base = self.base_mut();
                let mode = base.options.color_mode;
                RendererBase::set_color(&mut base.settings.fill_color, mode, args)?;
                base.settings.do_fill = true;
            }
        }
        Ok(self)
    }

    fn stroke<'a>(&mut self, arg: impl Into<PaintArg<'a>>) -> Result<&mut Self> {
        match arg.into() {
            PaintArg::Apply => self.stroke_path(false)?,
            PaintArg::Toggle(on) => self.base_mut().settings.do_stroke = on,
            PaintArg::Color(args) => {
                let base = self.base_mut();
                let mode = base.options.color_mode;
                RendererBase::set_color(&mut base.settings.stroke_color, mode, args)?;
                base.settings.do_stroke = true;
            }
        }
        Ok(self)
    }

    fn no_fill(&mut self) -> &mut Self {
        self.base_mut().settings.do_fill = false;
        self
    }

    fn no_stroke(&mut self) -> &mut Self {
        self.base_mut().settings.do_stroke = false;
        self
    }

    // ── size ──────────────────────────────────────────────────────────────

    /// Sets the CSS size to `w`x`h` and the backing store to that times the pixel density.
    fn resize(&mut self, w: f32, h: f32) -> &mut Self {
        let scale = self.base().options.scale;
        let backing_w = (w * scale).floor().max(0.0);
        let backing_h = (h * scale).floor().max(0.0);
        self.canvas()
            .set_size(w, h, backing_w as u32, backing_h as u32);
        let base = self.base_mut();
        base.w = backing_w;
        base.h = backing_h;
        self.on_resize();
        self
    }

    fn resize_to(&mut self, element: &dyn ElementSize) -> &mut Self {
        let (w, h) = element.element_size();
        self.resize(w, h)
    }

    /// Re-applies the canvas's own CSS size (after a pixel density change).
    fn rescale(&mut self) -> &mut Self {
        let (w, h) = self.canvas().client_size();
        self.resize(w, h)
    }

    // ── transform ─────────────────────────────────────────────────────────

    fn save(&mut self) -> &mut Self {
        self.matrix().save();
        self
    }

    fn restore(&mut self) -> &mut Self {
        self.matrix().restore();
        self
    }

    fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.matrix().translate(x, y);
        self
    }

    fn rotate(&mut self, angle: f32) -> &mut Self {
        self.matrix().rotate(angle);
        self
    }

    fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        self.matrix().scale(x, y);
        self
    }

    fn transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) -> &mut Self {
        self.matrix().transform(m11, m12, m21, m22, dx, dy);
        self
    }

    fn set_transform(
        &mut self,
        m11: f32,
        m12: f32,
        m21: f32,
        m22: f32,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        self.matrix().set_transform(m11, m12, m21, m22, dx, dy);
        self
    }

    /// Absolute transform from a camera: uniform `zoom`, translated by `position * zoom`.
    fn set_transform_camera(&mut self, camera: &dyn CameraLike) -> &mut Self {
        let zoom = camera.zoom();
        let p = camera.position();
        self.matrix().set_transform(zoom, 0.0, 0.0, zoom, p.x * zoom, p.y * zoom);
        self
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Regular polygon of radius `r` centred at `x, y`.
    ///
    /// Fractional `sides` are floored to two decimals. Without `angle` the
    /// first vertex points up; `angle` honors the `degrees` option.
    fn polygon(
        &mut self,
        x: f32,
        y: f32,
        r: f32,
        sides: f32,
        angle: Option<f32>,
    ) -> Result<&mut Self> {
        let sides = round_sides(sides);
        let angle = match angle {
            Some(a) => self.base().options.angle_mode().to_radians(a),
            None => -FRAC_PI_2,
        };
        self.polygon_scaled(x, y, r, r, sides, angle)
    }

    /// Polygon with separate radii; `angle` is in radians.
    fn polygon_scaled(
        &mut self,
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
        sides: f32,
        angle: f32,
    ) -> Result<&mut Self> {
        let verts = self.base().polygons.get(sides);
        let matrix = self.matrix();
        matrix.save();
        matrix.translate(x, y);
        matrix.rotate(angle);
        let drawn = self.draw_arrays(Some(&verts[..]), verts.len() / 2, None, Some((rx, ry)));
        self.matrix().restore();
        drawn?;
        Ok(self)
    }

    /// Draws `image` at the aligned `x, y`; `w`/`h` default to its display size.
    ///
    /// Unloaded images are skipped silently.
    fn image(
        &mut self,
        image: &dyn AbstractImage<Self::Image>,
        x: f32,
        y: f32,
        w: Option<f32>,
        h: Option<f32>,
    ) -> Result<&mut Self> {
        if image.get().is_loaded() {
            let w = w.unwrap_or_else(|| image.dw());
            let h = h.unwrap_or_else(|| image.dh());
            let settings = self.base().settings;
            let x = align(x, w, settings.rect_align_x);
            let y = align(y, h, settings.rect_align_y);
            self.draw_image(image, x, y, w, h)?;
        }
        Ok(self)
    }

    /// Starts a new shape; `None` draws an outline through every vertex.
    fn begin_shape(&mut self, shape_type: Option<ShapeType>) -> &mut Self {
        let base = self.base_mut();
        base.vertices.clear();
        base.shape_type = shape_type.unwrap_or_default();
        base.close_shape = false;
        self
    }

    fn vertex(&mut self, x: f32, y: f32) -> &mut Self {
        self.base_mut().vertices.extend([x.floor(), y.floor()]);
        self
    }

    /// Marks the shape in progress as closed.
    fn close_shape(&mut self) -> &mut Self {
        self.base_mut().close_shape = true;
        self
    }

    // ── background ────────────────────────────────────────────────────────

    fn background(&mut self, arg: Background<'_, Self::Image>) -> Result<&mut Self> {
        match arg {
            Background::Color(args) => self.background_color(args),
            Background::Image(image) => self.background_image(image),
        }
    }

    fn background_position_x(&mut self, value: BackgroundPosition) -> Result<&mut Self> {
        let x = value.resolve_x(self.base().w)?;
        self.base_mut().background_position.0 = Some(x);
        Ok(self)
    }

    fn background_position_y(&mut self, value: BackgroundPosition) -> Result<&mut Self> {
        let y = value.resolve_y(self.base().h)?;
        self.base_mut().background_position.1 = Some(y);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, CameraOptions};
    use crate::coords::Vec2;
    use crate::headless::{HeadlessImage, HeadlessSurface};
    use crate::math::{Mat3, Transform};

    /// Backend that only records `draw_arrays` input and the matrix it ran under.
    struct Stub {
        base: RendererBase,
        matrix: Transform,
        surface: HeadlessSurface,
        drawn: Vec<(Vec<f32>, Mat3)>,
        images: Vec<[f32; 4]>,
        fail_draws: bool,
        resized: u32,
    }

    impl Stub {
        fn new(options: RendererOptions) -> Self {
            let mut stub = Stub {
                base: RendererBase::new(options, RendererType::TwoD),
                matrix: Transform::new(),
                surface: HeadlessSurface::new(),
                drawn: Vec::new(),
                images: Vec::new(),
                fail_draws: false,
                resized: 0,
            };
            let (w, h) = stub.base.initial_size(&stub.surface);
            stub.resize(w, h);
            stub
        }
    }

    impl AbstractRenderer for Stub {
        type Image = HeadlessImage;

        fn base(&self) -> &RendererBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut RendererBase {
            &mut self.base
        }

        fn matrix(&mut self) -> &mut dyn TransformStack {
            &mut self.matrix
        }

        fn canvas(&mut self) -> &mut dyn CanvasElement {
            &mut self.surface
        }

        fn draw_arrays(
            &mut self,
            verts: Option<&[f32]>,
            count: usize,
            _usage: Option<u32>,
            scale: Option<(f32, f32)>,
        ) -> Result<()> {
            if self.fail_draws {
                return Err(RenderError::Backend("lost context".into()));
            }
            let mut matrix = *self.matrix.matrix();
            if let Some((sx, sy)) = scale {
                matrix.scale(sx, sy);
            }
            let verts = verts.map(|v| v[..count * 2].to_vec()).unwrap_or_default();
            self.drawn.push((verts, matrix));
            Ok(())
        }

        fn draw_image(
            &mut self,
            _image: &dyn AbstractImage<HeadlessImage>,
            x: f32,
            y: f32,
            w: f32,
            h: f32,
        ) -> Result<()> {
            self.images.push([x, y, w, h]);
            Ok(())
        }

        fn background_color<'a>(&mut self, _args: impl Into<ColorArgs<'a>>) -> Result<&mut Self> {
            Ok(self)
        }

        fn background_image(&mut self, _image: &dyn AbstractImage<HeadlessImage>) -> Result<&mut Self> {
            Ok(self)
        }

        fn clear(&mut self) -> &mut Self {
            self
        }

        fn rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) -> Result<&mut Self> {
            Ok(self)
        }

        fn arc(&mut self, _x: f32, _y: f32, _r: f32) -> Result<&mut Self> {
            Ok(self)
        }

        fn fill_path(&mut self) -> Result<()> {
            Ok(())
        }

        fn stroke_path(&mut self, _close: bool) -> Result<()> {
            Ok(())
        }

        fn on_resize(&mut self) {
            self.resized += 1;
        }
    }

    fn stub() -> Stub {
        Stub::new(RendererOptions::sized(200.0, 100.0))
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn resize_floors_backing_size_and_notifies_backend() {
        let mut r = Stub::new(RendererOptions { scale: 1.5, ..RendererOptions::sized(101.0, 51.0) });
        assert_eq!((r.w(), r.h()), (151.0, 76.0));
        assert_eq!(r.surface.backing_size(), (151, 76));
        assert_eq!(r.resized, 1);

        r.resize_to(&(10.0_f32, 10.0_f32));
        assert_eq!(r.surface.css_size(), (10.0, 10.0));
        assert_eq!(r.resized, 2);
    }

    #[test]
    fn single_dimension_leaves_the_other_at_zero() {
        let r = Stub::new(RendererOptions { w: Some(50.0), ..RendererOptions::default() });
        assert_eq!((r.w(), r.h()), (50.0, 0.0));
    }

    // ── fill / stroke ─────────────────────────────────────────────────────

    #[test]
    fn string_colors_replace_and_numbers_mutate() {
        let mut r = stub();
        r.stroke(Hsla::new(120.0, 50.0, 50.0, 1.0)).unwrap();
        assert_eq!(r.settings().stroke_color.mode(), ColorMode::Rgba);

        let keep = r.settings().fill_color;
        r.fill(true).unwrap();
        assert_eq!(r.settings().fill_color, keep);

        r.fill(&String::from("#0f0")).unwrap();
        assert_eq!(r.settings().fill_color.rgba(), Rgba::new(0.0, 255.0, 0.0, 1.0));
        r.fill(128.0_f32).unwrap();
        assert_eq!(r.settings().fill_color.rgba(), Rgba::new(128.0, 128.0, 128.0, 1.0));
    }

    #[test]
    fn bad_color_leaves_settings_untouched() {
        let mut r = stub();
        r.no_stroke();
        let before = *r.settings();
        assert_eq!(
            r.stroke("rgb(1,2)").map(|_| ()),
            Err(RenderError::ColorSyntax("rgb(1,2)".into()))
        );
        assert_eq!(*r.settings(), before);
    }

    #[test]
    fn pop_without_push_restores_defaults() {
        let mut r = stub();
        r.line_width(9.0).rect_align(RectAlign::Middle).no_fill();
        r.pop();
        assert_eq!(*r.settings(), DrawingSettings::defaults(ColorMode::Rgba));
    }

    #[test]
    fn nested_push_pop() {
        let mut r = stub();
        r.line_width(3.0).push();
        r.line_width(5.0).push();
        r.line_width(7.0);
        r.pop();
        assert_eq!(r.settings().line_width, 5.0);
        r.pop();
        assert_eq!(r.settings().line_width, 3.0);
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn camera_transform_replaces_current_matrix() {
        let mut r = stub();
        r.rotate(1.0).translate(3.0, 3.0);

        let mut camera = Camera::new(200.0, 100.0, CameraOptions::default());
        camera.look_at(Vec2::new(50.0, 25.0)).update();
        r.set_transform_camera(&camera);
        // looking at (50, 25) with the centre offset puts it at (100, 50)
        assert_eq!(r.matrix.matrix().apply(50.0, 25.0), (100.0, 50.0));
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn polygon_draws_under_local_transform() {
        let mut r = stub();
        r.polygon(20.0, 30.0, 10.0, 3.0, None).unwrap();

        let (verts, matrix) = &r.drawn[0];
        assert_eq!(verts.len(), 8);
        let (x, y) = matrix.apply(verts[0], verts[1]);
        // first vertex points up
        assert!(approx(x, 20.0) && approx(y, 20.0));
        assert_eq!(*r.matrix.matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn polygon_restores_transform_when_backend_fails() {
        let mut r = stub();
        r.translate(1.0, 1.0);
        let before = *r.matrix.matrix();
        r.fail_draws = true;
        assert!(r.polygon(0.0, 0.0, 5.0, 6.0, None).is_err());
        assert_eq!(*r.matrix.matrix(), before);
    }

    #[test]
    fn fractional_sides_are_rounded_for_caching() {
        let mut r = stub();
        r.polygon(0.0, 0.0, 1.0, 4.999, None).unwrap();
        r.polygon(0.0, 0.0, 1.0, 4.991, None).unwrap();
        assert_eq!(r.base().polygons.len(), 1);
        assert_eq!(r.drawn[0].0, r.drawn[1].0);
    }

    // ── images ────────────────────────────────────────────────────────────

    #[test]
    fn image_size_defaults_and_alignment() {
        let mut r = stub();
        let img = HeadlessImage::loaded("a.png", 40, 20);
        r.image(&img, 0.0, 0.0, None, None).unwrap();
        r.rect_align(RectAlign::Right).rect_align(RectAlign::Middle);
        r.image(&img, 100.0, 50.0, Some(10.0), None).unwrap();
        assert_eq!(r.images, vec![[0.0, 0.0, 40.0, 20.0], [90.0, 40.0, 10.0, 20.0]]);
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn end_shape_is_backend_specific() {
        let mut r = stub();
        r.begin_shape(Some(ShapeType::Points)).vertex(1.0, 1.0).close_shape();
        assert!(r.base().close_shape);
        assert_eq!(r.end_shape().map(|_| ()), Err(RenderError::NotImplemented("end_shape")));

        r.begin_shape(None);
        assert!(!r.base().close_shape);
        assert_eq!(r.base().shape_type, ShapeType::Polygon);
    }

    // ── background ────────────────────────────────────────────────────────

    #[test]
    fn background_position_kinds() {
        let mut r = stub();
        r.background_position_x(BackgroundPosition::Value(12.0)).unwrap();
        r.background_position_y(BackgroundPosition::Constant(RectAlign::Bottom)).unwrap();
        assert_eq!(r.base().background_anchor(), (12.0, 100.0));
        // y no longer clobbers x
        r.background_position_y(BackgroundPosition::Percentages(0.5)).unwrap();
        assert_eq!(r.base().background_anchor(), (12.0, 50.0));
        assert_eq!(
            r.background_position_x(BackgroundPosition::Constant(RectAlign::Top)).map(|_| ()),
            Err(RenderError::UnknownBackgroundPosition { known: "LEFT, CENTER, RIGHT" })
        );
    }
}
