use std::f32::consts::TAU;

use crate::error::{RenderError, Result};
use crate::image::AbstractImage;
use crate::math::TransformStack;
use crate::paint::{Color, ColorArgs};
use crate::render::abstract_renderer::{AbstractRenderer, RendererBase};
use crate::render::options::{RendererOptions, RendererType};
use crate::render::polygon::PolygonCache;
use crate::render::settings::{align, RectAlign, ShapeType};
use crate::render::surface::{CanvasElement, CanvasSurface, Context2d};

/// Backend drawing through a [`Context2d`].
///
/// The context's native state stack is the transform stack. `rect`/`arc` fill
/// and stroke immediately unless a path was opened with
/// [`begin_path`](Self::begin_path), in which case they only extend it until
/// [`close_path`](Self::close_path).
pub struct Renderer2D<S: CanvasSurface> {
    base: RendererBase,
    surface: S,
    context: S::Context2d,
    path_open: bool,
}

impl<S: CanvasSurface> Renderer2D<S> {
    pub fn new(mut surface: S, options: RendererOptions) -> Result<Self> {
        let context = surface
            .context_2d(options.context_attributes())
            .ok_or(RenderError::Context2dUnavailable)?;
        let mut renderer = Self {
            base: RendererBase::new(options, RendererType::TwoD),
            surface,
            context,
            path_open: false,
        };
        let (w, h) = renderer.base.initial_size(&renderer.surface);
        renderer.resize(w, h);
        log::debug!("2D renderer created ({}x{})", renderer.base.w, renderer.base.h);
        Ok(renderer)
    }

    /// Shares `cache` instead of the renderer's own polygon cache.
    pub fn with_polygon_cache(mut self, cache: PolygonCache) -> Self {
        self.base.polygons = cache;
        self
    }

    #[inline]
    pub fn context(&self) -> &S::Context2d {
        &self.context
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut S::Context2d {
        &mut self.context
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Opens a compound path: following `rect`/`arc` calls only extend it.
    pub fn begin_path(&mut self) -> &mut Self {
        self.context.begin_path();
        self.path_open = true;
        self
    }

    /// Closes the compound path and paints it with the current settings.
    pub fn close_path(&mut self) -> Result<&mut Self> {
        self.context.close_path();
        self.path_open = false;
        self.paint_path(false)?;
        Ok(self)
    }

    #[inline]
    pub fn is_path_open(&self) -> bool {
        self.path_open
    }

    /// Fill and stroke per the current settings; the stroke closes when
    /// filling or when `close` is set.
    fn paint_path(&mut self, close: bool) -> Result<()> {
        let settings = self.base.settings;
        if settings.do_fill {
            self.fill_path()?;
        }
        if settings.do_stroke && settings.line_width > 0.0 {
            self.stroke_path(close || settings.do_fill)?;
        }
        Ok(())
    }

    fn trace(&mut self, verts: &[f32], count: usize, sx: f32, sy: f32) {
        let mut points = verts.chunks_exact(2).take(count);
        self.context.begin_path();
        if let Some(first) = points.next() {
            self.context.move_to(first[0] * sx, first[1] * sy);
        }
        for p in points {
            self.context.line_to(p[0] * sx, p[1] * sy);
        }
    }
}

impl<S: CanvasSurface> AbstractRenderer for Renderer2D<S> {
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
        &mut self.context
    }

    #[inline]
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
        let Some(verts) = verts else { return Ok(()) };
        if count < 2 {
            return Ok(());
        }
        let (sx, sy) = scale.unwrap_or((1.0, 1.0));
        self.trace(verts, count, sx, sy);
        self.paint_path(self.base.close_shape)
    }

    fn draw_image(
        &mut self,
        image: &dyn AbstractImage<Self::Image>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<()> {
        self.context.draw_image(
            image.get().source(),
            image.x(),
            image.y(),
            image.w(),
            image.h(),
            x,
            y,
            w,
            h,
        )
    }

    fn background_color<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<&mut Self> {
        let color = Color::from_args(self.base.options.color_mode, args)?;
        let scale = self.base.options.scale;
        self.context.save();
        self.context.set_fill_style(&color.to_string());
        self.context.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        self.context.fill_rect(0.0, 0.0, self.base.w, self.base.h);
        self.context.restore();
        Ok(self)
    }

    fn background_image(&mut self, image: &dyn AbstractImage<Self::Image>) -> Result<&mut Self> {
        let settings = &mut self.base.settings;
        let saved = (settings.rect_align_x, settings.rect_align_y);
        settings.rect_align_x = RectAlign::Center;
        settings.rect_align_y = RectAlign::Middle;
        let (cx, cy) = self.base.background_anchor();
        let drawn = self.image(image, cx, cy, None, None).map(|_| ());
        let settings = &mut self.base.settings;
        (settings.rect_align_x, settings.rect_align_y) = saved;
        drawn?;
        Ok(self)
    }

    fn clear(&mut self) -> &mut Self {
        self.context.clear_rect(0.0, 0.0, self.base.w, self.base.h);
        self
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<&mut Self> {
        let settings = self.base.settings;
        let x = align(x, w, settings.rect_align_x).floor();
        let y = align(y, h, settings.rect_align_y).floor();
        if self.path_open {
            self.context.rect(x, y, w, h);
        } else {
            self.context.begin_path();
            self.context.rect(x, y, w, h);
            if settings.do_fill {
                self.fill_path()?;
            }
            if settings.do_stroke {
                self.stroke_path(false)?;
            }
        }
        Ok(self)
    }

    fn arc(&mut self, x: f32, y: f32, r: f32) -> Result<&mut Self> {
        if self.path_open {
            self.context.arc(x, y, r, 0.0, TAU, false);
        } else {
            let settings = self.base.settings;
            self.context.begin_path();
            self.context.arc(x, y, r, 0.0, TAU, false);
            if settings.do_fill {
                self.fill_path()?;
            }
            if settings.do_stroke {
                self.stroke_path(true)?;
            }
        }
        Ok(self)
    }

    fn fill_path(&mut self) -> Result<()> {
        let style = self.base.settings.fill_color.to_string();
        self.context.set_fill_style(&style);
        self.context.fill();
        Ok(())
    }

    fn stroke_path(&mut self, close: bool) -> Result<()> {
        if close {
            self.context.close_path();
        }
        let settings = &self.base.settings;
        self.context.set_stroke_style(&settings.stroke_color.to_string());
        self.context.set_line_width(settings.line_width);
        self.context.stroke();
        Ok(())
    }

    fn end_shape(&mut self) -> Result<&mut Self> {
        let count = self.base.vertices.len() / 2;
        if count == 0 {
            return Ok(self);
        }
        let vertices = std::mem::take(&mut self.base.vertices);
        let drawn = self.draw_shape(&vertices, count);
        self.base.vertices = vertices;
        drawn?;
        Ok(self)
    }
}

impl<S: CanvasSurface> Renderer2D<S> {
    fn draw_shape(&mut self, vertices: &[f32], count: usize) -> Result<()> {
        let settings = self.base.settings;
        match self.base.shape_type {
            ShapeType::Points => {
                let size = settings.line_width.max(1.0);
                self.context.set_fill_style(&settings.stroke_color.to_string());
                for p in vertices.chunks_exact(2) {
                    self.context
                        .fill_rect(p[0] - size * 0.5, p[1] - size * 0.5, size, size);
                }
                Ok(())
            }
            ShapeType::Lines => {
                self.context.begin_path();
                for pair in vertices.chunks_exact(4) {
                    self.context.move_to(pair[0], pair[1]);
                    self.context.line_to(pair[2], pair[3]);
                }
                if settings.do_stroke && settings.line_width > 0.0 {
                    self.stroke_path(false)?;
                }
                Ok(())
            }
            ShapeType::Polygon => {
                self.trace(vertices, count, 1.0, 1.0);
                self.paint_path(self.base.close_shape)
            }
        }
    }
}
