use crate::error::Result;
use crate::image::AbstractImage;
use crate::logging::warn_once;
use crate::math::TransformStack;
use crate::paint::ColorArgs;

use super::abstract_renderer::{AbstractRenderer, RendererBase};
use super::canvas2d::Renderer2D;
use super::gl::RendererGl;
use super::options::{Capabilities, RendererOptions, RendererType};
use super::surface::{CanvasElement, CanvasSurface};

const GL_FALLBACK: &str = "Cannot create WebGL context. Falling back to 2D.";

/// Either backend behind one type, as returned by [`create_renderer`].
pub enum Renderer<S: CanvasSurface> {
    TwoD(Renderer2D<S>),
    Gl(RendererGl<S>),
}

macro_rules! dispatch {
    ($self:ident, $r:ident => $body:expr) => {
        match $self {
            Renderer::TwoD($r) => $body,
            Renderer::Gl($r) => $body,
        }
    };
}

impl<S: CanvasSurface> AbstractRenderer for Renderer<S> {
    type Image = S::Image;

    fn base(&self) -> &RendererBase {
        dispatch!(self, r => r.base())
    }

    fn base_mut(&mut self) -> &mut RendererBase {
        dispatch!(self, r => r.base_mut())
    }

    fn matrix(&mut self) -> &mut dyn TransformStack {
        dispatch!(self, r => r.matrix())
    }

    fn canvas(&mut self) -> &mut dyn CanvasElement {
        dispatch!(self, r => r.canvas())
    }

    fn draw_arrays(
        &mut self,
        verts: Option<&[f32]>,
        count: usize,
        usage: Option<u32>,
        scale: Option<(f32, f32)>,
    ) -> Result<()> {
        dispatch!(self, r => r.draw_arrays(verts, count, usage, scale))
    }

    fn draw_image(
        &mut self,
        image: &dyn AbstractImage<Self::Image>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<()> {
        dispatch!(self, r => r.draw_image(image, x, y, w, h))
    }

    fn background_color<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<&mut Self> {
        let args = args.into();
        dispatch!(self, r => r.background_color(args).map(|_| ()))?;
        Ok(self)
    }

    fn background_image(&mut self, image: &dyn AbstractImage<Self::Image>) -> Result<&mut Self> {
        dispatch!(self, r => r.background_image(image).map(|_| ()))?;
        Ok(self)
    }

    fn clear(&mut self) -> &mut Self {
        dispatch!(self, r => { r.clear(); });
        self
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<&mut Self> {
        dispatch!(self, r => r.rect(x, y, w, h).map(|_| ()))?;
        Ok(self)
    }

    fn arc(&mut self, x: f32, y: f32, r: f32) -> Result<&mut Self> {
        dispatch!(self, b => b.arc(x, y, r).map(|_| ()))?;
        Ok(self)
    }

    fn fill_path(&mut self) -> Result<()> {
        dispatch!(self, r => r.fill_path())
    }

    fn stroke_path(&mut self, close: bool) -> Result<()> {
        dispatch!(self, r => r.stroke_path(close))
    }

    fn end_shape(&mut self) -> Result<&mut Self> {
        dispatch!(self, r => r.end_shape().map(|_| ()))?;
        Ok(self)
    }

    fn on_resize(&mut self) {
        dispatch!(self, r => r.on_resize())
    }
}

impl<S: CanvasSurface> Renderer<S> {
    pub fn as_2d(&self) -> Option<&Renderer2D<S>> {
        match self {
            Renderer::TwoD(r) => Some(r),
            Renderer::Gl(_) => None,
        }
    }

    pub fn as_gl(&self) -> Option<&RendererGl<S>> {
        match self {
            Renderer::Gl(r) => Some(r),
            Renderer::TwoD(_) => None,
        }
    }
}

impl<S: CanvasSurface> From<Renderer2D<S>> for Renderer<S> {
    fn from(r: Renderer2D<S>) -> Self {
        Renderer::TwoD(r)
    }
}

impl<S: CanvasSurface> From<RendererGl<S>> for Renderer<S> {
    fn from(r: RendererGl<S>) -> Self {
        Renderer::Gl(r)
    }
}

/// Builds the backend named by `options.renderer_type`.
///
/// `Auto` resolves through `caps`. A GL request on a platform without WebGL
/// falls back to 2D with a one-time warning.
pub fn create_renderer<S: CanvasSurface>(
    surface: S,
    options: RendererOptions,
    caps: Capabilities,
) -> Result<Renderer<S>> {
    let kind = match options.renderer_type {
        RendererType::Auto => caps.preferred_type(),
        kind => kind,
    };

    if kind == RendererType::Gl {
        if caps.webgl {
            return RendererGl::new(surface, options).map(Renderer::Gl);
        }
        warn_once(GL_FALLBACK);
    }

    Renderer2D::new(surface, options).map(Renderer::TwoD)
}
