//! Platform seams consumed by the backends.
//!
//! A [`CanvasSurface`] is the canvas-like element a renderer draws into. It
//! hands out at most one kind of context: a [`Context2d`] for the 2D backend or
//! a [`GlContext`] for the GL backend.

use crate::error::Result;
use crate::math::TransformStack;

use super::gl::GlContext;
use super::options::ContextAttributes;

/// The subset of `CanvasRenderingContext2D` used by [`Renderer2D`](super::Renderer2D).
///
/// The context's own state stack carries the transform, so the trait extends
/// [`TransformStack`].
pub trait Context2d: TransformStack {
    /// Platform pixel source accepted by `draw_image`.
    type Image;

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn arc(&mut self, x: f32, y: f32, r: f32, start: f32, end: f32, anticlockwise: bool);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// CSS color string.
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f32);

    /// Copies the source rectangle of `image` into the destination rectangle.
    #[allow(clippy::too_many_arguments)]
    fn draw_image(
        &mut self,
        image: &Self::Image,
        sx: f32,
        sy: f32,
        sw: f32,
        sh: f32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) -> Result<()>;
}

/// Anything with a layout size a renderer can be fitted to.
pub trait ElementSize {
    /// Client width and height in CSS pixels.
    fn element_size(&self) -> (f32, f32);
}

impl ElementSize for (f32, f32) {
    fn element_size(&self) -> (f32, f32) {
        *self
    }
}

/// Size management of the canvas element itself.
pub trait CanvasElement {
    /// Applies the CSS size and the backing-store size.
    fn set_size(&mut self, css_w: f32, css_h: f32, backing_w: u32, backing_h: u32);
    /// Current CSS size of the element.
    fn client_size(&self) -> (f32, f32);
    /// Size of the containing element, if the canvas is attached.
    fn parent_size(&self) -> Option<(f32, f32)>;
}

/// A canvas-like surface yielding a 2D or a WebGL context.
pub trait CanvasSurface: CanvasElement {
    /// Pixel source shared by both context kinds.
    type Image;
    type Context2d: Context2d<Image = Self::Image>;
    type Gl: GlContext<ImageSource = Self::Image>;

    fn context_2d(&mut self, attributes: ContextAttributes) -> Option<Self::Context2d>;
    fn context_webgl(&mut self, attributes: ContextAttributes) -> Option<Self::Gl>;
}
