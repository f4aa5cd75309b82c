use crate::image::Image;
use crate::render::{CanvasElement, CanvasSurface, ContextAttributes};

use super::gl::{GlFaults, HeadlessGl};
use super::recording2d::Recording2d;

/// Pixel source for headless surfaces: a label plus its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessImage {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

impl HeadlessImage {
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self { label: label.into(), width, height }
    }

    /// An already loaded [`Image`] around this source.
    pub fn loaded(label: impl Into<String>, width: u32, height: u32) -> Image<HeadlessImage> {
        Image::loaded(Self::new(label, width, height), width as f32, height as f32)
    }
}

/// In-memory canvas yielding [`Recording2d`] and [`HeadlessGl`] contexts.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    css_size: (f32, f32),
    backing_size: (u32, u32),
    parent: Option<(f32, f32)>,
    webgl: bool,
    faults: GlFaults,
    attributes: Option<ContextAttributes>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self {
            css_size: (0.0, 0.0),
            backing_size: (0, 0),
            parent: None,
            webgl: true,
            faults: GlFaults::default(),
            attributes: None,
        }
    }
}

impl HeadlessSurface {
    /// Detached surface with WebGL available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the surface to a parent of the given size.
    pub fn with_parent(mut self, w: f32, h: f32) -> Self {
        self.parent = Some((w, h));
        self
    }

    /// Makes `context_webgl` fail.
    pub fn without_webgl(mut self) -> Self {
        self.webgl = false;
        self
    }

    pub fn with_gl_faults(mut self, faults: GlFaults) -> Self {
        self.faults = faults;
        self
    }

    #[inline]
    pub fn css_size(&self) -> (f32, f32) {
        self.css_size
    }

    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        self.backing_size
    }

    /// Attributes of the last context request.
    #[inline]
    pub fn attributes(&self) -> Option<ContextAttributes> {
        self.attributes
    }
}

impl CanvasElement for HeadlessSurface {
    fn set_size(&mut self, css_w: f32, css_h: f32, backing_w: u32, backing_h: u32) {
        self.css_size = (css_w, css_h);
        self.backing_size = (backing_w, backing_h);
    }

    fn client_size(&self) -> (f32, f32) {
        self.css_size
    }

    fn parent_size(&self) -> Option<(f32, f32)> {
        self.parent
    }
}

impl CanvasSurface for HeadlessSurface {
    type Image = HeadlessImage;
    type Context2d = Recording2d;
    type Gl = HeadlessGl;

    fn context_2d(&mut self, attributes: ContextAttributes) -> Option<Recording2d> {
        self.attributes = Some(attributes);
        Some(Recording2d::new())
    }

    fn context_webgl(&mut self, attributes: ContextAttributes) -> Option<HeadlessGl> {
        self.attributes = Some(attributes);
        self.webgl.then(|| HeadlessGl::with_faults(self.faults.clone()))
    }
}
