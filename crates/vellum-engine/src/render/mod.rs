//! Immediate-mode renderers.
//!
//! [`AbstractRenderer`] holds everything that does not depend on the backend
//! (settings stack, polygons, images, shapes, sizing). [`Renderer2D`] draws
//! through a canvas-2D context, [`RendererGl`] through WebGL.
//!
//! Convention:
//! - Coordinates are device pixels of the backing store (top-left origin, +Y down).
//! - The current transform applies to every primitive except backgrounds.

mod abstract_renderer;
pub mod canvas2d;
mod create;
pub mod gl;
mod options;
mod polygon;
mod settings;
mod surface;

pub use abstract_renderer::{AbstractRenderer, Background, PaintArg, RendererBase, DEFAULT_SIZE};
pub use canvas2d::Renderer2D;
pub use create::{create_renderer, Renderer};
pub use gl::RendererGl;
pub use options::{Capabilities, ContextAttributes, RendererOptions, RendererType};
pub use polygon::{create_polygon, round_sides, PolygonCache};
pub use settings::{
    align, BackgroundPosition, DrawingSettings, RectAlign, SettingsStack, ShapeType,
};
pub use surface::{CanvasElement, CanvasSurface, Context2d, ElementSize};
