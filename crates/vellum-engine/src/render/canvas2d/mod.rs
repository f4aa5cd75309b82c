//! Canvas-2D backend.

mod renderer;

pub use renderer::Renderer2D;
