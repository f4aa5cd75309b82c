//! Browser bindings (cargo feature `web`).
//!
//! Implements the render seams for `web-sys` types so the backends can draw
//! into an `HtmlCanvasElement`, and probes the platform for
//! [`Capabilities`](crate::render::Capabilities).

mod canvas;
mod capabilities;
mod context2d;
mod gl;
mod image;

pub use canvas::WebCanvas;
pub use capabilities::detect_capabilities;
pub use context2d::WebContext2d;
pub use gl::WebGl;
pub use image::load_image;

use wasm_bindgen::JsValue;

use crate::error::RenderError;

/// Logs a failed JS call that has no error channel in the seam it serves.
fn report(result: Result<(), JsValue>, call: &str) {
    if let Err(e) = result {
        log::warn!("{call} failed: {e:?}");
    }
}

fn backend_error(e: JsValue) -> RenderError {
    RenderError::Backend(format!("{e:?}"))
}
