//! Vellum engine crate.
//!
//! Immediate-mode 2D drawing over a canvas-2D or a WebGL context: colors,
//! transforms, push/pop drawing settings, polygons, images and shapes behind
//! one renderer contract.

pub mod camera;
pub mod coords;
pub mod error;
pub mod headless;
pub mod image;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod time;

#[cfg(feature = "web")]
pub mod web;

pub use error::{RenderError, Result};
