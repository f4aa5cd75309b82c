//! Headless backends.
//!
//! [`HeadlessSurface`] stands in for a canvas element. Its contexts record
//! every call instead of rasterizing, so renderer behavior can be asserted as
//! a command stream (tests, the studio binary, server-side dry runs).

mod gl;
mod recording2d;
mod surface;

pub use gl::{GlCall, GlFaults, HeadlessGl, HeadlessLocation};
pub use recording2d::{Cmd2d, Recording2d};
pub use surface::{HeadlessImage, HeadlessSurface};
