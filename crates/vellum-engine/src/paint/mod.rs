//! Color model shared by the renderers.
//!
//! Scope:
//! - RGBA (0–255 channels) and HSLA (degrees / percent) representations
//! - conversion between them and a few perceptual metrics
//! - parsing of CSS-style color strings

mod color;
mod hsla;
mod parse;
mod rgba;

pub use color::{color, Color, ColorArgs, ColorMode};
pub use hsla::Hsla;
pub use parse::{parse, ColorParser};
pub use rgba::Rgba;
