//! Vector types shared by the camera, the renderers and user code.
//!
//! Canonical CPU space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! The active transform maps these coordinates to device pixels.

mod vec2;
mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;
