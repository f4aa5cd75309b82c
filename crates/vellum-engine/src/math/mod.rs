//! Affine math used by the renderers.
//!
//! `Mat3` holds the raw matrix operations, `Transform` layers the
//! save/restore stack on top, and `TransformStack` is the seam both
//! backends drive.

mod mat3;
mod transform;
mod utils;

pub use mat3::Mat3;
pub use transform::{SaveDepth, Transform, TransformStack};
pub use utils::{dist, map, AngleMode};
