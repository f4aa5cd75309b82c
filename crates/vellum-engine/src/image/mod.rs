//! Image resources consumed by `image()`/`draw_image()`.
//!
//! An [`Image`] is a shared handle to a decoded (or still loading) source
//! owned by the platform. [`CompoundedImage`] layers an independent crop and
//! display size over a root image, so `stretch`/`cut` compose without touching
//! pixel data.
//!
//! Renderers read `x/y/w/h/dw/dh` from the wrapper they are given and the
//! `loaded` flag and pixels from the root returned by `get()`.

mod compounded;
mod source;

pub use compounded::{cut, stretch, CompoundedImage};
pub use source::{Image, ImageId};

/// Common view over plain and compounded images.
pub trait AbstractImage<S> {
    /// The root image holding the pixels.
    fn get(&self) -> &Image<S>;
    /// Source crop origin.
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    /// Source crop size.
    fn w(&self) -> f32;
    fn h(&self) -> f32;
    /// Display size used when `image()` is called without explicit dimensions.
    fn dw(&self) -> f32;
    fn dh(&self) -> f32;
}
