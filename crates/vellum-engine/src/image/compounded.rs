use crate::error::{RenderError, Result};

use super::{AbstractImage, Image};

/// Crop and display-size override over a root image.
#[derive(Debug, Clone)]
pub struct CompoundedImage<S> {
    image: Image<S>,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub dw: f32,
    pub dh: f32,
}

impl<S> CompoundedImage<S> {
    /// `image` is resolved to its root, so nesting never chains wrappers.
    pub fn new(image: &Image<S>, x: f32, y: f32, w: f32, h: f32, dw: f32, dh: f32) -> Self {
        Self { image: image.clone(), x, y, w, h, dw, dh }
    }
}

impl<S> AbstractImage<S> for CompoundedImage<S> {
    fn get(&self) -> &Image<S> {
        &self.image
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn w(&self) -> f32 {
        self.w
    }

    fn h(&self) -> f32 {
        self.h
    }

    fn dw(&self) -> f32 {
        self.dw
    }

    fn dh(&self) -> f32 {
        self.dh
    }
}

/// Scales `image` so it covers a `w`x`h` box, keeping its aspect ratio.
///
/// The source crop is unchanged; only the display size grows.
pub fn stretch<S, I>(image: &I, w: f32, h: f32) -> CompoundedImage<S>
where
    I: AbstractImage<S> + ?Sized,
{
    let x = h / image.h() * image.w();
    let (w, h) = if x < w { (w, w / image.w() * image.h()) } else { (x, h) };
    CompoundedImage::new(image.get(), image.x(), image.y(), image.w(), image.h(), w, h)
}

/// Cuts a region out of `image`.
///
/// `x`/`y`/`dw`/`dh` are in the display space of `image`; they are mapped back
/// to source pixels. Fails when the region leaves the parent's crop, or when
/// the parent has no display size yet (an image that is still loading).
pub fn cut<S, I>(image: &I, x: f32, y: f32, dw: f32, dh: f32) -> Result<CompoundedImage<S>>
where
    I: AbstractImage<S> + ?Sized,
{
    if image.dw() <= 0.0 {
        return Err(RenderError::ImageOutOfBounds { axis: 'X', extent: 'W' });
    }
    if image.dh() <= 0.0 {
        return Err(RenderError::ImageOutOfBounds { axis: 'Y', extent: 'H' });
    }

    let w = image.w() / image.dw() * dw;
    let h = image.h() / image.dh() * dh;

    let x = x + image.x();
    if x + w > image.x() + image.w() {
        return Err(RenderError::ImageOutOfBounds { axis: 'X', extent: 'W' });
    }

    let y = y + image.y();
    if y + h > image.y() + image.h() {
        return Err(RenderError::ImageOutOfBounds { axis: 'Y', extent: 'H' });
    }

    Ok(CompoundedImage::new(image.get(), x, y, w, h, dw, dh))
}
