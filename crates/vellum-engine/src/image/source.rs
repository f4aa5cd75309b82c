use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::AbstractImage;

/// Stable identity of a root image, used as a texture cache key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ImageId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

struct ImageRoot<S> {
    id: ImageId,
    source: S,
    loaded: Cell<bool>,
    width: Cell<f32>,
    height: Cell<f32>,
}

/// Shared handle to a platform image.
///
/// Cloning is cheap and clones observe the same load state. Before
/// [`on_load`](Self::on_load) runs, all dimensions are zero and renderers skip
/// the image.
pub struct Image<S> {
    root: Rc<ImageRoot<S>>,
}

impl<S> Clone for Image<S> {
    fn clone(&self) -> Self {
        Self { root: Rc::clone(&self.root) }
    }
}

impl<S> std::fmt::Debug for Image<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.root.id)
            .field("loaded", &self.root.loaded.get())
            .field("w", &self.root.width.get())
            .field("h", &self.root.height.get())
            .finish()
    }
}

impl<S> Image<S> {
    /// Wraps a source that is still loading.
    pub fn new(source: S) -> Self {
        Self {
            root: Rc::new(ImageRoot {
                id: ImageId::next(),
                source,
                loaded: Cell::new(false),
                width: Cell::new(0.0),
                height: Cell::new(0.0),
            }),
        }
    }

    /// Wraps a source whose dimensions are already known.
    pub fn loaded(source: S, width: f32, height: f32) -> Self {
        let image = Self::new(source);
        image.on_load(width, height);
        image
    }

    /// Marks the image as loaded with its natural size.
    ///
    /// Called by the platform loader once decoding completes.
    pub fn on_load(&self, width: f32, height: f32) {
        self.root.width.set(width);
        self.root.height.set(height);
        self.root.loaded.set(true);
        log::trace!("image {:?} loaded ({width}x{height})", self.root.id);
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.root.loaded.get()
    }

    #[inline]
    pub fn id(&self) -> ImageId {
        self.root.id
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.root.source
    }

    /// True when both handles point at the same root.
    #[inline]
    pub fn ptr_eq(&self, other: &Image<S>) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
    }
}

impl<S> AbstractImage<S> for Image<S> {
    fn get(&self) -> &Image<S> {
        self
    }

    fn x(&self) -> f32 {
        0.0
    }

    fn y(&self) -> f32 {
        0.0
    }

    fn w(&self) -> f32 {
        self.root.width.get()
    }

    fn h(&self) -> f32 {
        self.root.height.get()
    }

    fn dw(&self) -> f32 {
        self.root.width.get()
    }

    fn dh(&self) -> f32 {
        self.root.height.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_transition_is_shared_by_clones() {
        let img = Image::new("tiles.png");
        let clone = img.clone();
        assert!(!clone.is_loaded());
        assert_eq!(clone.dw(), 0.0);

        img.on_load(64.0, 32.0);
        assert!(clone.is_loaded());
        assert_eq!((clone.w(), clone.h(), clone.dw(), clone.dh()), (64.0, 32.0, 64.0, 32.0));
        assert!(clone.ptr_eq(&img));
    }

    #[test]
    fn ids_are_distinct() {
        assert_ne!(Image::new(()).id(), Image::new(()).id());
    }
}
