use super::Mat3;

/// Save/restore transform stack contract.
///
/// Implemented by the software [`Transform`] (GL backend) and by canvas-2D
/// contexts whose native state stack already tracks the transform.
pub trait TransformStack {
    /// Pushes a copy of the current matrix.
    fn save(&mut self);
    /// Pops the last saved matrix; with nothing saved, resets to identity.
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, x: f32, y: f32);
    fn transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32);
    fn set_transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32);
}

/// Software transform stack over [`Mat3`].
///
/// Saved slots are kept after `restore` and overwritten by the next `save`
/// at the same depth, so steady-state frames do not allocate.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    matrix: Mat3,
    /// Index of the last saved slot; `None` when nothing is saved.
    index: Option<usize>,
    stack: Vec<Mat3>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current matrix.
    #[inline]
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Number of saved matrices currently live.
    #[inline]
    pub fn depth(&self) -> usize {
        self.index.map_or(0, |i| i + 1)
    }

    /// Allocated slots, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.stack.len()
    }
}

/// Save count for native state stacks.
///
/// A canvas context ignores `restore()` with nothing saved; adapters consult
/// this to reset to identity instead.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SaveDepth(usize);

impl SaveDepth {
    #[inline]
    pub fn save(&mut self) {
        self.0 += 1;
    }

    /// Returns `false` when nothing was saved.
    #[inline]
    pub fn restore(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(depth) => {
                self.0 = depth;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TransformStack for Transform {
    fn save(&mut self) {
        let next = self.depth();
        if let Some(slot) = self.stack.get_mut(next) {
            slot.copy_from(&self.matrix);
        } else {
            self.stack.push(self.matrix);
        }
        self.index = Some(next);
    }

    fn restore(&mut self) {
        match self.index {
            Some(i) => {
                self.matrix.copy_from(&self.stack[i]);
                self.index = i.checked_sub(1);
            }
            None => self.matrix.set_identity(),
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.matrix.translate(x, y);
    }

    fn rotate(&mut self, angle: f32) {
        self.matrix.rotate(angle);
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.matrix.scale(x, y);
    }

    fn transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        self.matrix.transform(m11, m12, m21, m22, dx, dy);
    }

    fn set_transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        self.matrix.set_transform(m11, m12, m21, m22, dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_depth_reports_unbalanced_restore() {
        let mut depth = SaveDepth::default();
        assert!(!depth.restore());
        depth.save();
        depth.save();
        assert!(depth.restore());
        assert_eq!(depth.get(), 1);
        assert!(depth.restore());
        assert!(!depth.restore());
        assert_eq!(depth.get(), 0);
    }

    fn scrambled() -> Transform {
        let mut t = Transform::new();
        t.translate(3.0, 4.0);
        t.rotate(0.3);
        t.scale(2.0, 0.5);
        t
    }

    // ── symmetry ──────────────────────────────────────────────────────────

    #[test]
    fn n_saves_then_n_restores_round_trip() {
        for n in 0..6 {
            let mut t = scrambled();
            let before = *t.matrix();
            for i in 0..n {
                t.save();
                t.translate(i as f32, 1.0);
                t.rotate(0.1);
            }
            for _ in 0..n {
                t.restore();
            }
            assert_eq!(*t.matrix(), before, "n = {n}");
            assert_eq!(t.depth(), 0);
        }
    }

    #[test]
    fn saved_snapshot_is_not_aliased() {
        let mut t = Transform::new();
        t.translate(1.0, 1.0);
        t.save();
        t.translate(50.0, 50.0);
        t.restore();
        assert_eq!(t.matrix().apply(0.0, 0.0), (1.0, 1.0));
    }

    // ── over-restore ──────────────────────────────────────────────────────

    #[test]
    fn restore_on_empty_resets_to_identity() {
        let mut t = scrambled();
        t.restore();
        assert_eq!(*t.matrix(), Mat3::IDENTITY);
        t.restore();
        assert_eq!(*t.matrix(), Mat3::IDENTITY);
    }

    // ── slot reuse ────────────────────────────────────────────────────────

    #[test]
    fn slots_are_reused_across_frames() {
        let mut t = Transform::new();
        for _ in 0..10 {
            t.save();
            t.save();
            t.restore();
            t.restore();
        }
        assert_eq!(t.capacity(), 2);
    }
}
