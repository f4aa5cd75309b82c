/// 2D affine transform stored as a flat 3x3 matrix.
///
/// Layout is column-major, as uploaded to a GLSL `mat3`:
///
/// ```text
/// | m0 m3 m6 |
/// | m1 m4 m7 |
/// | m2 m5 m8 |
/// ```
///
/// `m6`/`m7` hold the translation. Every operation mutates in place and
/// composes on the right, so it acts in the matrix's local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3(pub [f32; 9]);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn set_identity(&mut self) {
        self.0 = Self::IDENTITY.0;
    }

    /// Overwrites `self` with `other` without allocating.
    #[inline]
    pub fn copy_from(&mut self, other: &Mat3) {
        self.0 = other.0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        let m = &mut self.0;
        m[6] = x * m[0] + y * m[3] + m[6];
        m[7] = x * m[1] + y * m[4] + m[7];
        m[8] = x * m[2] + y * m[5] + m[8];
    }

    pub fn rotate(&mut self, angle: f32) {
        let m = &mut self.0;
        let (m0, m1, m2) = (m[0], m[1], m[2]);
        let (s, c) = angle.sin_cos();
        m[0] = c * m0 + s * m[3];
        m[1] = c * m1 + s * m[4];
        m[2] = c * m2 + s * m[5];
        m[3] = c * m[3] - s * m0;
        m[4] = c * m[4] - s * m1;
        m[5] = c * m[5] - s * m2;
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        let m = &mut self.0;
        m[0] *= x;
        m[1] *= x;
        m[2] *= x;
        m[3] *= y;
        m[4] *= y;
        m[5] *= y;
    }

    /// Component-wise compose that drops the current translation.
    ///
    /// This is not a general matrix product: each scale/skew slot is
    /// multiplied by its counterpart and `m6`/`m7` are zeroed.
    pub fn transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        let m = &mut self.0;
        m[0] *= m11;
        m[1] *= m21;
        m[2] *= dx;
        m[3] *= m12;
        m[4] *= m22;
        m[5] *= dy;
        m[6] = 0.0;
        m[7] = 0.0;
    }

    /// Absolute set of scale/skew/translation. Prior state is ignored.
    pub fn set_transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        let m = &mut self.0;
        m[0] = m11;
        m[1] = m12;
        m[3] = m21;
        m[4] = m22;
        m[6] = dx;
        m[7] = dy;
    }

    /// Maps a local point through the matrix.
    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.0;
        (m[0] * x + m[3] * y + m[6], m[1] * x + m[4] * y + m[7])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5
    }

    // ── compose ───────────────────────────────────────────────────────────

    #[test]
    fn translate_then_scale_is_local() {
        let mut m = Mat3::identity();
        m.translate(10.0, 20.0);
        m.scale(2.0, 3.0);
        assert_eq!(m.apply(1.0, 1.0), (12.0, 23.0));
    }

    #[test]
    fn scale_then_translate_scales_offset() {
        let mut m = Mat3::identity();
        m.scale(2.0, 2.0);
        m.translate(5.0, 5.0);
        assert_eq!(m.apply(0.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut m = Mat3::identity();
        m.rotate(FRAC_PI_2);
        assert!(approx(m.apply(1.0, 0.0), (0.0, 1.0)));
    }

    // ── transform / set_transform ─────────────────────────────────────────

    #[test]
    fn transform_zeroes_translation() {
        let mut m = Mat3::identity();
        m.translate(7.0, 9.0);
        m.transform(2.0, 0.0, 0.0, 3.0, 100.0, 100.0);
        assert_eq!(m.0, [2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn transform_multiplies_slot_wise() {
        let mut m = Mat3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        m.transform(2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
        assert_eq!(m.0, [2.0, 8.0, 18.0, 12.0, 25.0, 42.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn set_transform_ignores_prior_state() {
        let mut m = Mat3::identity();
        m.rotate(1.0);
        m.translate(3.0, 4.0);
        m.set_transform(2.0, 0.0, 0.0, 2.0, 5.0, 6.0);
        assert_eq!(m.apply(1.0, 1.0), (7.0, 8.0));
    }

    #[test]
    fn copy_from_is_a_value_copy() {
        let mut a = Mat3::identity();
        let mut b = Mat3::identity();
        a.translate(1.0, 1.0);
        b.copy_from(&a);
        a.translate(1.0, 1.0);
        assert_eq!(b.apply(0.0, 0.0), (1.0, 1.0));
    }
}
