use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector in world units.
///
/// Angles are radians; convert with [`AngleMode`](crate::math::AngleMode) when
/// the renderer works in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle`.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn mag_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn mag(self) -> f32 {
        self.mag_square().sqrt()
    }

    /// Returns the vector scaled to length 1. Zero vectors are returned as-is.
    pub fn normalize(self) -> Self {
        let mag = self.mag();
        if mag != 0.0 && mag != 1.0 { self / mag } else { self }
    }

    /// Clamps the length to `max`.
    pub fn limit(self, max: f32) -> Self {
        let mag_sq = self.mag_square();
        if mag_sq > max * max {
            self / mag_sq.sqrt() * max
        } else {
            self
        }
    }

    #[inline]
    pub fn with_mag(self, mag: f32) -> Self {
        self.normalize() * mag
    }

    /// Heading of the vector in radians.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Same length, new heading.
    pub fn with_angle(self, angle: f32) -> Self {
        Self::from_angle(angle) * self.mag()
    }

    pub fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn lerp(self, to: Vec2, t: f32) -> Self {
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    #[inline]
    pub fn dist(self, to: Vec2) -> f32 {
        (to - self).mag()
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn dot_and_mag() {
        assert_eq!(Vec2::new(4.0, 2.0).dot(Vec2::new(2.0, 3.0)), 14.0);
        assert_eq!(Vec2::new(3.0, 4.0).mag(), 5.0);
    }

    #[test]
    fn lerp_halfway() {
        let v = Vec2::new(4.0, 2.0).lerp(Vec2::new(8.0, 4.0), 0.5);
        assert_eq!(v, Vec2::new(6.0, 3.0));
    }

    // ── length ────────────────────────────────────────────────────────────

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec2::zero().normalize(), Vec2::zero());
    }

    #[test]
    fn limit_only_shrinks() {
        assert_eq!(Vec2::new(3.0, 4.0).limit(10.0), Vec2::new(3.0, 4.0));
        assert!(approx(Vec2::new(3.0, 4.0).limit(1.0), Vec2::new(0.6, 0.8)));
    }

    // ── angle ─────────────────────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn() {
        assert!(approx(Vec2::new(1.0, 0.0).rotate(FRAC_PI_2), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn with_angle_keeps_length() {
        let v = Vec2::new(0.0, 2.0).with_angle(0.0);
        assert!(approx(v, Vec2::new(2.0, 0.0)));
    }
}
