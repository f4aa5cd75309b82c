use core::ops::{Add, Div, Mul, Neg, Sub};

/// 3D vector.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn mag_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn mag(self) -> f32 {
        self.mag_square().sqrt()
    }

    pub fn normalize(self) -> Self {
        let mag = self.mag();
        if mag != 0.0 && mag != 1.0 { self / mag } else { self }
    }

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

    /// Heading of the XY projection in radians.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotates around the Z axis.
    pub fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    #[inline]
    pub fn lerp(self, to: Vec3, t: f32) -> Self {
        self + (to - self) * t
    }

    #[inline]
    pub fn dist(self, to: Vec3) -> f32 {
        (to - self).mag()
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_mul_div() {
        let v = Vec3::new(4.0, 2.0, 6.0);
        assert_eq!(Vec3::zero() + v, v);
        assert_eq!(Vec3::zero() - v, Vec3::new(-4.0, -2.0, -6.0));
        assert_eq!(v * 2.0, Vec3::new(8.0, 4.0, 12.0));
        assert_eq!(v / 2.0, Vec3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn dot_product() {
        assert_eq!(Vec3::new(4.0, 2.0, 6.0).dot(Vec3::new(2.0, 3.0, 4.0)), 8.0 + 6.0 + 24.0);
    }

    #[test]
    fn lerp_halfway() {
        let v = Vec3::new(4.0, 2.0, 6.0).lerp(Vec3::new(8.0, 4.0, 12.0), 0.5);
        assert_eq!(v, Vec3::new(6.0, 3.0, 9.0));
    }

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }
}
