/// How user-facing angles are interpreted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// Converts a user-facing angle to radians.
    #[inline]
    pub fn to_radians(self, angle: f32) -> f32 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle.to_radians(),
        }
    }

    /// Converts radians back to the user-facing unit.
    #[inline]
    pub fn from_radians(self, angle: f32) -> f32 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle.to_degrees(),
        }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1) * (x2 - x1) + (y2 - y1) * (y2 - y1)).sqrt()
}

/// Re-maps `value` from one range to another, optionally clamping to the target range.
pub fn map(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32, clamp: bool) -> f32 {
    let result = (stop2 - start2) * (value - start1) / (stop1 - start1) + start2;
    if !clamp {
        return result;
    }
    if start2 < stop2 {
        result.clamp(start2, stop2)
    } else {
        result.clamp(stop2, start2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_is_pythagorean() {
        assert_eq!(dist(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn map_linear_and_clamped() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0, false), 50.0);
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0, false), 200.0);
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0, true), 100.0);
        assert_eq!(map(20.0, 0.0, 10.0, 100.0, 0.0, true), 0.0);
    }

    #[test]
    fn degrees_convert_to_radians() {
        let r = AngleMode::Degrees.to_radians(180.0);
        assert!((r - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    }
}
