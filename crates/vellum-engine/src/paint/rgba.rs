use std::fmt;

use crate::error::Result;

use super::{parse, Color, ColorArgs, Hsla};

/// RGB color with 0–255 channels and a 0–1 alpha.
///
/// Channels set through [`Rgba::set`] are floored to integers, matching CSS
/// `rgb()` semantics; [`Rgba::new`] stores values untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from any of the `set` call shapes.
    pub fn from_args<'a>(args: impl Into<ColorArgs<'a>>) -> Result<Self> {
        let mut color = Self::default();
        color.set(args)?;
        Ok(color)
    }

    /// Overwrites the channels in place.
    ///
    /// - no arguments: opaque black
    /// - one number: gray, opaque
    /// - two numbers: gray and alpha
    /// - three numbers: RGB, opaque
    /// - four numbers: RGBA
    /// - a string: parsed, then converted to RGBA
    /// - another color: converted to RGBA
    pub fn set<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<&mut Self> {
        *self = match args.into() {
            ColorArgs::None => Self::BLACK,
            ColorArgs::One(v) => {
                let v = v.floor();
                Self::new(v, v, v, 1.0)
            }
            ColorArgs::Two(v, a) => {
                let v = v.floor();
                Self::new(v, v, v, a)
            }
            ColorArgs::Three(r, g, b) => Self::new(r.floor(), g.floor(), b.floor(), 1.0),
            ColorArgs::Four(r, g, b, a) => Self::new(r.floor(), g.floor(), b.floor(), a),
            ColorArgs::Str(s) => parse(s)?.rgba(),
            ColorArgs::Color(c) => c.rgba(),
        };
        Ok(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to HSLA.
    ///
    /// Hue, saturation and lightness keep their fractional part, so
    /// [`Hsla::rgba`] lands back on the same channels.
    pub fn hsla(self) -> Hsla {
        let (h, s, l) = unit_hsl(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );
        Hsla::new(h as f32, s as f32, l as f32, self.a)
    }

    #[inline]
    pub fn brightness(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    #[inline]
    pub fn luminance(self) -> f32 {
        self.r * 0.2126 + self.g * 0.7152 + self.b * 0.0722
    }

    #[inline]
    pub fn perceived_brightness(self) -> f32 {
        (0.299 * self.r * self.r + 0.587 * self.g * self.g + 0.114 * self.b * self.b).sqrt()
    }

    /// Interpolates each channel towards `(r, g, b)`, keeping alpha.
    pub fn lerp(self, r: f32, g: f32, b: f32, t: f32) -> Rgba {
        let mix = |from: f32, to: f32| (from + (to - from) * t).floor();
        Rgba::new(mix(self.r, r), mix(self.g, g), mix(self.b, b), self.a)
    }

    pub fn lerp_color(self, to: Color, t: f32) -> Rgba {
        let to = to.rgba();
        self.lerp(to.r, to.g, to.b, t)
    }

    /// Shifts lightness by `value` percentage points.
    pub fn shade(self, value: f32) -> Rgba {
        self.hsla().shade(value).rgba()
    }
}

/// Unit-range RGB to hue in degrees, saturation and lightness in percent.
pub(super) fn unit_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return (0.0, 0.0, l * 100.0);
    }

    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s * 100.0, l * 100.0)
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    // ── set ───────────────────────────────────────────────────────────────

    #[test]
    fn set_call_shapes() {
        assert_eq!(Rgba::from_args(()).unwrap(), Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Rgba::from_args(127.9).unwrap(), Rgba::new(127.0, 127.0, 127.0, 1.0));
        assert_eq!(Rgba::from_args((10.0, 0.5)).unwrap(), Rgba::new(10.0, 10.0, 10.0, 0.5));
        assert_eq!(Rgba::from_args((1.5, 2.5, 3.5)).unwrap(), Rgba::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(
            Rgba::from_args((1.5, 2.5, 3.5, 0.25)).unwrap(),
            Rgba::new(1.0, 2.0, 3.0, 0.25)
        );
    }

    #[test]
    fn set_from_string_and_hsla() {
        assert_eq!(Rgba::from_args("red").unwrap(), Rgba::new(255.0, 0.0, 0.0, 1.0));
        let from_hsla = Rgba::from_args(Hsla::new(240.0, 100.0, 50.0, 1.0)).unwrap();
        assert_eq!(from_hsla, Rgba::new(0.0, 0.0, 255.0, 1.0));
    }

    #[test]
    fn set_rejects_bad_string() {
        assert!(Rgba::from_args("rgb(1, 2)").is_err());
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn round_trip_within_one_over_channel_grid() {
        let mut worst = 0.0_f32;
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let c = Rgba::new(r as f32, g as f32, b as f32, 1.0);
                    let back = c.hsla().rgba();
                    let diff = (back.r - c.r).abs().max((back.g - c.g).abs()).max((back.b - c.b).abs());
                    assert!(diff <= 1.0, "{c} -> {} -> {back}", c.hsla());
                    worst = worst.max(diff);
                }
            }
        }
        assert_eq!(worst, 0.0);
    }

    #[test]
    fn hsla_keeps_fractions() {
        let c = Rgba::new(0.0, 0.0, 75.0, 1.0).hsla();
        assert_eq!((c.h, c.s), (240.0, 100.0));
        assert!(close(c.l, 75.0 / 255.0 * 50.0, 1e-4));
    }

    #[test]
    fn hsla_of_magenta() {
        assert_eq!(
            Rgba::new(255.0, 0.0, 255.0, 1.0).hsla(),
            Hsla::new(300.0, 100.0, 50.0, 1.0)
        );
    }

    // ── metrics ───────────────────────────────────────────────────────────

    #[test]
    fn brightness_metrics_of_magenta() {
        let m = Rgba::new(255.0, 0.0, 255.0, 1.0);
        assert!(close(m.brightness(), 105.315, 1e-3));
        assert!(close(m.luminance(), 72.624, 1e-3));
        assert!(close(m.perceived_brightness(), 163.875_94, 1e-3));
    }

    #[test]
    fn lerp_is_per_channel() {
        let c = Rgba::new(0.0, 100.0, 200.0, 0.5).lerp(100.0, 200.0, 0.0, 0.5);
        assert_eq!(c, Rgba::new(50.0, 150.0, 100.0, 0.5));
    }

    #[test]
    fn display_is_css() {
        assert_eq!(Rgba::new(255.0, 0.0, 0.0, 0.5).to_string(), "rgba(255, 0, 0, 0.5)");
    }
}
