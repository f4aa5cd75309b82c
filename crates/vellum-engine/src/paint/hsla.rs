use std::fmt;

use crate::error::Result;

use super::{parse, Color, ColorArgs, Rgba};

/// HSL color: hue in degrees, saturation and lightness in percent, alpha 0–1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Default for Hsla {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Hsla {
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    pub fn from_args<'a>(args: impl Into<ColorArgs<'a>>) -> Result<Self> {
        let mut color = Self::default();
        color.set(args)?;
        Ok(color)
    }

    /// Overwrites the channels in place.
    ///
    /// One number is lightness, two are lightness and alpha, three or four
    /// are the full HSL(A) tuple. Strings and other colors are converted.
    pub fn set<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<&mut Self> {
        *self = match args.into() {
            ColorArgs::None => Self::default(),
            ColorArgs::One(l) => Self::new(0.0, 0.0, l.floor(), 1.0),
            ColorArgs::Two(l, a) => Self::new(0.0, 0.0, l.floor(), a),
            ColorArgs::Three(h, s, l) => Self::new(h.floor(), s.floor(), l.floor(), 1.0),
            ColorArgs::Four(h, s, l, a) => Self::new(h.floor(), s.floor(), l.floor(), a),
            ColorArgs::Str(s) => parse(s)?.hsla(),
            ColorArgs::Color(c) => c.hsla(),
        };
        Ok(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.h, self.s, self.l, self.a]
    }

    /// Converts to RGBA with whole 0–255 channels.
    pub fn rgba(self) -> Rgba {
        let h = f64::from(self.h) % 360.0 / 360.0;
        let s = f64::from(self.s) * 0.01;
        let l = f64::from(self.l) * 0.01;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f64| -> f32 {
            let t = if t < 0.0 { t + 1.0 } else { t };
            let t = if t > 1.0 { t - 1.0 } else { t };
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            round_half_up(v * 255.0) as f32
        };

        Rgba::new(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
            self.a,
        )
    }

    #[inline]
    pub fn brightness(self) -> f32 {
        self.rgba().brightness()
    }

    #[inline]
    pub fn luminance(self) -> f32 {
        self.rgba().luminance()
    }

    #[inline]
    pub fn perceived_brightness(self) -> f32 {
        self.rgba().perceived_brightness()
    }

    /// Interpolates in RGB space towards `(h, s, l)`, keeping alpha.
    pub fn lerp(self, h: f32, s: f32, l: f32, t: f32) -> Hsla {
        self.lerp_color(Color::Hsla(Hsla::new(h, s, l, 1.0)), t)
    }

    pub fn lerp_color(self, to: Color, t: f32) -> Hsla {
        self.rgba().lerp_color(to, t).hsla()
    }

    /// Shifts lightness by `value`, clamped to 0..=100.
    pub fn shade(self, value: f32) -> Hsla {
        Hsla::new(self.h, self.s, (self.l + value).clamp(0.0, 100.0), self.a)
    }
}

/// `Math.round` semantics: halves go towards positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── set ───────────────────────────────────────────────────────────────

    #[test]
    fn set_call_shapes() {
        assert_eq!(Hsla::from_args(()).unwrap(), Hsla::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Hsla::from_args(50.0).unwrap(), Hsla::new(0.0, 0.0, 50.0, 1.0));
        assert_eq!(Hsla::from_args((50.0, 0.25)).unwrap(), Hsla::new(0.0, 0.0, 50.0, 0.25));
        assert_eq!(
            Hsla::from_args((120.7, 50.2, 25.9)).unwrap(),
            Hsla::new(120.0, 50.0, 25.0, 1.0)
        );
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn magenta_to_rgba() {
        let m = Hsla::from_args("magenta").unwrap();
        assert_eq!(m.rgba(), Rgba::new(255.0, 0.0, 255.0, 1.0));
        assert!((m.brightness() - 105.315).abs() < 1e-3);
    }

    #[test]
    fn red_displays_as_css() {
        assert_eq!(Hsla::from_args("red").unwrap().to_string(), "hsla(0, 100%, 50%, 1)");
    }

    // ── lerp / shade ──────────────────────────────────────────────────────

    #[test]
    fn lerp_towards_white() {
        let c = Hsla::from_args((50.0, 0.25)).unwrap().lerp(0.0, 0.0, 100.0, 0.5);
        assert_eq!((c.h, c.s, c.a), (0.0, 0.0, 0.25));
        assert!((c.l - 191.0 / 255.0 * 100.0).abs() < 1e-4);
    }

    #[test]
    fn shade_darkens_and_clamps() {
        assert_eq!(Hsla::new(0.0, 100.0, 75.0, 1.0).shade(-10.0), Hsla::new(0.0, 100.0, 65.0, 1.0));
        assert_eq!(Hsla::new(0.0, 100.0, 95.0, 1.0).shade(10.0).l, 100.0);
    }
}
