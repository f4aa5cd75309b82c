use std::fmt;

use crate::error::Result;

use super::{parse, Hsla, Rgba};

/// Which representation a renderer builds for `fill`/`stroke` values.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ColorMode {
    #[default]
    Rgba,
    Hsla,
}

/// A color in one of the two supported representations.
///
/// Value type: copying a `Color` snapshots its channels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Color {
    Rgba(Rgba),
    Hsla(Hsla),
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgba(Rgba::BLACK)
    }
}

impl Color {
    /// The default (opaque black) color in `mode`.
    pub fn default_for(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Rgba => Color::Rgba(Rgba::default()),
            ColorMode::Hsla => Color::Hsla(Hsla::default()),
        }
    }

    /// Builds a new color of representation `mode` from any call shape.
    pub fn from_args<'a>(mode: ColorMode, args: impl Into<ColorArgs<'a>>) -> Result<Self> {
        Ok(match mode {
            ColorMode::Rgba => Color::Rgba(Rgba::from_args(args)?),
            ColorMode::Hsla => Color::Hsla(Hsla::from_args(args)?),
        })
    }

    #[inline]
    pub fn mode(&self) -> ColorMode {
        match self {
            Color::Rgba(_) => ColorMode::Rgba,
            Color::Hsla(_) => ColorMode::Hsla,
        }
    }

    /// Mutates in place, keeping the current representation.
    pub fn set<'a>(&mut self, args: impl Into<ColorArgs<'a>>) -> Result<()> {
        match self {
            Color::Rgba(c) => c.set(args).map(|_| ()),
            Color::Hsla(c) => c.set(args).map(|_| ()),
        }
    }

    #[inline]
    pub fn rgba(&self) -> Rgba {
        match *self {
            Color::Rgba(c) => c,
            Color::Hsla(c) => c.rgba(),
        }
    }

    #[inline]
    pub fn hsla(&self) -> Hsla {
        match *self {
            Color::Rgba(c) => c.hsla(),
            Color::Hsla(c) => c,
        }
    }

    pub fn brightness(&self) -> f32 {
        self.rgba().brightness()
    }

    pub fn luminance(&self) -> f32 {
        self.rgba().luminance()
    }

    pub fn perceived_brightness(&self) -> f32 {
        self.rgba().perceived_brightness()
    }
}

impl From<Rgba> for Color {
    #[inline]
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<Hsla> for Color {
    #[inline]
    fn from(c: Hsla) -> Self {
        Color::Hsla(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba(c) => c.fmt(f),
            Color::Hsla(c) => c.fmt(f),
        }
    }
}

/// The call shapes accepted by color setters.
///
/// Numbers are interpreted by the receiving representation: for RGBA one
/// value is a gray level, for HSLA it is lightness.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColorArgs<'a> {
    None,
    One(f32),
    Two(f32, f32),
    Three(f32, f32, f32),
    Four(f32, f32, f32, f32),
    Str(&'a str),
    Color(Color),
}

impl From<()> for ColorArgs<'_> {
    fn from(_: ()) -> Self {
        ColorArgs::None
    }
}

impl From<f32> for ColorArgs<'_> {
    fn from(v: f32) -> Self {
        ColorArgs::One(v)
    }
}

impl From<(f32, f32)> for ColorArgs<'_> {
    fn from((a, b): (f32, f32)) -> Self {
        ColorArgs::Two(a, b)
    }
}

impl From<(f32, f32, f32)> for ColorArgs<'_> {
    fn from((a, b, c): (f32, f32, f32)) -> Self {
        ColorArgs::Three(a, b, c)
    }
}

impl From<(f32, f32, f32, f32)> for ColorArgs<'_> {
    fn from((a, b, c, d): (f32, f32, f32, f32)) -> Self {
        ColorArgs::Four(a, b, c, d)
    }
}

impl<'a> From<&'a str> for ColorArgs<'a> {
    fn from(s: &'a str) -> Self {
        ColorArgs::Str(s)
    }
}

impl<'a> From<&'a String> for ColorArgs<'a> {
    fn from(s: &'a String) -> Self {
        ColorArgs::Str(s.as_str())
    }
}

impl From<Color> for ColorArgs<'_> {
    fn from(c: Color) -> Self {
        ColorArgs::Color(c)
    }
}

impl From<Rgba> for ColorArgs<'_> {
    fn from(c: Rgba) -> Self {
        ColorArgs::Color(Color::Rgba(c))
    }
}

impl From<Hsla> for ColorArgs<'_> {
    fn from(c: Hsla) -> Self {
        ColorArgs::Color(Color::Hsla(c))
    }
}

/// Shorthand constructor: strings keep their parsed representation,
/// everything else becomes RGBA.
pub fn color<'a>(args: impl Into<ColorArgs<'a>>) -> Result<Color> {
    match args.into() {
        ColorArgs::Str(s) => parse(s),
        ColorArgs::Color(c) => Ok(c),
        other => Color::from_args(ColorMode::Rgba, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_representation() {
        let mut c = Color::default_for(ColorMode::Hsla);
        c.set("red").unwrap();
        assert_eq!(c, Color::Hsla(Hsla::new(0.0, 100.0, 50.0, 1.0)));
    }

    #[test]
    fn color_shorthand_keeps_parsed_kind() {
        assert_eq!(color("hsl(10, 20%, 30%)").unwrap().mode(), ColorMode::Hsla);
        assert_eq!(color((1.0, 2.0, 3.0)).unwrap().mode(), ColorMode::Rgba);
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default().rgba(), Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::default_for(ColorMode::Hsla).rgba(), Rgba::BLACK);
    }
}
