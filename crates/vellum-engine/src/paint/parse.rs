use std::collections::HashMap;

use crate::error::{RenderError, Result};

use super::rgba::unit_hsl;
use super::{Color, ColorArgs, Hsla, Rgba};

/// Parses a CSS-like color string.
///
/// Accepted forms, after trimming and lowercasing:
/// - named colors (`magenta`, `transparent`, ...)
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - `rgb(r, g, b)`, `rgba(r, g, b, a)`
/// - `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
///
/// Named and hex colors and `rgb()` yield [`Color::Rgba`]; `hsl()` yields
/// [`Color::Hsla`].
pub fn parse(input: &str) -> Result<Color> {
    parse_normalized(&input.trim().to_lowercase())
}

/// Memoizing front-end for [`parse`].
///
/// Useful when the same literals are re-parsed every frame.
#[derive(Debug, Default)]
pub struct ColorParser {
    cache: HashMap<String, Color>,
}

impl ColorParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, input: &str) -> Result<Color> {
        let normalized = input.trim().to_lowercase();
        if let Some(hit) = self.cache.get(&normalized) {
            return Ok(*hit);
        }
        let color = parse_normalized(&normalized)?;
        self.cache.insert(normalized, color);
        Ok(color)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Syntactic family of an accepted color string.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Form {
    Keyword,
    Hex,
    Rgb,
    Hsl,
}

impl Form {
    /// Classifies `s`, rejecting what `csscolorparser` would accept but this
    /// grammar does not: signed or percent channels in `rgb()`, unitless
    /// saturation/lightness in `hsl()`, the wrong arity for the function name,
    /// bare hex digits without `#`.
    fn of(s: &str) -> Option<Form> {
        if s.starts_with('#') {
            return Some(Form::Hex);
        }
        if call_shape(s, "rgba", 4, false) || call_shape(s, "rgb", 3, false) {
            return Some(Form::Rgb);
        }
        if call_shape(s, "hsla", 4, true) || call_shape(s, "hsl", 3, true) {
            return Some(Form::Hsl);
        }
        let word = !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase());
        let hex_like = s.bytes().all(|b| b.is_ascii_hexdigit());
        (word && !hex_like).then_some(Form::Keyword)
    }
}

fn parse_normalized(s: &str) -> Result<Color> {
    let syntax = || RenderError::ColorSyntax(s.to_owned());

    if let Some(rgba) = legacy_name(s) {
        return Ok(Color::Rgba(rgba));
    }

    let form = Form::of(s).ok_or_else(syntax)?;
    let parsed = csscolorparser::parse(s).map_err(|_| syntax())?;
    let a = parsed.a as f32;

    match form {
        Form::Hsl => {
            let (h, s, l) = unit_hsl(parsed.r, parsed.g, parsed.b);
            Hsla::from_args(ColorArgs::Four(settle(h), settle(s), settle(l), a)).map(Color::Hsla)
        }
        Form::Keyword | Form::Hex | Form::Rgb => {
            let (r, g, b) = (settle(parsed.r * 255.0), settle(parsed.g * 255.0), settle(parsed.b * 255.0));
            Rgba::from_args(ColorArgs::Four(r, g, b, a)).map(Color::Rgba)
        }
    }
}

/// Keywords from older X11 tables that CSS dropped.
fn legacy_name(s: &str) -> Option<Rgba> {
    let [r, g, b] = match s {
        "feldspar" => [0xd1_u8, 0x92, 0x75],
        "lightslateblue" => [0x84, 0x70, 0xff],
        "violetred" => [0xd0, 0x20, 0x90],
        _ => return None,
    };
    Some(Rgba::new(f32::from(r), f32::from(g), f32::from(b), 1.0))
}

/// Drops float noise below 1e-3 so whole inputs stay whole after flooring.
#[inline]
fn settle(v: f64) -> f32 {
    ((v * 1000.0).round() / 1000.0) as f32
}

/// Checks `name(a, b, ...)` has exactly `arity` unsigned numbers.
///
/// With `percent`, the second and third arguments must carry a `%` suffix.
fn call_shape(s: &str, name: &str, arity: usize, percent: bool) -> bool {
    let Some(inner) = s
        .strip_prefix(name)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    parts.len() == arity
        && parts.iter().enumerate().all(|(i, part)| {
            if percent && (i == 1 || i == 2) {
                part.strip_suffix('%').is_some_and(is_number)
            } else {
                is_number(part)
            }
        })
}

/// Unsigned decimal: `\d+` or `\d*\.\d+`.
fn is_number(s: &str) -> bool {
    let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        Some((int, frac)) => !frac.is_empty() && digits(int) && digits(frac),
        None => !s.is_empty() && digits(s),
    }
}
