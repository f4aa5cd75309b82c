use std::str::FromStr;

use crate::error::{RenderError, Result};
use crate::paint::{Color, ColorMode};

// ── alignment ─────────────────────────────────────────────────────────────

/// Which edge (or centre) of a rectangle the `x`/`y` passed to `rect`/`image` denote.
///
/// `Left`/`Center`/`Right` set the horizontal alignment, `Top`/`Middle`/`Bottom`
/// the vertical one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RectAlign {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl RectAlign {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, RectAlign::Left | RectAlign::Center | RectAlign::Right)
    }
}

impl FromStr for RectAlign {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(RectAlign::Left),
            "CENTER" => Ok(RectAlign::Center),
            "RIGHT" => Ok(RectAlign::Right),
            "TOP" => Ok(RectAlign::Top),
            "MIDDLE" => Ok(RectAlign::Middle),
            "BOTTOM" => Ok(RectAlign::Bottom),
            _ => Err(RenderError::UnknownRectAlign(s.to_string())),
        }
    }
}

/// Moves `value` so that it denotes the near edge of a span of `size`.
#[inline]
pub fn align(value: f32, size: f32, align: RectAlign) -> f32 {
    match align {
        RectAlign::Left | RectAlign::Top => value,
        RectAlign::Center | RectAlign::Middle => value - size * 0.5,
        RectAlign::Right | RectAlign::Bottom => value - size,
    }
}

// ── shapes ────────────────────────────────────────────────────────────────

/// How `end_shape` interprets the accumulated vertices.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShapeType {
    Points,
    Lines,
    /// One outline through every vertex.
    #[default]
    Polygon,
}

// ── background position ───────────────────────────────────────────────────

/// Argument of `background_position_x`/`background_position_y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BackgroundPosition {
    /// Absolute pixels.
    Value(f32),
    /// Fraction of the surface size.
    Percentages(f32),
    /// `Left`/`Center`/`Right` on x, `Top`/`Middle`/`Bottom` on y.
    Constant(RectAlign),
}

impl BackgroundPosition {
    pub(crate) fn resolve_x(self, w: f32) -> Result<f32> {
        match self {
            BackgroundPosition::Value(v) => Ok(v),
            BackgroundPosition::Percentages(p) => Ok(p * w),
            BackgroundPosition::Constant(c) => {
                let p = match c {
                    RectAlign::Left => 0.0,
                    RectAlign::Center => 0.5,
                    RectAlign::Right => 1.0,
                    _ => {
                        return Err(RenderError::UnknownBackgroundPosition {
                            known: "LEFT, CENTER, RIGHT",
                        });
                    }
                };
                Ok(p * w)
            }
        }
    }

    pub(crate) fn resolve_y(self, h: f32) -> Result<f32> {
        match self {
            BackgroundPosition::Value(v) => Ok(v),
            BackgroundPosition::Percentages(p) => Ok(p * h),
            BackgroundPosition::Constant(c) => {
                let p = match c {
                    RectAlign::Top => 0.0,
                    RectAlign::Middle => 0.5,
                    RectAlign::Bottom => 1.0,
                    _ => {
                        return Err(RenderError::UnknownBackgroundPosition {
                            known: "TOP, MIDDLE, BOTTOM",
                        });
                    }
                };
                Ok(p * h)
            }
        }
    }
}

// ── drawing settings ──────────────────────────────────────────────────────

/// The paint state applied to subsequent draw calls.
///
/// Plain value: copying it snapshots both colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawingSettings {
    pub do_fill: bool,
    pub do_stroke: bool,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f32,
    pub rect_align_x: RectAlign,
    pub rect_align_y: RectAlign,
}

impl DrawingSettings {
    /// Left/top alignment, width 2, fill and stroke on, default colors of `mode`.
    pub fn defaults(mode: ColorMode) -> Self {
        Self {
            do_fill: true,
            do_stroke: true,
            fill_color: Color::default_for(mode),
            stroke_color: Color::default_for(mode),
            line_width: 2.0,
            rect_align_x: RectAlign::Left,
            rect_align_y: RectAlign::Top,
        }
    }
}

/// `push`/`pop` stack of [`DrawingSettings`], independent of the transform stack.
///
/// Like [`Transform`](crate::math::Transform), popped slots stay allocated
/// and are overwritten by the next push at the same depth.
#[derive(Debug, Clone, Default)]
pub struct SettingsStack {
    index: Option<usize>,
    stack: Vec<DrawingSettings>,
}

impl SettingsStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a snapshot of `current`.
    pub fn push(&mut self, current: &DrawingSettings) {
        let next = self.depth();
        if let Some(slot) = self.stack.get_mut(next) {
            *slot = *current;
        } else {
            self.stack.push(*current);
        }
        self.index = Some(next);
    }

    /// Restores the last snapshot into `current`; with nothing pushed, resets it to defaults.
    pub fn pop(&mut self, current: &mut DrawingSettings, mode: ColorMode) {
        match self.index {
            Some(i) => {
                *current = self.stack[i];
                self.index = i.checked_sub(1);
            }
            None => *current = DrawingSettings::defaults(mode),
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.index.map_or(0, |i| i + 1)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgba;

    // ── align ─────────────────────────────────────────────────────────────

    #[test]
    fn align_edges() {
        assert_eq!(align(100.0, 40.0, RectAlign::Left), 100.0);
        assert_eq!(align(100.0, 40.0, RectAlign::Center), 80.0);
        assert_eq!(align(100.0, 40.0, RectAlign::Right), 60.0);
        assert_eq!(align(100.0, 40.0, RectAlign::Top), 100.0);
        assert_eq!(align(100.0, 40.0, RectAlign::Middle), 80.0);
        assert_eq!(align(100.0, 40.0, RectAlign::Bottom), 60.0);
    }

    #[test]
    fn rect_align_parses_known_constants_only() {
        assert_eq!("center".parse::<RectAlign>(), Ok(RectAlign::Center));
        assert_eq!("BOTTOM".parse::<RectAlign>(), Ok(RectAlign::Bottom));
        let err = "justify".parse::<RectAlign>().unwrap_err();
        assert!(err.to_string().contains("LEFT, CENTER, RIGHT, TOP, MIDDLE, BOTTOM"));
    }

    // ── background position ───────────────────────────────────────────────

    #[test]
    fn background_position_kinds() {
        assert_eq!(BackgroundPosition::Value(12.0).resolve_x(600.0), Ok(12.0));
        assert_eq!(BackgroundPosition::Percentages(0.25).resolve_x(600.0), Ok(150.0));
        assert_eq!(
            BackgroundPosition::Constant(RectAlign::Right).resolve_x(600.0),
            Ok(600.0)
        );
        assert_eq!(
            BackgroundPosition::Constant(RectAlign::Middle).resolve_y(400.0),
            Ok(200.0)
        );
        assert!(matches!(
            BackgroundPosition::Constant(RectAlign::Top).resolve_x(600.0),
            Err(RenderError::UnknownBackgroundPosition { known: "LEFT, CENTER, RIGHT" })
        ));
    }

    // ── settings stack ────────────────────────────────────────────────────

    #[test]
    fn push_snapshots_current_settings() {
        let mut current = DrawingSettings::defaults(ColorMode::Rgba);
        current.do_fill = false;
        current.line_width = 5.0;

        let mut stack = SettingsStack::new();
        stack.push(&current);

        current.do_fill = true;
        current.fill_color = Color::Rgba(Rgba::new(255.0, 0.0, 0.0, 1.0));
        current.line_width = 1.0;

        stack.pop(&mut current, ColorMode::Rgba);
        assert!(!current.do_fill);
        assert_eq!(current.line_width, 5.0);
        assert_eq!(current.fill_color, Color::Rgba(Rgba::BLACK));
    }

    #[test]
    fn pop_on_empty_resets_to_defaults() {
        let mut current = DrawingSettings::defaults(ColorMode::Hsla);
        current.do_stroke = false;
        current.rect_align_x = RectAlign::Right;

        let mut stack = SettingsStack::new();
        stack.pop(&mut current, ColorMode::Hsla);
        assert_eq!(current, DrawingSettings::defaults(ColorMode::Hsla));
        stack.pop(&mut current, ColorMode::Hsla);
        assert_eq!(current, DrawingSettings::defaults(ColorMode::Hsla));
    }

    #[test]
    fn slots_are_reused() {
        let current = DrawingSettings::defaults(ColorMode::Rgba);
        let mut scratch = current;
        let mut stack = SettingsStack::new();
        for _ in 0..3 {
            stack.push(&current);
            stack.push(&current);
            stack.pop(&mut scratch, ColorMode::Rgba);
            stack.pop(&mut scratch, ColorMode::Rgba);
        }
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.capacity(), 2);
    }
}
