use crate::error::{RenderError, Result};
use crate::math::{Mat3, SaveDepth, Transform, TransformStack};
use crate::render::Context2d;

use super::surface::HeadlessImage;

/// One recorded `Context2d` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd2d {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
    Transform([f32; 6]),
    SetTransform([f32; 6]),
    BeginPath,
    ClosePath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Rect(f32, f32, f32, f32),
    Arc { x: f32, y: f32, r: f32, start: f32, end: f32, anticlockwise: bool },
    Fill,
    Stroke,
    FillRect(f32, f32, f32, f32),
    ClearRect(f32, f32, f32, f32),
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f32),
    DrawImage { image: String, src: [f32; 4], dst: [f32; 4] },
}

/// A [`Context2d`] that records every call and tracks the transform.
///
/// Like a browser context, an unbalanced `restore` is not forwarded; it is
/// recorded as an identity `SetTransform`.
#[derive(Debug, Clone, Default)]
pub struct Recording2d {
    commands: Vec<Cmd2d>,
    transform: Transform,
    depth: SaveDepth,
    fail_images: bool,
}

impl Recording2d {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commands(&self) -> &[Cmd2d] {
        &self.commands
    }

    /// Returns and forgets the recorded commands.
    pub fn take(&mut self) -> Vec<Cmd2d> {
        std::mem::take(&mut self.commands)
    }

    /// The transform the next path would be drawn with.
    #[inline]
    pub fn current_transform(&self) -> &Mat3 {
        self.transform.matrix()
    }

    /// Makes every later `draw_image` fail without recording.
    pub fn fail_images(&mut self, fail: bool) {
        self.fail_images = fail;
    }

    /// Number of recorded commands equal to `cmd`.
    pub fn count(&self, cmd: &Cmd2d) -> usize {
        self.commands.iter().filter(|c| *c == cmd).count()
    }
}

impl TransformStack for Recording2d {
    fn save(&mut self) {
        self.commands.push(Cmd2d::Save);
        self.depth.save();
        self.transform.save();
    }

    fn restore(&mut self) {
        if self.depth.restore() {
            self.commands.push(Cmd2d::Restore);
            self.transform.restore();
        } else {
            self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(Cmd2d::Translate(x, y));
        self.transform.translate(x, y);
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(Cmd2d::Rotate(angle));
        self.transform.rotate(angle);
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.commands.push(Cmd2d::Scale(x, y));
        self.transform.scale(x, y);
    }

    fn transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        self.commands.push(Cmd2d::Transform([m11, m12, m21, m22, dx, dy]));
        self.transform.transform(m11, m12, m21, m22, dx, dy);
    }

    fn set_transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        self.commands.push(Cmd2d::SetTransform([m11, m12, m21, m22, dx, dy]));
        self.transform.set_transform(m11, m12, m21, m22, dx, dy);
    }
}

impl Context2d for Recording2d {
    type Image = HeadlessImage;

    fn begin_path(&mut self) {
        self.commands.push(Cmd2d::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(Cmd2d::ClosePath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Cmd2d::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Cmd2d::LineTo(x, y));
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(Cmd2d::Rect(x, y, w, h));
    }

    fn arc(&mut self, x: f32, y: f32, r: f32, start: f32, end: f32, anticlockwise: bool) {
        self.commands.push(Cmd2d::Arc { x, y, r, start, end, anticlockwise });
    }

    fn fill(&mut self) {
        self.commands.push(Cmd2d::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(Cmd2d::Stroke);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(Cmd2d::FillRect(x, y, w, h));
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(Cmd2d::ClearRect(x, y, w, h));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(Cmd2d::SetFillStyle(style.to_string()));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.commands.push(Cmd2d::SetStrokeStyle(style.to_string()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(Cmd2d::SetLineWidth(width));
    }

    fn draw_image(
        &mut self,
        image: &HeadlessImage,
        sx: f32,
        sy: f32,
        sw: f32,
        sh: f32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) -> Result<()> {
        if self.fail_images {
            return Err(RenderError::Backend(format!("drawImage({}) failed", image.label)));
        }
        self.commands.push(Cmd2d::DrawImage {
            image: image.label.clone(),
            src: [sx, sy, sw, sh],
            dst: [dx, dy, dw, dh],
        });
        Ok(())
    }
}
