use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::error::Result;
use crate::math::{SaveDepth, TransformStack};
use crate::render::Context2d;

use super::{backend_error, report};

/// `CanvasRenderingContext2d` behind [`Context2d`].
#[derive(Debug, Clone)]
pub struct WebContext2d {
    ctx: CanvasRenderingContext2d,
    depth: SaveDepth,
}

impl WebContext2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, depth: SaveDepth::default() }
    }

    #[inline]
    pub fn raw(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl TransformStack for WebContext2d {
    fn save(&mut self) {
        self.depth.save();
        self.ctx.save();
    }

    fn restore(&mut self) {
        if self.depth.restore() {
            self.ctx.restore();
        } else {
            self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        report(self.ctx.translate(x.into(), y.into()), "translate");
    }

    fn rotate(&mut self, angle: f32) {
        report(self.ctx.rotate(angle.into()), "rotate");
    }

    fn scale(&mut self, x: f32, y: f32) {
        report(self.ctx.scale(x.into(), y.into()), "scale");
    }

    fn transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        let result = self.ctx.transform(
            m11.into(),
            m12.into(),
            m21.into(),
            m22.into(),
            dx.into(),
            dy.into(),
        );
        report(result, "transform");
    }

    fn set_transform(&mut self, m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) {
        let result = self.ctx.set_transform(
            m11.into(),
            m12.into(),
            m21.into(),
            m22.into(),
            dx.into(),
            dy.into(),
        );
        report(result, "setTransform");
    }
}

impl Context2d for WebContext2d {
    type Image = HtmlImageElement;

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x.into(), y.into());
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x.into(), y.into());
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.rect(x.into(), y.into(), w.into(), h.into());
    }

    fn arc(&mut self, x: f32, y: f32, r: f32, start: f32, end: f32, anticlockwise: bool) {
        let result = self.ctx.arc_with_anticlockwise(
            x.into(),
            y.into(),
            r.into(),
            start.into(),
            end.into(),
            anticlockwise,
        );
        report(result, "arc");
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x.into(), y.into(), w.into(), h.into());
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x.into(), y.into(), w.into(), h.into());
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width.into());
    }

    fn draw_image(
        &mut self,
        image: &HtmlImageElement,
        sx: f32,
        sy: f32,
        sw: f32,
        sh: f32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) -> Result<()> {
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                sx.into(),
                sy.into(),
                sw.into(),
                sh.into(),
                dx.into(),
                dy.into(),
                dw.into(),
                dh.into(),
            )
            .map_err(backend_error)
    }
}
