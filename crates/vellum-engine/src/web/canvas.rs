use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, WebGlRenderingContext};

use crate::render::{CanvasElement, CanvasSurface, ContextAttributes, ElementSize};

use super::{report, WebContext2d, WebGl};

/// An `HtmlCanvasElement` as a render surface.
#[derive(Debug, Clone)]
pub struct WebCanvas {
    canvas: HtmlCanvasElement,
}

impl WebCanvas {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    #[inline]
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn context(&self, kind: &str, attributes: ContextAttributes) -> Option<Object> {
        let options = Object::new();
        report(
            Reflect::set(&options, &"alpha".into(), &JsValue::from_bool(attributes.alpha)).map(drop),
            "Reflect.set(alpha)",
        );
        report(
            Reflect::set(&options, &"antialias".into(), &JsValue::from_bool(attributes.antialias))
                .map(drop),
            "Reflect.set(antialias)",
        );
        self.canvas
            .get_context_with_context_options(kind, &options)
            .ok()
            .flatten()
    }
}

impl ElementSize for WebCanvas {
    fn element_size(&self) -> (f32, f32) {
        self.client_size()
    }
}

impl ElementSize for web_sys::Element {
    fn element_size(&self) -> (f32, f32) {
        (self.client_width() as f32, self.client_height() as f32)
    }
}

impl CanvasElement for WebCanvas {
    fn set_size(&mut self, css_w: f32, css_h: f32, backing_w: u32, backing_h: u32) {
        let style = self.canvas.style();
        report(style.set_property("width", &format!("{css_w}px")), "style.width");
        report(style.set_property("height", &format!("{css_h}px")), "style.height");
        self.canvas.set_width(backing_w);
        self.canvas.set_height(backing_h);
    }

    fn client_size(&self) -> (f32, f32) {
        (self.canvas.client_width() as f32, self.canvas.client_height() as f32)
    }

    fn parent_size(&self) -> Option<(f32, f32)> {
        self.canvas.parent_element().map(|p| p.element_size())
    }
}

impl CanvasSurface for WebCanvas {
    type Image = HtmlImageElement;
    type Context2d = WebContext2d;
    type Gl = WebGl;

    fn context_2d(&mut self, attributes: ContextAttributes) -> Option<WebContext2d> {
        self.context("2d", attributes)?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
            .map(WebContext2d::new)
    }

    fn context_webgl(&mut self, attributes: ContextAttributes) -> Option<WebGl> {
        self.context("webgl", attributes)
            .or_else(|| self.context("experimental-webgl", attributes))?
            .dyn_into::<WebGlRenderingContext>()
            .ok()
            .map(WebGl::new)
    }
}
