use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::error::{RenderError, Result};
use crate::image::Image;

/// Starts loading `src`; the returned image turns loaded when the browser
/// fires `load`, and renderers skip it until then.
pub fn load_image(src: &str) -> Result<Image<HtmlImageElement>> {
    let element = HtmlImageElement::new().map_err(|_| RenderError::ResourceCreation("image"))?;
    let image = Image::new(element.clone());

    let target = image.clone();
    let onload = Closure::once_into_js(move || {
        let el = target.source();
        target.on_load(el.natural_width() as f32, el.natural_height() as f32);
    });
    element.set_onload(Some(onload.unchecked_ref()));
    element.set_src(src);
    Ok(image)
}
