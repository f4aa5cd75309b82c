use js_sys::Reflect;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::render::Capabilities;

/// Probes the current window once; pass the result to
/// [`create_renderer`](crate::render::create_renderer).
///
/// Without a window (workers, tests) every capability is reported missing.
pub fn detect_capabilities() -> Capabilities {
    let Some(window) = web_sys::window() else {
        return Capabilities::default();
    };
    let caps = Capabilities {
        webgl: supports_webgl(&window),
        touch: Reflect::has(&window, &"ontouchend".into()).unwrap_or(false),
        ios_safari: window
            .navigator()
            .user_agent()
            .map(|ua| is_ios_safari(&ua))
            .unwrap_or(false),
    };
    log::debug!("platform capabilities: {caps:?}");
    caps
}

fn supports_webgl(window: &Window) -> bool {
    let Some(canvas) = window
        .document()
        .and_then(|d| d.create_element("canvas").ok())
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return false;
    };
    ["webgl", "experimental-webgl"]
        .into_iter()
        .any(|name| matches!(canvas.get_context(name), Ok(Some(_))))
}

/// Mobile Safari on iOS; other iOS browsers brand themselves in the user agent.
fn is_ios_safari(ua: &str) -> bool {
    let ios = ["iPhone", "iPad", "iPod"].iter().any(|d| ua.contains(d));
    let branded = ["CriOS", "FxiOS", "EdgiOS", "OPiOS"].iter().any(|b| ua.contains(b));
    ios && ua.contains("Safari") && !branded
}
