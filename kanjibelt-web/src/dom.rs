use kanjibelt_game::{AssemblyBoard, Rect, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Current viewport dimensions.
#[must_use]
pub fn viewport() -> Viewport {
    let win = window();
    Viewport {
        width: win
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        height: win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

/// Bounding rectangle of an element in viewport coordinates.
#[must_use]
pub fn element_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Rasterize the assembly board onto an offscreen canvas and return a PNG
/// data URL for the judge.
///
/// # Errors
/// Returns an error when canvas creation or 2d-context access fails.
pub fn board_to_data_url(board: &AssemblyBoard, width: u32, height: u32) -> Result<String, JsValue> {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("canvas element cast failed"))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("2d context cast failed"))?;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
    ctx.set_fill_style_str("#1a1a1a");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for part in board.placed() {
        let size = 64.0 * part.scale;
        ctx.save();
        ctx.translate(part.x, part.y)?;
        ctx.rotate(part.rotation)?;
        ctx.set_font(&format!("{size}px serif"));
        ctx.fill_text(&part.label.to_string(), 0.0, 0.0)?;
        ctx.restore();
    }
    canvas.to_data_url_with_type("image/png")
}
