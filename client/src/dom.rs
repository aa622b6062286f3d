use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, PointerEvent};

use folioboard_shared::geometry::normalize_point;
use folioboard_shared::{Point, ToolMode};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn create_element<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {tag}")))
}

pub fn create_button(
    document: &Document,
    class: &str,
    label: &str,
    icon: &str,
) -> Result<HtmlButtonElement, JsValue> {
    let button: HtmlButtonElement = create_element(document, "button", class)?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", label)?;
    button.set_attribute("title", label)?;
    button.set_inner_html(icon);
    Ok(button)
}

/// The active tool's button is disabled so it cannot be re-selected.
pub fn set_tool_button(button: &HtmlButtonElement, active: bool) {
    button.set_disabled(active);
    let pressed = if active { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
}

pub fn set_canvas_mode(canvas: &HtmlCanvasElement, tool: ToolMode, dragging: bool) {
    let cursor = match tool {
        ToolMode::Brush => "crosshair",
        ToolMode::Select if dragging => "move",
        ToolMode::Select => "default",
    };
    if let Ok(element) = canvas.clone().dyn_into::<HtmlElement>() {
        let _ = element.style().set_property("cursor", cursor);
    }
}

/// Maps a pointer position to canvas pixels, compensating for CSS scaling.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Option<Point> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let scale_x = canvas.width() as f64 / rect.width();
    let scale_y = canvas.height() as f64 / rect.height();
    let x = (event.client_x() as f64 - rect.left()) * scale_x;
    let y = (event.client_y() as f64 - rect.top()) * scale_y;
    normalize_point(Point {
        x: x as f32,
        y: y as f32,
    })
}
