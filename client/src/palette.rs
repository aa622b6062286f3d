use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

use folioboard_shared::palette::palette_index;
use folioboard_shared::{BrushColor, PALETTE};

pub fn render_palette(document: &Document, palette_el: &HtmlElement, selected: Option<BrushColor>) {
    palette_el.set_inner_html("");
    let selected = selected.and_then(palette_index);
    for (index, color) in PALETTE.iter().enumerate() {
        let Ok(element) = document.create_element("button") else {
            continue;
        };
        let Ok(button) = element.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("data-index", &index.to_string());
        let _ = button.set_attribute("aria-label", &format!("Use color {}", color.name));
        let class_name = if selected == Some(index) {
            "color selected"
        } else {
            "color"
        };
        let _ = button.set_attribute("class", class_name);
        let _ = button.style().set_property("background-color", color.hex);
        let _ = palette_el.append_child(&button);
    }
}

pub fn palette_color_from_event(event: &Event) -> Option<BrushColor> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(index) = element.get_attribute("data-index") {
            let index = index.parse::<usize>().ok()?;
            return PALETTE.get(index).copied();
        }
        current = element.parent_element();
    }
    None
}
