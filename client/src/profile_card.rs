use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use folioboard_shared::Profile;

use crate::dom::create_element;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSize {
    Regular,
    Small,
}

impl CardSize {
    fn class_name(self) -> &'static str {
        match self {
            CardSize::Regular => "profile-card",
            CardSize::Small => "profile-card sm",
        }
    }
}

/// Appends a card for `profile` to `parent`. The card keeps no state; clicks
/// go straight to `on_click`.
pub fn mount_profile_card(
    document: &Document,
    parent: &Element,
    profile: &Profile,
    size: CardSize,
    listeners: &mut Vec<EventListener>,
    mut on_click: impl FnMut() + 'static,
) -> Result<HtmlElement, JsValue> {
    let card: HtmlElement = create_element(document, "div", size.class_name())?;
    card.set_attribute("role", "button")?;
    card.set_attribute("data-profile-id", &profile.id.to_string())?;

    let image: HtmlImageElement = create_element(document, "img", "profile-image")?;
    image.set_src(profile.image);
    image.set_alt(profile.name);
    card.append_child(&image)?;

    let name: HtmlElement = create_element(document, "div", "profile-name")?;
    name.set_text_content(Some(profile.name));
    card.append_child(&name)?;

    parent.append_child(&card)?;

    listeners.push(EventListener::new(&card, "click", move |_| on_click()));
    Ok(card)
}
