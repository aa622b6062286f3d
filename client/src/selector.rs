use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use folioboard_shared::{Destination, CATALOG};

use crate::dom::create_element;
use crate::profile_card::{mount_profile_card, CardSize};
use crate::router::Navigator;

const HEADER_TEXT: &str = "프로필을 선택해주세요";

pub struct SelectorScreen {
    root: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl SelectorScreen {
    pub fn mount(
        document: &Document,
        container: &HtmlElement,
        navigator: Navigator,
    ) -> Result<Self, JsValue> {
        let root: HtmlElement = create_element(document, "div", "container selector")?;
        let header: HtmlElement = create_element(document, "div", "header")?;
        header.set_text_content(Some(HEADER_TEXT));
        root.append_child(&header)?;

        let list: HtmlElement = create_element(document, "div", "profile-list")?;
        root.append_child(&list)?;

        let mut listeners = Vec::new();
        for profile in CATALOG {
            let navigator = navigator.clone();
            mount_profile_card(
                document,
                &list,
                &profile,
                CardSize::Regular,
                &mut listeners,
                move || {
                    log::info!("selected profile {} ({})", profile.id, profile.name);
                    navigator.push(Destination::Drawing(profile));
                },
            )?;
        }

        container.append_child(&root)?;
        Ok(Self {
            root,
            _listeners: listeners,
        })
    }
}

impl Drop for SelectorScreen {
    fn drop(&mut self) {
        self.root.remove();
    }
}
