use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use folioboard_shared::Destination;

use crate::dom::get_element;
use crate::drawing::DrawingScreen;
use crate::router::{current_path, listen_popstate, Navigator};
use crate::selector::SelectorScreen;

const ROOT_ELEMENT_ID: &str = "app";

fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

fn document_ready_state(document: &Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn init_logging(window: &Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_ok() {
        log::info!("logging at {level}");
    }
}

enum Screen {
    Selector { _screen: SelectorScreen },
    Drawing { _screen: DrawingScreen },
}

/// The mounted screen. Replacing it drops the previous one, which detaches
/// its listeners and disposes its canvas session.
pub struct App {
    window: Window,
    document: Document,
    root: HtmlElement,
    navigator: Navigator,
    screen: Option<Screen>,
}

impl App {
    pub fn show(&mut self, destination: Destination) -> Result<(), JsValue> {
        self.screen = None;
        let screen = match destination {
            Destination::Selector => Screen::Selector {
                _screen: SelectorScreen::mount(&self.document, &self.root, self.navigator.clone())?,
            },
            Destination::Drawing(profile) => Screen::Drawing {
                _screen: DrawingScreen::mount(
                    &self.window,
                    &self.document,
                    &self.root,
                    profile,
                    self.navigator.clone(),
                )?,
            },
        };
        log::info!("showing {}", destination.route().path());
        self.screen = Some(screen);
        Ok(())
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    EventListener::once(&window, "load", move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    })
    .forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    init_logging(&window);
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let root: HtmlElement = get_element(&document, ROOT_ELEMENT_ID)?;

    let app = Rc::new_cyclic(|weak| {
        RefCell::new(App {
            window: window.clone(),
            document: document.clone(),
            root,
            navigator: Navigator::new(window.clone(), weak.clone()),
            screen: None,
        })
    });
    let navigator = app.borrow().navigator.clone();

    listen_popstate(&window, navigator.clone());

    // The app lives for the whole page.
    std::mem::forget(app);

    // Navigation state is kept in memory only, so a fresh load of /main has
    // no profile and falls back to selection.
    navigator.open(&current_path(&window), None);
    Ok(())
}
