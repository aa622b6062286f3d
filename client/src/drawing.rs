use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    KeyboardEvent, PointerEvent, Window,
};

use folioboard_shared::session::{CANVAS_HEIGHT, CANVAS_WIDTH};
use folioboard_shared::{shortcut, Destination, DrawingSession, Profile, Shortcut, ToolMode};

use crate::dom::{create_button, create_element, event_to_point, set_canvas_mode, set_tool_button};
use crate::export::export_png;
use crate::palette::{palette_color_from_event, render_palette};
use crate::profile_card::{mount_profile_card, CardSize};
use crate::render::redraw;
use crate::router::Navigator;

const SELECT_ICON: &str = "<svg viewBox=\"0 0 20 20\" aria-hidden=\"true\"><path d=\"M5 3l10 7-5 1-2 5z\" fill=\"currentColor\"/></svg>";
const BRUSH_ICON: &str = "<svg viewBox=\"0 0 20 20\" aria-hidden=\"true\"><path d=\"M14 3l3 3-8 8-3-3zM5 12l3 3c-1 2-3 2-5 2 0-2 0-4 2-5z\" fill=\"currentColor\"/></svg>";
const UNDO_ICON: &str = "<svg viewBox=\"0 0 20 20\" aria-hidden=\"true\"><path d=\"M8 5L4 9l4 4M4 9h8a4 4 0 010 8h-2\" stroke=\"currentColor\" stroke-width=\"2\" fill=\"none\" stroke-linecap=\"round\"/></svg>";
const REDO_ICON: &str = "<svg viewBox=\"0 0 20 20\" aria-hidden=\"true\"><path d=\"M12 5l4 4-4 4M16 9H8a4 4 0 000 8h2\" stroke=\"currentColor\" stroke-width=\"2\" fill=\"none\" stroke-linecap=\"round\"/></svg>";
const DOWNLOAD_ICON: &str = "<svg viewBox=\"0 0 20 20\" aria-hidden=\"true\"><path d=\"M10 3v10M6 9l4 4 4-4M4 17h12\" stroke=\"currentColor\" stroke-width=\"2\" fill=\"none\" stroke-linecap=\"round\"/></svg>";

/// Canvas element and its 2D context.
#[derive(Clone)]
pub struct Surface {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

impl Surface {
    fn redraw(&self, session: &DrawingSession) {
        redraw(&self.ctx, session.engine(), true);
    }
}

#[derive(Clone)]
struct Toolbar {
    select_button: HtmlButtonElement,
    brush_button: HtmlButtonElement,
    palette_el: HtmlElement,
}

impl Toolbar {
    fn tool_button(&self, tool: ToolMode) -> &HtmlButtonElement {
        match tool {
            ToolMode::Select => &self.select_button,
            ToolMode::Brush => &self.brush_button,
        }
    }

    fn sync(&self, document: &Document, session: &DrawingSession) {
        for tool in ToolMode::ALL {
            set_tool_button(self.tool_button(tool), !session.tool_enabled(tool));
        }
        if session.palette_visible() {
            let _ = self.palette_el.remove_attribute("hidden");
            render_palette(document, &self.palette_el, Some(session.brush_color()));
        } else {
            let _ = self.palette_el.set_attribute("hidden", "");
            self.palette_el.set_inner_html("");
        }
    }
}

/// The drawing screen for one profile. It owns the session (and with it the
/// canvas engine) plus every listener it registered; all of it is released
/// when the screen is dropped.
pub struct DrawingScreen {
    root: HtmlElement,
    _session: Rc<RefCell<DrawingSession>>,
    _listeners: Vec<EventListener>,
}

impl DrawingScreen {
    pub fn mount(
        window: &Window,
        document: &Document,
        container: &HtmlElement,
        profile: Profile,
        navigator: Navigator,
    ) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();
        let session = Rc::new(RefCell::new(DrawingSession::new(profile)));

        let root: HtmlElement = create_element(document, "div", "container drawing")?;
        let header: HtmlElement = create_element(document, "section", "header")?;
        let profile_slot: HtmlElement = create_element(document, "div", "profile")?;
        header.append_child(&profile_slot)?;
        root.append_child(&header)?;
        mount_profile_card(
            document,
            &profile_slot,
            &profile,
            CardSize::Small,
            &mut listeners,
            move || navigator.push(Destination::Selector),
        )?;

        let body: HtmlElement = create_element(document, "section", "body")?;
        let canvas_container: HtmlElement = create_element(document, "div", "canvas-container")?;
        body.append_child(&canvas_container)?;
        root.append_child(&body)?;

        let tool_bar: HtmlElement = create_element(document, "div", "tool-bar")?;
        let action_tools: HtmlElement = create_element(document, "div", "action-tools")?;
        let revert_tools: HtmlElement = create_element(document, "div", "revert-tools")?;
        tool_bar.append_child(&action_tools)?;
        tool_bar.append_child(&revert_tools)?;
        canvas_container.append_child(&tool_bar)?;

        let select_button = create_button(document, "tool", ToolMode::Select.label(), SELECT_ICON)?;
        let brush_button = create_button(document, "tool", ToolMode::Brush.label(), BRUSH_ICON)?;
        let palette_el: HtmlElement = create_element(document, "div", "palette")?;
        action_tools.append_child(&select_button)?;
        action_tools.append_child(&brush_button)?;
        action_tools.append_child(&palette_el)?;

        let undo_button = create_button(document, "tool", "Undo", UNDO_ICON)?;
        let redo_button = create_button(document, "tool", "Redo", REDO_ICON)?;
        let divider: HtmlElement = create_element(document, "div", "divider")?;
        let export_button = create_button(document, "download-button", "Download PNG", DOWNLOAD_ICON)?;
        revert_tools.append_child(&undo_button)?;
        revert_tools.append_child(&redo_button)?;
        revert_tools.append_child(&divider)?;
        revert_tools.append_child(&export_button)?;

        let canvas: HtmlCanvasElement = create_element(document, "canvas", "board")?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        canvas_container.append_child(&canvas)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let surface = Surface { canvas, ctx };

        let toolbar = Toolbar {
            select_button: select_button.clone(),
            brush_button: brush_button.clone(),
            palette_el: palette_el.clone(),
        };

        {
            let session = session.borrow();
            toolbar.sync(document, &session);
            set_canvas_mode(&surface.canvas, session.tool(), false);
            surface.redraw(&session);
        }

        for tool in ToolMode::ALL {
            let tool_state = session.clone();
            let toolbar_cb = toolbar.clone();
            let surface_cb = surface.clone();
            let document_cb = document.clone();
            listeners.push(EventListener::new(
                toolbar.tool_button(tool),
                "click",
                move |_| {
                    let mut session = tool_state.borrow_mut();
                    if !session.set_tool(tool) {
                        return;
                    }
                    toolbar_cb.sync(&document_cb, &session);
                    set_canvas_mode(&surface_cb.canvas, tool, false);
                    surface_cb.redraw(&session);
                },
            ));
        }

        {
            let palette_state = session.clone();
            let palette_el_cb = palette_el.clone();
            let document_cb = document.clone();
            listeners.push(EventListener::new(&palette_el, "click", move |event| {
                let Some(color) = palette_color_from_event(event) else {
                    return;
                };
                let mut session = palette_state.borrow_mut();
                if session.set_brush_color(color) {
                    render_palette(&document_cb, &palette_el_cb, Some(color));
                }
            }));
        }

        {
            let undo_state = session.clone();
            let surface_cb = surface.clone();
            listeners.push(EventListener::new(&undo_button, "click", move |_| {
                let mut session = undo_state.borrow_mut();
                if session.undo() {
                    surface_cb.redraw(&session);
                }
            }));
        }

        {
            let redo_state = session.clone();
            let surface_cb = surface.clone();
            listeners.push(EventListener::new(&redo_button, "click", move |_| {
                let mut session = redo_state.borrow_mut();
                if session.redo() {
                    surface_cb.redraw(&session);
                }
            }));
        }

        {
            let export_state = session.clone();
            let surface_cb = surface.clone();
            let document_cb = document.clone();
            listeners.push(EventListener::new(&export_button, "click", move |_| {
                let session = export_state.borrow();
                if let Err(err) = export_png(&document_cb, &surface_cb, &session) {
                    log::error!("export failed: {err:?}");
                }
            }));
        }

        {
            let down_state = session.clone();
            let surface_cb = surface.clone();
            listeners.push(EventListener::new_with_options(
                &surface.canvas,
                "pointerdown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    if event.button() != 0 {
                        return;
                    }
                    let Some(point) = event_to_point(&surface_cb.canvas, event) else {
                        return;
                    };
                    event.prevent_default();
                    let mut session = down_state.borrow_mut();
                    if session.pointer_down(point) {
                        let _ = surface_cb.canvas.set_pointer_capture(event.pointer_id());
                        surface_cb.redraw(&session);
                    }
                },
            ));
        }

        {
            let move_state = session.clone();
            let surface_cb = surface.clone();
            listeners.push(EventListener::new(&surface.canvas, "pointermove", move |event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let Some(point) = event_to_point(&surface_cb.canvas, event) else {
                    return;
                };
                let mut session = move_state.borrow_mut();
                if session.pointer_move(point) {
                    set_canvas_mode(&surface_cb.canvas, session.tool(), true);
                    surface_cb.redraw(&session);
                }
            }));
        }

        for kind in ["pointerup", "pointercancel"] {
            let up_state = session.clone();
            let surface_cb = surface.clone();
            listeners.push(EventListener::new(&surface.canvas, kind, move |event| {
                if let Some(event) = event.dyn_ref::<PointerEvent>() {
                    let _ = surface_cb.canvas.release_pointer_capture(event.pointer_id());
                }
                let mut session = up_state.borrow_mut();
                if let Some(id) = session.pointer_up() {
                    log::debug!("{kind} finished {id}");
                }
                set_canvas_mode(&surface_cb.canvas, session.tool(), false);
                surface_cb.redraw(&session);
            }));
        }

        {
            let key_state = session.clone();
            let surface_cb = surface.clone();
            listeners.push(EventListener::new_with_options(
                window,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let modifier = event.meta_key() || event.ctrl_key();
                    let Some(action) = shortcut(&event.key(), modifier, event.shift_key()) else {
                        return;
                    };
                    let mut session = key_state.borrow_mut();
                    let changed = match action {
                        Shortcut::Undo => session.undo(),
                        Shortcut::Redo => session.redo(),
                        Shortcut::DeleteSelected => session.delete_selected(),
                    };
                    if action.suppresses_default(changed) {
                        event.prevent_default();
                    }
                    if changed {
                        surface_cb.redraw(&session);
                    }
                },
            ));
        }

        container.append_child(&root)?;
        log::info!("drawing session opened for profile {}", profile.id);

        Ok(Self {
            root,
            _session: session,
            _listeners: listeners,
        })
    }
}

impl Drop for DrawingScreen {
    fn drop(&mut self) {
        self.root.remove();
        log::info!("drawing session disposed");
    }
}
