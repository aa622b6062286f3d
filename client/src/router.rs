use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{PopStateEvent, Window};

use folioboard_shared::{Destination, NavState, PendingNavigation, Route};

use crate::app::App;

/// Moves between screens. Screen changes are deferred to a zero-delay timer
/// so a screen is never torn down from inside one of its own listeners.
#[derive(Clone)]
pub struct Navigator {
    window: Window,
    app: Weak<RefCell<App>>,
    pending: Rc<RefCell<PendingNavigation>>,
}

impl Navigator {
    pub fn new(window: Window, app: Weak<RefCell<App>>) -> Self {
        Self {
            window,
            app,
            pending: Rc::new(RefCell::new(PendingNavigation::default())),
        }
    }

    /// Navigates to `destination`, adding a browser history entry. A second
    /// push to the destination already waiting to mount is ignored.
    pub fn push(&self, destination: Destination) {
        if !self.pending.borrow_mut().begin(destination) {
            log::debug!("{} already pending", destination.route().path());
            return;
        }
        if let Err(err) = self.write_history(&destination, false) {
            log::warn!("history push failed: {err:?}");
        }
        self.schedule();
    }

    /// Navigates to `destination`, replacing the current history entry.
    pub fn replace(&self, destination: Destination) {
        if let Err(err) = self.write_history(&destination, true) {
            log::warn!("history replace failed: {err:?}");
        }
        self.show(destination);
    }

    /// Mounts `destination` without touching browser history.
    pub fn show(&self, destination: Destination) {
        self.pending.borrow_mut().begin(destination);
        self.schedule();
    }

    fn schedule(&self) {
        let app = self.app.clone();
        let pending = self.pending.clone();
        Timeout::new(0, move || {
            let Some(destination) = pending.borrow_mut().finish() else {
                return;
            };
            let Some(app) = app.upgrade() else {
                return;
            };
            let result = app.borrow_mut().show(destination);
            if let Err(err) = result {
                log::error!("failed to mount {:?}: {err:?}", destination.route());
            }
        })
        .forget();
    }

    /// Resolves a location, redirecting to profile selection when the
    /// drawing screen has no profile to show.
    pub fn open(&self, path: &str, state: Option<NavState>) {
        let route = Route::from_path(path);
        match route.resolve(state) {
            Ok(destination) if destination.route().path() == path => self.show(destination),
            Ok(destination) => self.replace(destination),
            Err(err) => {
                log::warn!("cannot open {path}: {err}");
                self.replace(Destination::Selector);
            }
        }
    }

    fn write_history(&self, destination: &Destination, replace: bool) -> Result<(), JsValue> {
        let history = self.window.history()?;
        let state = match destination.nav_state() {
            Some(state) => {
                let json = state
                    .to_json()
                    .map_err(|err| JsValue::from_str(&err.to_string()))?;
                JsValue::from_str(&json)
            }
            None => JsValue::NULL,
        };
        let url = Some(destination.route().path());
        if replace {
            history.replace_state_with_url(&state, "", url)
        } else {
            history.push_state_with_url(&state, "", url)
        }
    }
}

pub fn current_path(window: &Window) -> String {
    window.location().pathname().unwrap_or_default()
}

/// Back/forward restores the profile from the history entry's state.
pub fn listen_popstate(window: &Window, navigator: Navigator) {
    let window_cb = window.clone();
    EventListener::new(window, "popstate", move |event| {
        let state = event
            .dyn_ref::<PopStateEvent>()
            .and_then(|event| event.state().as_string())
            .and_then(|text| match NavState::from_json(&text) {
                Ok(state) => Some(state),
                Err(err) => {
                    log::warn!("ignoring history state: {err}");
                    None
                }
            });
        navigator.open(&current_path(&window_cb), state);
    })
    .forget();
}
