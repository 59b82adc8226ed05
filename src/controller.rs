//! The theme controller: initial resolution, the apply operation, and the
//! JS-facing handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::theme::Theme;
use crate::toggle::{self, ToggleSize};
use crate::{bindings, dom, storage, system};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

struct Inner {
    /// The one authoritative in-memory theme. Always equal to the
    /// document's marker attribute once an apply has completed.
    current: Cell<Theme>,
    toggle_size: ToggleSize,
}

/// Controls the page theme.
///
/// Cloning yields another handle to the same underlying state; the
/// instance made active by [`install`](Self::install) lives for the
/// page's lifetime and is never torn down.
#[wasm_bindgen]
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<Inner>,
}

thread_local! {
    static ACTIVE: RefCell<Option<ThemeController>> = const { RefCell::new(None) };
}

/// Run `f` against the active controller, if one has been installed.
pub(crate) fn with_active(f: impl FnOnce(&ThemeController)) {
    ACTIVE.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            f(controller);
        }
    });
}

/// Initial theme: explicit stored preference, else system preference,
/// else light.
fn resolve_initial(stored: Option<Theme>, system: Option<Theme>) -> Theme {
    stored.or(system).unwrap_or_default()
}

/// A reported system-preference change is honored only while the user
/// has no explicit stored choice.
pub(crate) fn system_change_target(stored: Option<Theme>, reported: Theme) -> Option<Theme> {
    match stored {
        Some(_) => None,
        None => Some(reported),
    }
}

impl ThemeController {
    /// Build a controller, resolve the initial theme, reflect it into the
    /// page, and make this instance the active one.
    ///
    /// Storage and media-query failures are logged and treated as
    /// "absent"; a page without a navbar or pre-placed toggle gets a
    /// warning and keeps the shortcut and `setTheme` paths.
    pub fn install(toggle_size: ToggleSize) -> Self {
        let stored = storage::stored_theme().unwrap_or_else(|err| {
            log::warn!("{err}");
            None
        });
        let system = match system::system_theme() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        };

        let controller = Self {
            inner: Rc::new(Inner {
                current: Cell::new(resolve_initial(stored, system)),
                toggle_size,
            }),
        };
        ACTIVE.with(|slot| *slot.borrow_mut() = Some(controller.clone()));

        controller.apply(controller.current(), false);
        controller.ensure_toggle();
        if let Err(err) = bindings::install() {
            log::warn!("failed to install theme event bindings: {err}");
        }
        if let Err(err) = dom::remove_flash_guard() {
            log::warn!("failed to remove the flash guard: {err}");
        }
        controller
    }

    /// Current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.inner.current.get()
    }

    /// Typed counterpart of [`set_theme`](Self::set_theme).
    pub fn set(&self, theme: Theme) {
        self.apply(theme, true);
    }

    /// Apply `theme` to the page: marker attribute, meta color hint,
    /// toggle refresh, in-memory state, persistence, `themechange`
    /// broadcast. With `animate`, the 300 ms transition window is opened
    /// first.
    ///
    /// Infallible from the caller's view: each step logs its own failure
    /// and the remaining steps still run, so the in-memory state and the
    /// marker attribute cannot drift apart on a partial failure.
    pub fn apply(&self, theme: Theme, animate: bool) {
        if animate {
            if let Err(err) = dom::run_transition_window() {
                log::warn!("failed to open the transition window: {err}");
            }
        }
        if let Err(err) = dom::set_theme_attribute(theme) {
            log::warn!("failed to set the theme attribute: {err}");
        }
        if let Err(err) = dom::update_meta_color(theme) {
            log::warn!("failed to update the meta color hint: {err}");
        }
        self.refresh_toggle(theme);
        self.inner.current.set(theme);
        if let Err(err) = storage::store_theme(theme) {
            log::warn!("{err}");
        }
        self.notify(theme);
    }

    fn refresh_toggle(&self, theme: Theme) {
        let Ok(document) = dom::document() else {
            return;
        };
        if let Some(button) = document.get_element_by_id(toggle::TOGGLE_ID) {
            if let Err(err) = toggle::refresh(&button, theme, self.inner.toggle_size) {
                log::warn!("failed to refresh the theme toggle: {err}");
            }
        }
    }

    fn ensure_toggle(&self) {
        let document = match dom::document() {
            Ok(document) => document,
            Err(err) => {
                log::warn!("{err}");
                return;
            }
        };
        match toggle::ensure(&document, self.current(), self.inner.toggle_size) {
            Ok(true) => {}
            Ok(false) => log::warn!("no suitable container found for the theme toggle"),
            Err(err) => log::warn!("failed to create the theme toggle: {err}"),
        }
    }

    /// Dispatch `themechange` with `{theme, controller}` so other page
    /// scripts can react without polling.
    fn notify(&self, theme: Theme) {
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("theme"),
            &JsValue::from_str(theme.as_str()),
        );
        let _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("controller"),
            &JsValue::from(self.clone()),
        );
        if let Err(err) = dom::dispatch_theme_change(&detail) {
            log::warn!("failed to broadcast the theme change: {err}");
        }
    }
}

#[wasm_bindgen]
impl ThemeController {
    /// Current theme as `"light"` or `"dark"`.
    #[wasm_bindgen(js_name = "theme")]
    #[must_use]
    pub fn theme_js(&self) -> String {
        self.current().to_string()
    }

    /// Flip between light and dark, animated.
    pub fn toggle(&self) {
        self.apply(self.current().flip(), true);
    }

    /// Apply a theme by name. Anything other than `"light"` or `"dark"`
    /// is rejected with a warning, leaving the state unchanged.
    #[wasm_bindgen(js_name = "setTheme")]
    pub fn set_theme(&self, theme: &str) {
        match theme.parse() {
            Ok(theme) => self.apply(theme, true),
            Err(err) => log::warn!("{err}"),
        }
    }
}
