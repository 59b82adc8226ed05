//! Page-lifetime event bindings: the toggle click, the global keyboard
//! shortcut, the system-preference watch, and focus hygiene.
//!
//! Installed once per page and never torn down. Handlers resolve the
//! *active* controller through `controller::with_active` instead of
//! capturing an instance, so re-initializing the controller swaps what
//! the handlers act on without stacking listeners.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use crate::controller::ThemeController;
use crate::error::{ThemeError, js_error};
use crate::toggle::TOGGLE_ID;
use crate::{controller, dom, storage, system};

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

/// Clickable element categories whose focus ring is cleared after a
/// click, matched structurally rather than by identity.
const CLICKABLE_SELECTOR: &str = ".clickable-card, .card[data-clickable=\"true\"], \
     .card[onclick], .dashboard-stat[data-clickable=\"true\"], .dashboard-stat[onclick], \
     .dashboard-stat.clickable, a[href], .btn";

/// Subset checked on Enter/Space activation; links and buttons manage
/// their own focus on key activation.
const KEY_CLICKABLE_SELECTOR: &str = ".clickable-card, .card[data-clickable=\"true\"], \
     .card[onclick], .dashboard-stat[data-clickable=\"true\"], .dashboard-stat[onclick], \
     .dashboard-stat.clickable";

/// Delay before clearing focus after a mouse click.
pub const CLICK_BLUR_DELAY_MS: u32 = 50;

/// Delay before clearing focus after a key activation.
pub const KEY_BLUR_DELAY_MS: u32 = 100;

/// Whether a keydown is the global toggle shortcut, Ctrl/Cmd+Shift+D.
/// Shift makes the key report as uppercase `D`.
#[must_use]
pub fn is_toggle_shortcut(ctrl_or_meta: bool, shift: bool, key: &str) -> bool {
    ctrl_or_meta && shift && key == "D"
}

/// Whether a key activation should clear focus afterwards. Tab is exempt
/// so normal keyboard traversal keeps its focus ring.
#[must_use]
pub fn clears_focus(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Install the document-level listeners. Subsequent calls are no-ops.
pub(crate) fn install() -> Result<(), ThemeError> {
    if INSTALLED.with(Cell::get) {
        return Ok(());
    }
    let document = dom::document()?;

    let toggle_selector = format!("#{TOGGLE_ID}");
    let on_toggle_click = Closure::wrap(Box::new(move |event: Event| {
        if closest(&event, &toggle_selector).is_some() {
            event.prevent_default();
            controller::with_active(ThemeController::toggle);
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&document, "click", &on_toggle_click)?;
    on_toggle_click.forget();

    let on_shortcut = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let ctrl_or_meta = event.ctrl_key() || event.meta_key();
        if is_toggle_shortcut(ctrl_or_meta, event.shift_key(), &event.key()) {
            event.prevent_default();
            controller::with_active(ThemeController::toggle);
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&document, "keydown", &on_shortcut)?;
    on_shortcut.forget();

    let on_focus_click = Closure::wrap(Box::new(move |event: Event| {
        if let Some(element) = closest(&event, CLICKABLE_SELECTOR) {
            schedule_blur(element, CLICK_BLUR_DELAY_MS);
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&document, "click", &on_focus_click)?;
    on_focus_click.forget();

    let on_focus_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if !clears_focus(&event.key()) {
            return;
        }
        let Ok(document) = dom::document() else {
            return;
        };
        if let Some(active) = document.active_element() {
            if active.matches(KEY_CLICKABLE_SELECTOR).unwrap_or(false) {
                schedule_blur(active, KEY_BLUR_DELAY_MS);
            }
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&document, "keydown", &on_focus_key)?;
    on_focus_key.forget();

    // Auto-follow the OS preference until the user picks explicitly.
    let watch = system::watch_system_theme(|reported| {
        let stored = storage::stored_theme().unwrap_or_default();
        if let Some(theme) = controller::system_change_target(stored, reported) {
            controller::with_active(|active| active.apply(theme, true));
        }
    });
    if let Err(err) = watch {
        log::warn!("failed to watch system theme changes: {err}");
    }

    INSTALLED.with(|flag| flag.set(true));
    Ok(())
}

fn add_listener<T: ?Sized>(
    document: &web_sys::Document,
    kind: &str,
    closure: &Closure<T>,
) -> Result<(), ThemeError> {
    document
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Dom(js_error(&err)))
}

/// The event target, or its nearest ancestor, matching `selector`.
fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
}

/// Clear visual keyboard focus once the activation has had time to run.
fn schedule_blur(element: Element, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            let _ = element.blur();
        }
    })
    .forget();
}
