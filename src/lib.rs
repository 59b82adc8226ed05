//! # theme-system
//!
//! Light/dark theme controller for the browser, compiled to WebAssembly.
//! It attaches to an already-rendered page rather than rendering one:
//! the resolved theme is stamped as `data-theme` on the document root,
//! the user's explicit choice is persisted in `localStorage`, the system
//! `prefers-color-scheme` signal is followed until the user picks
//! explicitly, and every change is rebroadcast as a `themechange` event
//! for other page scripts.
//!
//! Pages get a toggle button (adopted when pre-placed as
//! `#theme-toggle`, otherwise synthesized into `.navbar-nav`) and a
//! global Ctrl/Cmd+Shift+D shortcut.

mod bindings;
pub mod controller;
mod dom;
pub mod error;
mod storage;
mod system;
pub mod theme;
pub mod toggle;

pub use controller::ThemeController;
pub use theme::Theme;
pub use toggle::ToggleSize;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

/// Install the controller now, or once parsing finishes when the script
/// runs before the DOM is ready.
fn install_when_ready(size: ToggleSize) {
    match dom::document() {
        Ok(document) if document.ready_state() == "loading" => {
            let on_ready = Closure::once(move || {
                ThemeController::install(size);
            });
            let added = document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
            if added.is_err() {
                log::warn!("failed to defer theme setup to DOMContentLoaded");
            }
            on_ready.forget();
        }
        Ok(_) => {
            ThemeController::install(size);
        }
        Err(err) => log::warn!("cannot initialize the theme system: {err}"),
    }
}

/// Module entry point: set up console logging and the panic hook, then
/// install the controller with the standard toggle rendering.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    install_when_ready(ToggleSize::default());
    log::info!("theme system loaded; Ctrl/Cmd+Shift+D toggles the theme");
}

/// Manual entry point: (re)create the singleton controller, optionally
/// with the compact toggle rendering for pages that pre-place the
/// toggle element.
#[wasm_bindgen(js_name = "initThemeSystem")]
#[must_use]
pub fn init_theme_system(compact: Option<bool>) -> ThemeController {
    let size = if compact.unwrap_or(false) {
        ToggleSize::Compact
    } else {
        ToggleSize::Standard
    };
    ThemeController::install(size)
}
