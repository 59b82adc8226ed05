//! Thin primitives over the host document: the theme marker attribute,
//! the bounded transition window, the mobile color hint, the pre-paint
//! flash guard, and the change broadcast.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::error::{ThemeError, js_error};
use crate::theme::Theme;

/// Attribute on the document root that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Name of the change notification dispatched on the document.
pub const CHANGE_EVENT: &str = "themechange";

/// Id of the pre-paint style tag that hides the wrong-theme flash before
/// the controller loads.
pub const FLASH_GUARD_ID: &str = "theme-flash-prevention";

/// CSS custom property opening the visual transition window.
const TRANSITION_PROPERTY: &str = "--transition-duration";
const TRANSITION_DURATION: &str = "0.3s";

/// How long the transition window stays open.
pub const TRANSITION_MS: u32 = 300;

pub(crate) fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)
}

fn document_root() -> Result<Element, ThemeError> {
    document()?
        .document_element()
        .ok_or_else(|| ThemeError::Dom("document has no root element".to_owned()))
}

/// Stamp the theme marker attribute on the document root.
pub(crate) fn set_theme_attribute(theme: Theme) -> Result<(), ThemeError> {
    document_root()?
        .set_attribute(THEME_ATTRIBUTE, theme.as_str())
        .map_err(|err| ThemeError::Dom(js_error(&err)))
}

/// Open the transition window and schedule its removal after
/// [`TRANSITION_MS`].
///
/// Fire-and-forget: the timer cannot be cancelled, and a later apply
/// simply reopens the window before an earlier timer closes it.
pub(crate) fn run_transition_window() -> Result<(), ThemeError> {
    let root: HtmlElement = document_root()?
        .dyn_into()
        .map_err(|_| ThemeError::Dom("document root is not an HTML element".to_owned()))?;
    root.style()
        .set_property(TRANSITION_PROPERTY, TRANSITION_DURATION)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?;
    gloo_timers::callback::Timeout::new(TRANSITION_MS, move || {
        let _ = root.style().remove_property(TRANSITION_PROPERTY);
    })
    .forget();
    Ok(())
}

/// Point mobile browser chrome at the theme's background color, creating
/// the `<meta name="theme-color">` element on first use.
pub(crate) fn update_meta_color(theme: Theme) -> Result<(), ThemeError> {
    let document = document()?;
    let meta = match document
        .query_selector("meta[name=\"theme-color\"]")
        .map_err(|err| ThemeError::Dom(js_error(&err)))?
    {
        Some(meta) => meta,
        None => {
            let meta = document
                .create_element("meta")
                .map_err(|err| ThemeError::Dom(js_error(&err)))?;
            meta.set_attribute("name", "theme-color")
                .map_err(|err| ThemeError::Dom(js_error(&err)))?;
            let head = document
                .head()
                .ok_or_else(|| ThemeError::Dom("document has no head".to_owned()))?;
            head.append_child(&meta)
                .map_err(|err| ThemeError::Dom(js_error(&err)))?;
            meta
        }
    };
    meta.set_attribute("content", theme.meta_color())
        .map_err(|err| ThemeError::Dom(js_error(&err)))
}

/// Drop the pre-paint flash guard; the controller now drives the theme
/// attribute directly.
pub(crate) fn remove_flash_guard() -> Result<(), ThemeError> {
    if let Some(style) = document()?.get_element_by_id(FLASH_GUARD_ID) {
        style.remove();
    }
    Ok(())
}

/// Broadcast [`CHANGE_EVENT`] on the document with the given detail.
pub(crate) fn dispatch_theme_change(detail: &JsValue) -> Result<(), ThemeError> {
    let init = web_sys::CustomEventInit::new();
    init.set_detail(detail);
    let event = web_sys::CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?;
    document()?
        .dispatch_event(&event)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?;
    Ok(())
}
