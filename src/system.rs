//! System color-scheme preference, queried and watched through the
//! `prefers-color-scheme` media feature.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MediaQueryList;

use crate::error::{ThemeError, js_error};
use crate::theme::Theme;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn media_query() -> Result<MediaQueryList, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    window
        .match_media(DARK_SCHEME_QUERY)
        .map_err(|err| ThemeError::MediaQuery(js_error(&err)))?
        .ok_or_else(|| ThemeError::MediaQuery("matchMedia is not supported".to_owned()))
}

/// Current system preference.
pub(crate) fn system_theme() -> Result<Theme, ThemeError> {
    Ok(Theme::from_system(media_query()?.matches()))
}

/// Watch system preference changes for the rest of the page's lifetime.
///
/// The callback receives the newly preferred theme. There is no
/// unsubscribe path; the listener lives as long as the page.
pub(crate) fn watch_system_theme(
    mut on_change: impl FnMut(Theme) + 'static,
) -> Result<(), ThemeError> {
    let list = media_query()?;
    let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        on_change(Theme::from_system(event.matches()));
    }) as Box<dyn FnMut(_)>);
    list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::MediaQuery(js_error(&err)))?;
    closure.forget();
    Ok(())
}
