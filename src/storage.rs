//! Persistence of the explicit theme choice in `localStorage`.
//!
//! One key, one value. Written only when a theme is explicitly applied,
//! read at startup and when deciding whether a system-preference change
//! may auto-apply. Never deleted.

use web_sys::Storage;

use crate::error::{ThemeError, js_error};
use crate::theme::Theme;

/// `localStorage` key holding the last explicitly chosen theme.
pub const STORAGE_KEY: &str = "app-theme";

fn local_storage() -> Result<Storage, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    window
        .local_storage()
        .map_err(|err| ThemeError::StorageUnavailable(js_error(&err)))?
        .ok_or_else(|| ThemeError::StorageUnavailable("local storage is disabled".to_owned()))
}

/// Read the stored preference.
///
/// Returns `Ok(None)` when nothing valid has been stored; a value naming
/// no known theme counts as absent.
pub(crate) fn stored_theme() -> Result<Option<Theme>, ThemeError> {
    let raw = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|err| ThemeError::StorageRead(js_error(&err)))?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// Persist an explicitly chosen theme.
pub(crate) fn store_theme(theme: Theme) -> Result<(), ThemeError> {
    local_storage()?
        .set_item(STORAGE_KEY, theme.as_str())
        .map_err(|err| ThemeError::StorageWrite(js_error(&err)))
}
